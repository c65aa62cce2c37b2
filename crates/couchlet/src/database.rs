//! Database-scoped operations.
//!
//! A [`Database`] is a [`CouchClient`] bound to one database name. Every
//! method is a single request through [`CouchClient::fetch`].

use std::collections::BTreeMap;

use reqwest::Method;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::Result;
use crate::auth::Credentials;
use crate::config::ConnectionConfig;
use crate::doc::Auditable;
use crate::error::{Error, InvalidInputError};
use crate::http::{BULK_DOCS, BulkDocsRequest, CouchClient, CouchResponse, FIND, PURGE};
use crate::query::ViewQuery;

/// A handle bound to one database on a CouchDB server.
///
/// # Example
///
/// ```no_run
/// use couchlet::{ConnectionConfig, Credentials, Database, MangoQuery};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct Book {
///     title: String,
///     author: String,
/// }
///
/// # async fn example() -> Result<(), couchlet::Error> {
/// let posts = Database::new(
///     "posts",
///     ConnectionConfig::default(),
///     Some(Credentials::new("admin", "secret")),
/// )?;
///
/// let query = MangoQuery::new(json!({"title": "Live And Let Die"})).fields(["title", "author"]);
/// let page = posts.mango_query(&query).await?.parse::<Book>()?;
/// for book in page.docs {
///     println!("{} by {}", book.title, book.author);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    client: CouchClient,
    name: String,
}

impl Database {
    /// Build a client bound to `name`.
    ///
    /// No request is sent; see [`CouchClient::new`] for the error cases.
    pub fn new(
        name: impl Into<String>,
        config: ConnectionConfig,
        credentials: Option<Credentials>,
    ) -> Result<Self> {
        Ok(Self::from_client(CouchClient::new(config, credentials)?, name))
    }

    pub(crate) fn from_client(client: CouchClient, name: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
        }
    }

    /// Returns the database name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying server client.
    pub fn client(&self) -> &CouchClient {
        &self.client
    }

    async fn fetch(
        &self,
        method: Method,
        path: &[&str],
        body: Option<String>,
        query: &[(String, String)],
    ) -> Result<CouchResponse> {
        self.client
            .fetch(method, Some(&self.name), path, body, query)
            .await
    }

    /// Create this database.
    pub async fn create_database(&self) -> Result<CouchResponse> {
        self.client.create_database(&self.name).await
    }

    /// Delete this database and every document in it.
    pub async fn drop_database(&self) -> Result<CouchResponse> {
        self.client.drop_database(&self.name).await
    }

    /// Save a new document.
    ///
    /// The server assigns an id unless the document carries an `_id` field.
    #[instrument(skip(self, doc), fields(db = %self.name))]
    pub async fn insert<T: Serialize>(&self, doc: &T) -> Result<CouchResponse> {
        let body = serde_json::to_string(doc).map_err(Error::Encode)?;
        debug!("Inserting document");
        self.fetch(Method::POST, &[], Some(body), &[]).await
    }

    /// Save several documents in one `_bulk_docs` request.
    #[instrument(skip(self, docs), fields(db = %self.name, count = docs.len()))]
    pub async fn insert_many<T: Serialize>(&self, docs: &[T]) -> Result<CouchResponse> {
        let body = serde_json::to_string(&BulkDocsRequest { docs }).map_err(Error::Encode)?;
        debug!("Inserting documents in bulk");
        self.fetch(Method::POST, &[BULK_DOCS], Some(body), &[]).await
    }

    /// Replace an existing document.
    ///
    /// # Errors
    ///
    /// A document with an empty `_id` or `_rev` is rejected without
    /// contacting the server.
    #[instrument(skip(self, doc), fields(db = %self.name, id = doc.id()))]
    pub async fn update<T: Auditable + Serialize>(&self, doc: &T) -> Result<CouchResponse> {
        if doc.id().is_empty() || doc.rev().is_empty() {
            return Err(InvalidInputError::MissingRevision.into());
        }

        let body = serde_json::to_string(doc).map_err(Error::Encode)?;
        debug!(rev = doc.rev(), "Updating document");
        self.fetch(Method::PUT, &[doc.id()], Some(body), &[]).await
    }

    /// Delete one revision of a document.
    ///
    /// The id and revision travel as `id` and `rev` query parameters on the
    /// database root.
    #[instrument(skip(self), fields(db = %self.name))]
    pub async fn delete(&self, id: &str, rev: &str) -> Result<CouchResponse> {
        let query = [
            ("id".to_string(), id.to_string()),
            ("rev".to_string(), rev.to_string()),
        ];
        self.fetch(Method::DELETE, &[], None, &query).await
    }

    /// Permanently remove document revisions, keyed by document id.
    #[instrument(skip(self, revisions), fields(db = %self.name, ids = revisions.len()))]
    pub async fn purge(&self, revisions: &BTreeMap<String, Vec<String>>) -> Result<CouchResponse> {
        let body = serde_json::to_string(revisions).map_err(Error::Encode)?;
        self.fetch(Method::POST, &[PURGE], Some(body), &[]).await
    }

    /// Query a view, or the database root when `view` is empty.
    ///
    /// `view` is a slash-separated path such as
    /// `_design/posts/_view/by_title`; each part is escaped separately.
    #[instrument(skip(self, query), fields(db = %self.name))]
    pub async fn find(&self, view: &str, query: &ViewQuery) -> Result<CouchResponse> {
        let pairs = query.to_pairs();
        let path: Vec<&str> = view.split('/').collect();
        self.fetch(Method::GET, &path, None, &pairs).await
    }

    /// Run a Mango query given as raw JSON text.
    #[instrument(skip(self, query), fields(db = %self.name))]
    pub async fn mango(&self, query: &str) -> Result<CouchResponse> {
        self.fetch(Method::POST, &[FIND], Some(query.to_string()), &[])
            .await
    }

    /// Run a Mango query given as any serializable value.
    ///
    /// The value is serialized and sent exactly as [`Database::mango`] would
    /// send the same text.
    pub async fn mango_query<Q: Serialize>(&self, query: &Q) -> Result<CouchResponse> {
        let text = serde_json::to_string(query).map_err(Error::Encode)?;
        self.mango(&text).await
    }
}
