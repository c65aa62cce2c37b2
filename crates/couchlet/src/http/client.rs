//! Client handle and request dispatcher.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info, instrument, trace};

use crate::Result;
use crate::auth::Credentials;
use crate::config::ConnectionConfig;
use crate::error::{Error, InvalidInputError, RemoteError, TransportError};
use crate::types::ServerUrl;

use super::response::CouchResponse;

const CLIENT_ID: &str = concat!("couchlet/", env!("CARGO_PKG_VERSION"));

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A handle to one CouchDB server.
///
/// The handle is immutable once built: the header set (client id, JSON
/// content type and, when credentials are given, the basic-auth header) is
/// computed here and reused for every request. Cloning is cheap and clones
/// share the same connection pool.
///
/// # Example
///
/// ```no_run
/// use couchlet::{ConnectionConfig, CouchClient, Credentials};
///
/// # async fn example() -> Result<(), couchlet::Error> {
/// let client = CouchClient::new(ConnectionConfig::default(), Some(Credentials::new("admin", "secret")))?;
/// for name in client.list_databases().await? {
///     println!("{name}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CouchClient {
    http: reqwest::Client,
    server: ServerUrl,
    headers: Arc<HeaderMap>,
    trace: bool,
}

impl CouchClient {
    /// Build a client from a configuration and optional credentials.
    ///
    /// No request is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured protocol, host and port do not form
    /// a valid URL, or if the HTTP client cannot be initialised.
    pub fn new(config: ConnectionConfig, credentials: Option<Credentials>) -> Result<Self> {
        let server = ServerUrl::from_config(&config)?;
        let headers = Arc::new(Self::build_headers(credentials.as_ref()));

        let mut builder = reqwest::Client::builder().default_headers(HeaderMap::clone(&headers));
        // A zero timeout means no client-side limit.
        if !config.timeout().is_zero() {
            builder = builder.timeout(config.timeout());
        }
        let http = builder.build().map_err(TransportError::from)?;

        debug!(server = %server, authenticated = credentials.is_some(), "CouchDB client ready");

        Ok(Self {
            http,
            server,
            headers,
            trace: config.trace,
        })
    }

    /// Build an unauthenticated client for `http://127.0.0.1:5984`.
    pub fn local() -> Result<Self> {
        Self::new(ConnectionConfig::default(), None)
    }

    /// Returns the server base URL.
    pub fn server(&self) -> &ServerUrl {
        &self.server
    }

    /// Returns the headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn build_headers(credentials: Option<&Credentials>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_ID));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        if let Some(credentials) = credentials {
            let mut value = HeaderValue::from_str(&credentials.basic_auth())
                .expect("base64 output is always a valid header value");
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        headers
    }

    /// Send one request and classify the result.
    ///
    /// The URI is the server base, then `db` (if any), then each of `path` as
    /// its own escaped segment, then `query`. Any status of 400 or above is
    /// returned as [`Error::Remote`] carrying the raw body. An empty `db` is
    /// rejected, since it would silently address the server root.
    #[instrument(skip(self, body, query), fields(server = %self.server))]
    pub async fn fetch(
        &self,
        method: Method,
        db: Option<&str>,
        path: &[&str],
        body: Option<String>,
        query: &[(String, String)],
    ) -> Result<CouchResponse> {
        if db.is_some_and(str::is_empty) {
            return Err(InvalidInputError::DatabaseName.into());
        }

        let mut url = self.server.endpoint(db, path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        debug!(%method, %url, "CouchDB request");
        if self.trace {
            info!(
                %method,
                %url,
                headers = ?self.headers,
                body = body.as_deref().unwrap_or(""),
                "request trace"
            );
        }

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Read the full response body and split success from rejection.
    async fn handle_response(&self, response: reqwest::Response) -> Result<CouchResponse> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        trace!(status = %status, "CouchDB response");

        if self.trace {
            info!(status = %status, headers = ?headers, body = %body, "response trace");
        }

        if status.as_u16() >= 400 {
            return Err(Error::Remote(RemoteError::new(status.as_u16(), body)));
        }

        Ok(CouchResponse {
            status: status.as_u16(),
            body,
            headers,
        })
    }
}
