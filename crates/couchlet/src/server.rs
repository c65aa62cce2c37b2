//! Server-scoped operations.

use reqwest::Method;
use tracing::{debug, instrument};

use crate::Result;
use crate::database::Database;
use crate::error::InvalidInputError;
use crate::http::{ALL_DBS, CouchClient, CouchResponse, UUIDS, UuidsResponse};

impl CouchClient {
    /// Returns a handle bound to the named database.
    ///
    /// The database is not checked or created.
    pub fn database(&self, name: impl Into<String>) -> Database {
        Database::from_client(self.clone(), name)
    }

    /// Create a database.
    #[instrument(skip(self))]
    pub async fn create_database(&self, name: &str) -> Result<CouchResponse> {
        debug!("Creating database");
        self.fetch(Method::PUT, Some(name), &[], None, &[]).await
    }

    /// Delete a database and every document in it.
    #[instrument(skip(self))]
    pub async fn drop_database(&self, name: &str) -> Result<CouchResponse> {
        debug!("Dropping database");
        self.fetch(Method::DELETE, Some(name), &[], None, &[]).await
    }

    /// List the names of all databases on the server.
    #[instrument(skip(self))]
    pub async fn list_databases(&self) -> Result<Vec<String>> {
        let response = self.fetch(Method::GET, None, &[ALL_DBS], None, &[]).await?;
        response.json()
    }

    /// Ask the server for `count` fresh UUIDs.
    ///
    /// # Errors
    ///
    /// A count of zero is rejected without contacting the server.
    #[instrument(skip(self))]
    pub async fn uuids(&self, count: u32) -> Result<Vec<String>> {
        if count < 1 {
            return Err(InvalidInputError::UuidCount.into());
        }

        let query = [("count".to_string(), count.to_string())];
        let response = self.fetch(Method::GET, None, &[UUIDS], None, &query).await?;
        let body: UuidsResponse = response.json()?;
        Ok(body.uuids)
    }
}
