//! couchlet - a thin async client for the CouchDB HTTP API
//!
//! Every operation is one HTTP round trip: the library builds the URI,
//! attaches the fixed header set (client id, JSON content type and optional
//! basic auth), sends the request and hands back the raw response. Decoding
//! into your own types happens only when you ask for it.
//!
//! Server-level operations live on [`CouchClient`]; document operations
//! live on a [`Database`] handle bound to one database name.
//!
//! # Example
//!
//! ```no_run
//! use couchlet::{ConnectionConfig, CouchClient, Credentials, Revisioned};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Book {
//!     title: String,
//!     author: String,
//! }
//!
//! # async fn example() -> Result<(), couchlet::Error> {
//! let client = CouchClient::new(ConnectionConfig::default(), Some(Credentials::new("admin", "secret")))?;
//! client.create_database("books").await?;
//!
//! let books = client.database("books");
//! let ack = books
//!     .insert(&Book { title: "Dr. No".into(), author: "Ian Fleming".into() })
//!     .await?
//!     .document_update()?;
//!
//! let edited = Revisioned::new(ack.id, ack.rev, Book { title: "Dr. No".into(), author: "Fleming".into() });
//! books.update(&edited).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Set `COUCHLET_TRACE` in the environment to log every request and response
//! through `tracing`.

pub mod auth;
pub mod config;
mod database;
pub mod doc;
pub mod error;
pub mod http;
pub mod query;
mod server;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use config::{ConnectionConfig, Protocol};
pub use database::Database;
pub use doc::{Auditable, DocumentPage, DocumentUpdate, Revisioned, parse};
pub use error::Error;
pub use http::{CouchClient, CouchResponse};
pub use query::{MangoQuery, ViewQuery};
pub use types::ServerUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
