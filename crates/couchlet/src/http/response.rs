//! Response envelope.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::doc::{self, DocumentPage, DocumentUpdate};
use crate::error::Error;

/// The outcome of one successful request.
///
/// The body is kept as raw text; nothing is decoded until the caller asks
/// for a particular shape.
#[derive(Debug, Clone)]
pub struct CouchResponse {
    /// HTTP status code (always below 400).
    pub status: u16,
    /// Raw response body.
    pub body: String,
    /// Response headers.
    pub headers: HeaderMap,
}

impl CouchResponse {
    /// Returns the raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decode the body into any deserializable type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(Error::Decode)
    }

    /// Decode a `{"docs": [...], "bookmark": "..."}` body.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<DocumentPage<T>, Error> {
        doc::parse(&self.body)
    }

    /// Decode the `{"ok", "id", "rev"}` acknowledgement of a single write.
    pub fn document_update(&self) -> Result<DocumentUpdate, Error> {
        self.json()
    }

    /// Returns a response header as text, if present and printable.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the `ETag` header with its surrounding quotes removed.
    ///
    /// CouchDB puts the document revision in the `ETag` of document writes.
    pub fn etag(&self) -> Option<&str> {
        self.header("etag").map(|v| v.trim_matches('"'))
    }
}
