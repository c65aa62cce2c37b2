//! Error types for the couchlet library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, remote rejection, decoding, and input validation errors.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// The unified error type for couchlet operations.
///
/// Nothing is retried or swallowed internally; every failure is surfaced
/// through one of these variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a status code of 400 or above.
    #[error("{0}")]
    Remote(#[from] RemoteError),

    /// Input rejected locally, before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// A caller-supplied value could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A rejection from the remote server.
///
/// CouchDB returns readable JSON error bodies, so the raw body is kept
/// verbatim and becomes the error message. Callers that need to branch on
/// the error kind can use [`RemoteError::reason`].
#[derive(Debug, Clone)]
pub struct RemoteError {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

/// The `{"error": ..., "reason": ...}` body CouchDB sends on failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorReason {
    pub error: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.body)
    }
}

impl std::error::Error for RemoteError {}

impl RemoteError {
    /// Create a new remote error.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Try to decode the body as a CouchDB error object.
    pub fn reason(&self) -> Option<ErrorReason> {
        serde_json::from_str(&self.body).ok()
    }

    /// Check if the server reported a missing document or database.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the server reported a revision conflict.
    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }

    /// Check if the server rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// The configured protocol, host and port do not form a URL.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },

    /// A database name was empty, which would address the server root.
    #[error("database name must not be empty")]
    DatabaseName,

    /// A document passed to an update has no id or no revision.
    #[error("_id and _rev must be set on a document before it can be updated")]
    MissingRevision,

    /// UUID allocation needs at least one UUID.
    #[error("uuid count must be greater than 0")]
    UuidCount,
}
