//! Basic authentication for CouchDB servers.
//!
//! CouchDB accepts HTTP basic auth on every endpoint. The header value is
//! computed once when a client is built and reused for every request.

mod credentials;

pub use credentials::Credentials;
