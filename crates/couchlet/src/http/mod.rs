//! HTTP plumbing.
//!
//! This module provides the client handle, the request dispatcher every
//! operation goes through, and the response envelope it returns.

mod client;
mod endpoints;
mod response;

pub use client::CouchClient;
pub(crate) use endpoints::*;
pub use response::CouchResponse;

pub use reqwest::Method;
pub use reqwest::header::HeaderMap;
