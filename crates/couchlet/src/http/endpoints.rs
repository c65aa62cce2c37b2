//! Endpoint names and request/response bodies.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Names
// ============================================================================

/// Lists every database on the server.
pub const ALL_DBS: &str = "_all_dbs";

/// Hands out server-generated UUIDs.
pub const UUIDS: &str = "_uuids";

/// Mango query endpoint of a database.
pub const FIND: &str = "_find";

/// Permanently removes document revisions.
pub const PURGE: &str = "_purge";

/// Writes many documents in one request.
pub const BULK_DOCS: &str = "_bulk_docs";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for `_bulk_docs`.
#[derive(Debug, Serialize)]
pub struct BulkDocsRequest<'a, T> {
    pub docs: &'a [T],
}

/// Response from `_uuids`.
#[derive(Debug, Deserialize)]
pub struct UuidsResponse {
    pub uuids: Vec<String>,
}
