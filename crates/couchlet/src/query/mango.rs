//! Mango query type.

use serde::Serialize;
use serde_json::Value;

/// A structured query for the `_find` endpoint.
///
/// Only `selector` is required; unset options are left out of the request
/// body so the server applies its own defaults.
///
/// # Example
///
/// ```
/// use couchlet::MangoQuery;
/// use serde_json::json;
///
/// let query = MangoQuery::new(json!({"title": "Live And Let Die"}))
///     .fields(["title", "author"])
///     .limit(25);
///
/// assert_eq!(
///     serde_json::to_value(&query).unwrap(),
///     json!({
///         "selector": {"title": "Live And Let Die"},
///         "fields": ["title", "author"],
///         "limit": 25
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MangoQuery {
    pub selector: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_index: Option<Value>,
}

impl MangoQuery {
    pub fn new(selector: Value) -> Self {
        Self {
            selector,
            fields: None,
            sort: None,
            limit: None,
            skip: None,
            bookmark: None,
            use_index: None,
        }
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sort order, e.g. `json!({"year": "desc"})` or a bare field name.
    pub fn sort(mut self, sort: Vec<Value>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Continue from the bookmark of a previous page.
    pub fn bookmark(mut self, bookmark: impl Into<String>) -> Self {
        self.bookmark = Some(bookmark.into());
        self
    }

    pub fn use_index(mut self, index: Value) -> Self {
        self.use_index = Some(index);
        self
    }
}
