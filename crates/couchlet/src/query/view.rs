//! View query parameters.

use serde_json::Value;

/// Parameters CouchDB expects as JSON text rather than plain strings.
pub const JSON_ENCODED_KEYS: [&str; 4] = ["key", "keys", "startkey", "endkey"];

/// Query-string parameters for a view or `_all_docs` lookup.
///
/// Values are kept as JSON and turned into query-string text by
/// [`ViewQuery::to_pairs`]: `key`, `keys`, `startkey` and `endkey` are
/// JSON-encoded (a string key keeps its quotes), everything else is sent as
/// plain text.
///
/// # Example
///
/// ```
/// use couchlet::ViewQuery;
/// use serde_json::json;
///
/// let query = ViewQuery::new().key(json!("foo")).limit(10);
/// let pairs = query.to_pairs();
/// assert_eq!(pairs[0], ("key".to_string(), "\"foo\"".to_string()));
/// assert_eq!(pairs[1], ("limit".to_string(), "10".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    params: Vec<(String, Value)>,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any earlier value for the same key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a parameter in place, replacing any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
    }

    pub fn key(self, key: impl Into<Value>) -> Self {
        self.with("key", key)
    }

    pub fn keys(self, keys: Vec<Value>) -> Self {
        self.with("keys", Value::Array(keys))
    }

    pub fn start_key(self, key: impl Into<Value>) -> Self {
        self.with("startkey", key)
    }

    pub fn end_key(self, key: impl Into<Value>) -> Self {
        self.with("endkey", key)
    }

    pub fn limit(self, limit: u64) -> Self {
        self.with("limit", limit)
    }

    pub fn skip(self, skip: u64) -> Self {
        self.with("skip", skip)
    }

    pub fn descending(self, descending: bool) -> Self {
        self.with("descending", descending)
    }

    pub fn include_docs(self, include_docs: bool) -> Self {
        self.with("include_docs", include_docs)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render the parameters as query-string pairs, in insertion order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(key, value)| {
                // A `Value`'s Display is its compact JSON text.
                let text = if JSON_ENCODED_KEYS.contains(&key.as_str()) {
                    value.to_string()
                } else {
                    plain_text(value)
                };
                (key.clone(), text)
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ViewQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = ViewQuery::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
