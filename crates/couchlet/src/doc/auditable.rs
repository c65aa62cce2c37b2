//! Documents that carry an id and a revision.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// A document that can be updated in place.
///
/// CouchDB only accepts an update when the request names the document id
/// and the revision being replaced. Implement this for your own document
/// types, or wrap them in [`Revisioned`].
///
/// # Example
///
/// ```
/// use couchlet::Auditable;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Post {
///     #[serde(rename = "_id")]
///     id: String,
///     #[serde(rename = "_rev")]
///     rev: String,
///     title: String,
/// }
///
/// impl Auditable for Post {
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn rev(&self) -> &str {
///         &self.rev
///     }
/// }
/// ```
pub trait Auditable {
    /// The document `_id`.
    fn id(&self) -> &str;

    /// The current `_rev` of the document.
    fn rev(&self) -> &str;
}

/// A document body paired with its `_id` and `_rev`.
///
/// The body's own fields are flattened next to `_id` and `_rev`, which is
/// how CouchDB stores and returns them.
///
/// ```
/// use couchlet::Revisioned;
/// use serde_json::json;
///
/// let doc = Revisioned::new("post-1", "1-abc", json!({"title": "Live And Let Die"}));
/// assert_eq!(
///     serde_json::to_value(&doc).unwrap(),
///     json!({"_id": "post-1", "_rev": "1-abc", "title": "Live And Let Die"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revisioned<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_rev")]
    pub rev: String,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Revisioned<T> {
    pub fn new(id: impl Into<String>, rev: impl Into<String>, body: T) -> Self {
        Self {
            id: id.into(),
            rev: rev.into(),
            body,
        }
    }

    /// Consume and return the document body.
    pub fn into_body(self) -> T {
        self.body
    }
}

impl<T> Auditable for Revisioned<T> {
    fn id(&self) -> &str {
        &self.id
    }

    fn rev(&self) -> &str {
        &self.rev
    }
}

impl<T> Deref for Revisioned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.body
    }
}

impl<T> DerefMut for Revisioned<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.body
    }
}
