//! Response payload types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A page of documents from a Mango query, with its continuation token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPage<T> {
    /// The matched documents, in server order.
    pub docs: Vec<T>,

    /// Opaque token to pass back for the next page.
    #[serde(default)]
    pub bookmark: String,
}

/// The acknowledgement CouchDB returns for a single document write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentUpdate {
    #[serde(default)]
    pub ok: bool,
    pub id: String,
    pub rev: String,
}

/// Decode a raw `{"docs": [...], "bookmark": "..."}` payload.
///
/// # Example
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Named {
///     name: String,
/// }
///
/// let page = couchlet::doc::parse::<Named>(r#"{"docs":[{"name":"foo"}],"bookmark":"abc"}"#).unwrap();
/// assert_eq!(page.docs[0].name, "foo");
/// assert_eq!(page.bookmark, "abc");
/// ```
pub fn parse<T: DeserializeOwned>(raw: &str) -> Result<DocumentPage<T>, Error> {
    serde_json::from_str(raw).map_err(Error::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn parse_keeps_document_order() {
        let page: DocumentPage<Named> =
            parse(r#"{"docs":[{"name":"a"},{"name":"b"}],"bookmark":"g1"}"#).unwrap();
        let names: Vec<_> = page.docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(page.bookmark, "g1");
    }

    #[test]
    fn parse_reports_shape_mismatch() {
        let err = parse::<Named>(r#"{"docs":[{"title":"x"}]}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn parse_rejects_non_json() {
        assert!(matches!(parse::<Named>("not json"), Err(Error::Decode(_))));
    }

    #[test]
    fn document_update_decodes_write_ack() {
        let ack: DocumentUpdate =
            serde_json::from_str(r#"{"ok":true,"id":"p1","rev":"1-abc"}"#).unwrap();
        assert!(ack.ok);
        assert_eq!(ack.id, "p1");
        assert_eq!(ack.rev, "1-abc");
    }
}
