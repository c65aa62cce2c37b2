//! Server URL type.

use std::fmt;

use url::Url;

use crate::config::{ConnectionConfig, Protocol};
use crate::error::{Error, InvalidInputError};

/// A validated CouchDB server base URL.
///
/// This type ensures the URL is absolute, has a host, and carries no path,
/// query or credentials of its own, so endpoint URLs can be built from it by
/// appending path segments.
///
/// # Example
///
/// ```
/// use couchlet::{Protocol, ServerUrl};
///
/// let server = ServerUrl::new(Protocol::Http, "127.0.0.1", 5984).unwrap();
/// assert_eq!(
///     server.endpoint(Some("posts"), &["_find"]).as_str(),
///     "http://127.0.0.1:5984/posts/_find"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Build a server URL from its parts, validating the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the parts do not form a plain `scheme://host:port` URL.
    /// IPv6 hosts may be given with or without brackets.
    pub fn new(protocol: Protocol, host: &str, port: u16) -> Result<Self, Error> {
        // A bare IPv6 literal needs brackets before a port can follow it.
        let raw = if host.contains(':') && !host.starts_with('[') {
            format!("{}://[{}]:{}", protocol, host, port)
        } else {
            format!("{}://{}:{}", protocol, host, port)
        };
        let url = Url::parse(&raw).map_err(|e| InvalidInputError::ServerUrl {
            value: raw.clone(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, &raw)?;

        Ok(Self(url))
    }

    /// Build a server URL from a connection configuration.
    pub fn from_config(config: &ConnectionConfig) -> Result<Self, Error> {
        Self::new(config.protocol, &config.host, config.port)
    }

    /// Returns the URL for a database (if any) and path below it.
    ///
    /// Every name and segment is percent-encoded as a single path segment,
    /// so a document id containing `/` stays one segment. Empty segments are
    /// skipped; with no database and no segments the server root is returned.
    pub fn endpoint(&self, db: Option<&str>, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear();
            path.extend(db.into_iter().chain(segments.iter().copied()).filter(|s| !s.is_empty()));
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let reject = |reason: &str| -> Error {
            InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(reject("must be an absolute URL"));
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(reject("must have a host"));
        }

        if !url.username().is_empty() || url.password().is_some() {
            return Err(reject("credentials belong in Credentials, not the host"));
        }

        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(reject("host must not contain a path, query or fragment"));
        }

        Ok(())
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
