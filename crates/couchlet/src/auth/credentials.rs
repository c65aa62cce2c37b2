//! Login credentials type.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Basic-auth credentials for a CouchDB server.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use couchlet::Credentials;
///
/// let creds = Credentials::new("admin", "secret");
/// assert_eq!(creds.username(), "admin");
/// assert_eq!(creds.basic_auth(), "Basic YWRtaW46c2VjcmV0");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the `Authorization` header value: `Basic base64(user:pass)`.
    pub fn basic_auth(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(pair.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("admin", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn basic_auth_encodes_user_and_password() {
        let creds = Credentials::new("user", "pass");
        assert_eq!(creds.basic_auth(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn basic_auth_keeps_colons_in_password() {
        let creds = Credentials::new("foo", "b:ar");
        let expected = format!("Basic {}", STANDARD.encode("foo:b:ar"));
        assert_eq!(creds.basic_auth(), expected);
    }
}
