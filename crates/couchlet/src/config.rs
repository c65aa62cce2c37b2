//! Connection configuration.
//!
//! A [`ConnectionConfig`] describes how to reach a CouchDB server. It is
//! read once when a client is built and never changes afterwards.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// Port CouchDB listens on out of the box.
pub const DEFAULT_PORT: u16 = 5984;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// When set (to any value), requests and responses are traced verbosely.
pub const TRACE_ENV: &str = "COUCHLET_TRACE";

/// URL scheme used to reach the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    /// Returns the URL scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(InvalidInputError::ServerUrl {
                value: s.to_string(),
                reason: "protocol must be http or https".to_string(),
            }
            .into()),
        }
    }
}

/// How to reach a CouchDB server.
///
/// Missing fields fall back to the defaults when deserialized, so the
/// struct can be embedded in an application's own configuration file.
///
/// # Example
///
/// ```
/// use couchlet::{ConnectionConfig, Protocol};
///
/// let config = ConnectionConfig::new()
///     .with_protocol(Protocol::Https)
///     .with_host("couch.example.com")
///     .with_port(6984);
///
/// assert_eq!(config.port, 6984);
/// assert_eq!(config.timeout().as_millis(), 5000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    pub timeout_ms: u64,
    /// Emit method, URI, headers and body of every request as tracing events.
    pub trace: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            protocol: Protocol::Http,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            trace: std::env::var_os(TRACE_ENV).is_some(),
        }
    }
}

impl ConnectionConfig {
    /// Create a configuration with the defaults: `http://127.0.0.1:5984`, 5s timeout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Set the server host: a name, an IPv4 address, or an IPv6 address
    /// with or without brackets.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the per-request timeout. `Duration::ZERO` disables it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
