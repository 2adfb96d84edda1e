//! Configuration for the update client
//!
//! The endpoint URL, RPC method name, user-agent string, and field
//! defaults are immutable process-wide values. They are modeled as a
//! config struct initialized once at startup rather than as mutable
//! globals.

use std::time::Duration;

use crate::error::{Error, Result};

/// Production XML-RPC endpoint on XName's servers
pub const XNAME_ENDPOINT: &str = "https://www.xname.org/xmlrpc.php";

/// Fixed RPC method for A record updates
pub const UPDATE_A_RECORD_METHOD: &str = "xname.updateArecord";

/// Default for `oldaddress`; `"*"` tells the server to match any
/// previous address
pub const DEFAULT_OLD_ADDRESS: &str = "*";

/// Default record TTL in seconds, carried as a string on the wire
pub const DEFAULT_TTL: &str = "600";

/// Default HTTP timeout. The exchange is a single small POST, so 30
/// seconds is generous; an unbounded wait is never acceptable.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-agent identifying the client and its version
pub const USER_AGENT: &str = concat!("xname-ddns/", env!("CARGO_PKG_VERSION"));

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// XML-RPC endpoint URL
    pub endpoint: String,

    /// RPC method name sent in `methodName`
    pub method_name: String,

    /// User-agent header value
    pub user_agent: String,

    /// HTTP timeout for the whole exchange
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration pointing at the production endpoint
    pub fn new() -> Self {
        Self {
            endpoint: XNAME_ENDPOINT.to_string(),
            method_name: UPDATE_A_RECORD_METHOD.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the endpoint URL (tests point this at a local server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::config("endpoint URL cannot be empty"));
        }
        if !self.endpoint.starts_with("https://") && !self.endpoint.starts_with("http://") {
            return Err(Error::config(format!(
                "endpoint must use an HTTP or HTTPS scheme, got: {}",
                self.endpoint
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::config("timeout must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, XNAME_ENDPOINT);
        assert_eq!(config.method_name, UPDATE_A_RECORD_METHOD);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        config.validate().expect("default config is valid");
    }

    #[test]
    fn builder_overrides_endpoint_and_timeout() {
        let config = ClientConfig::new()
            .with_endpoint("http://127.0.0.1:8080/xmlrpc.php")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/xmlrpc.php");
        assert_eq!(config.timeout, Duration::from_secs(5));
        config.validate().expect("overridden config is valid");
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = ClientConfig::new().with_endpoint("ftp://example.com/xmlrpc.php");
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ClientConfig::new().with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
