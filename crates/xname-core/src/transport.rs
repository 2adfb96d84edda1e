//! Transport abstraction and the HTTPS implementation
//!
//! The update client talks to the endpoint through the [`Transport`]
//! trait so that tests can substitute a mock and count calls. The
//! production implementation is a thin reqwest wrapper that performs
//! exactly one POST per invocation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::{Error, Result};

/// What the client observes from one HTTP exchange
///
/// The body is carried for diagnostics only. It is never parsed for an
/// XML-RPC fault indicator; a completed exchange counts as "attempted"
/// whatever the server said. Known limitation inherited from earlier
/// clients whose callers depend on it.
#[derive(Debug, Clone)]
pub struct WireResponse {
    /// HTTP status code
    pub status: u16,
    /// HTTP reason phrase, empty if the status is non-standard
    pub reason: String,
    /// Raw response body
    pub body: String,
}

impl WireResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for posting one XML-RPC payload and reading the response
///
/// Implementations perform a single exchange per call. No retries, no
/// backoff, no caching; failure is reported as [`Error::Transport`]
/// and the caller decides what to do.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `endpoint` and wait for the response
    async fn post(&self, endpoint: &str, body: String) -> Result<WireResponse>;
}

/// HTTPS transport backed by reqwest
///
/// Sends `Content-Type: text/xml` and the client user-agent;
/// `Content-Length` is derived from the sized body, so it is always
/// the exact UTF-8 byte length of the payload. The whole exchange is
/// bounded by the configured timeout.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given user-agent and timeout
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, endpoint: &str, body: String) -> Result<WireResponse> {
        debug!(endpoint, bytes = body.len(), "posting XML-RPC request");

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "text/xml")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::transport(format!("request to {endpoint} failed: {e}")))?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("").to_string();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read response body: {e}")))?;

        debug!(status = status.as_u16(), "received response");
        Ok(WireResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
