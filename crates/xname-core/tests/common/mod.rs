//! Test doubles shared by the update client contract tests
//!
//! The mock transport records every payload and endpoint it sees and
//! counts calls, so tests can verify both what went on the wire and
//! that nothing did.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use xname_core::transport::{Transport, WireResponse};
use xname_core::{Error, Result};

/// A transport that answers with a canned response or a canned failure
pub struct MockTransport {
    status: u16,
    reason: &'static str,
    body: String,
    failure: Option<String>,
    post_calls: Arc<AtomicUsize>,
    payloads: Arc<Mutex<Vec<String>>>,
    endpoints: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// A transport that always answers with the given status
    pub fn ok(status: u16) -> Self {
        let reason = match status {
            200 => "OK",
            500 => "Internal Server Error",
            _ => "",
        };
        Self {
            status,
            reason,
            body: String::new(),
            failure: None,
            post_calls: Arc::new(AtomicUsize::new(0)),
            payloads: Arc::new(Mutex::new(Vec::new())),
            endpoints: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Like [`ok`](Self::ok) with a fixed response body
    pub fn ok_with_body(status: u16, body: impl Into<String>) -> Self {
        let mut transport = Self::ok(status);
        transport.body = body.into();
        transport
    }

    /// A transport that fails every call with a transport error
    pub fn failing(message: impl Into<String>) -> Self {
        let mut transport = Self::ok(0);
        transport.failure = Some(message.into());
        transport
    }

    /// Create a mock that shares counters and recordings with `other`
    ///
    /// The client takes ownership of a boxed transport, so tests keep
    /// one handle and hand the client a sharing twin.
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            status: other.status,
            reason: other.reason,
            body: other.body.clone(),
            failure: other.failure.clone(),
            post_calls: Arc::clone(&other.post_calls),
            payloads: Arc::clone(&other.payloads),
            endpoints: Arc::clone(&other.endpoints),
        }
    }

    /// How many times `post()` was called
    pub fn post_call_count(&self) -> usize {
        self.post_calls.load(Ordering::SeqCst)
    }

    /// Every payload that reached the transport, in call order
    pub fn payloads(&self) -> Vec<String> {
        self.payloads.lock().unwrap().clone()
    }

    /// Every endpoint that was posted to, in call order
    pub fn endpoints(&self) -> Vec<String> {
        self.endpoints.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, endpoint: &str, body: String) -> Result<WireResponse> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        self.endpoints.lock().unwrap().push(endpoint.to_string());
        self.payloads.lock().unwrap().push(body);

        if let Some(message) = &self.failure {
            return Err(Error::transport(message.clone()));
        }

        Ok(WireResponse {
            status: self.status,
            reason: self.reason.to_string(),
            body: self.body.clone(),
        })
    }
}
