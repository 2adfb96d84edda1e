//! The update client
//!
//! Orchestrates one record update: serialize the request, POST it,
//! report the resulting status. Exactly one network exchange per call;
//! retries, scheduling, and exit-code policy belong to the caller.

use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::UpdateRequest;
use crate::transport::{HttpTransport, Transport, WireResponse};
use crate::xmlrpc;

/// Client for the XName A record update call
pub struct UpdateClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl UpdateClient {
    /// Create a client over an explicit transport
    pub fn new(config: ClientConfig, transport: Box<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Create a client over the production HTTPS transport
    pub fn with_http_transport(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config.user_agent, config.timeout)?;
        Ok(Self {
            config,
            transport: Box::new(transport),
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one update attempt
    ///
    /// Returns `Ok` for any completed HTTP exchange, including non-2xx
    /// statuses: the response body is not inspected for an XML-RPC
    /// fault, so "attempted" is all the client can honestly report.
    /// Transport failures surface as [`crate::Error::Transport`].
    pub async fn update(&self, request: &UpdateRequest) -> Result<WireResponse> {
        let payload = xmlrpc::update_a_record_call(&self.config.method_name, request)?;

        info!(
            zone = %request.zone(),
            name = %request.name(),
            new_address = %request.new_address(),
            ttl = %request.ttl(),
            "sending A record update"
        );

        let response = self.transport.post(&self.config.endpoint, payload).await?;

        if response.is_success() {
            info!(
                status = response.status,
                reason = %response.reason,
                "update request completed"
            );
        } else {
            warn!(
                status = response.status,
                reason = %response.reason,
                "server answered with a non-success status"
            );
        }

        Ok(response)
    }
}
