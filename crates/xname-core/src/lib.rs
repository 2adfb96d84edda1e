//! # xname-core
//!
//! Core library for the XName dynamic DNS client.
//!
//! Updates a single DNS A record on XName's servers through one
//! `xname.updateArecord` XML-RPC call over HTTPS:
//!
//! - [`UpdateRequest`]: the validated, fully-defaulted record update
//! - [`xmlrpc`]: `methodCall` serialization with the fixed member order
//! - [`Transport`]: seam between the client and the HTTP exchange
//! - [`UpdateClient`]: serialize once, POST once, report the status
//!
//! One invocation performs exactly one network exchange. There is no
//! retry logic, no persistent state, and the XML-RPC response body is
//! never parsed for a fault indicator; callers that need more than
//! "attempted" must inspect [`WireResponse::body`] themselves.

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod transport;
pub mod xmlrpc;

pub use client::UpdateClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use request::UpdateRequest;
pub use transport::{HttpTransport, Transport, WireResponse};
