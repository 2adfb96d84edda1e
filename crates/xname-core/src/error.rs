//! Error types for the update client
//!
//! The taxonomy is deliberately small: configuration problems abort
//! before any network activity, serialization problems should never
//! happen for valid requests, and transport problems cover everything
//! between "request sent" and "response headers received".

use thiserror::Error;

/// Result type alias for update operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the XName update client
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is missing or a setting is unusable.
    /// Raised before any network call is attempted.
    #[error("configuration error: {0}")]
    Config(String),

    /// XML-RPC payload serialization failed
    #[error("serialization error: {0}")]
    Xml(String),

    /// DNS resolution, TLS, connection, or timeout failure during the
    /// HTTP exchange
    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a serialization error
    pub fn xml(msg: impl Into<String>) -> Self {
        Self::Xml(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
