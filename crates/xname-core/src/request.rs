//! The update request model
//!
//! A single transient entity: built fresh per invocation, serialized
//! once, sent once, discarded. All fields are strings because the wire
//! format carries everything as XML-RPC `<string>` values; the TTL in
//! particular is not validated numerically.

use std::fmt;

use crate::config::{DEFAULT_OLD_ADDRESS, DEFAULT_TTL};
use crate::error::{Error, Result};

/// A validated request to update one A record
///
/// Construction applies the defaults (`oldaddress = "*"`,
/// `ttl = "600"`) and rejects empty required fields, so a value of
/// this type is always safe to serialize and send.
#[derive(Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    zone: String,
    name: String,
    new_address: String,
    old_address: String,
    ttl: String,
    user: String,
    password: String,
}

impl UpdateRequest {
    /// Create a request from the five required fields
    ///
    /// Optional fields start at their defaults; use
    /// [`with_old_address`](Self::with_old_address) and
    /// [`with_ttl`](Self::with_ttl) to override them.
    pub fn new(
        zone: impl Into<String>,
        name: impl Into<String>,
        new_address: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let request = Self {
            zone: zone.into(),
            name: name.into(),
            new_address: new_address.into(),
            old_address: DEFAULT_OLD_ADDRESS.to_string(),
            ttl: DEFAULT_TTL.to_string(),
            user: user.into(),
            password: password.into(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Set the previous address to match (`"*"` matches any)
    pub fn with_old_address(mut self, old_address: impl Into<String>) -> Self {
        self.old_address = old_address.into();
        self
    }

    /// Set the record TTL in seconds
    pub fn with_ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = ttl.into();
        self
    }

    /// The DNS zone to perform the update on
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// The hostname record within the zone
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The new IPv4 address
    pub fn new_address(&self) -> &str {
        &self.new_address
    }

    /// The previous address, or `"*"` for "match any"
    pub fn old_address(&self) -> &str {
        &self.old_address
    }

    /// The record TTL in seconds, as a string
    pub fn ttl(&self) -> &str {
        &self.ttl
    }

    /// The account authorized to update records in this zone
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The password for the account
    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("zone", &self.zone),
            ("name", &self.name),
            ("newaddress", &self.new_address),
            ("user", &self.user),
            ("password", &self.password),
        ] {
            if value.is_empty() {
                return Err(Error::config(format!("required field '{field}' is empty")));
            }
        }
        Ok(())
    }
}

// The password never appears in logs or error output.
impl fmt::Debug for UpdateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateRequest")
            .field("zone", &self.zone)
            .field("name", &self.name)
            .field("new_address", &self.new_address)
            .field("old_address", &self.old_address)
            .field("ttl", &self.ttl)
            .field("user", &self.user)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_at_construction() {
        let request = UpdateRequest::new("example.com", "www", "192.0.2.10", "alice", "hunter2")
            .expect("valid request");
        assert_eq!(request.old_address(), "*");
        assert_eq!(request.ttl(), "600");
    }

    #[test]
    fn builders_override_defaults() {
        let request = UpdateRequest::new("example.com", "www", "192.0.2.10", "alice", "hunter2")
            .expect("valid request")
            .with_old_address("192.0.2.9")
            .with_ttl("3600");
        assert_eq!(request.old_address(), "192.0.2.9");
        assert_eq!(request.ttl(), "3600");
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let err = UpdateRequest::new("example.com", "www", "192.0.2.10", "", "hunter2")
            .expect_err("empty user must fail");
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("user"));
    }

    #[test]
    fn ttl_is_not_validated_numerically() {
        // The wire format carries TTL as a string; the server owns
        // numeric validation.
        let request = UpdateRequest::new("example.com", "www", "192.0.2.10", "alice", "hunter2")
            .expect("valid request")
            .with_ttl("soon");
        assert_eq!(request.ttl(), "soon");
    }

    #[test]
    fn debug_redacts_password() {
        let request = UpdateRequest::new("example.com", "www", "192.0.2.10", "alice", "hunter2")
            .expect("valid request");
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<REDACTED>"));
    }
}
