//! Command-line surface
//!
//! `--oldaddress` and `--ttl` are optional; every other record flag is
//! required. The TTL stays a string all the way to the wire, so no
//! numeric validation happens here.

use clap::Parser;
use xname_core::config::{DEFAULT_OLD_ADDRESS, DEFAULT_TTL};
use xname_core::{Result, UpdateRequest};

/// Update an A record on XName's DNS servers
#[derive(Parser, Debug)]
#[command(name = "xname-ddns", version, about, long_about = None)]
pub struct Args {
    /// The zone to perform the update on
    #[arg(long, value_name = "ZONE")]
    pub zone: String,

    /// The hostname record to update
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// The new IP address
    #[arg(long, value_name = "ADDR")]
    pub newaddress: String,

    /// The previous IP address; matches any by default
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_OLD_ADDRESS)]
    pub oldaddress: String,

    /// The TTL in seconds
    #[arg(long, value_name = "SECS", default_value = DEFAULT_TTL)]
    pub ttl: String,

    /// The username that is authorized to update records for this zone
    #[arg(long, value_name = "USER")]
    pub user: String,

    /// The password for the account specified with --user
    #[arg(long, value_name = "PASSWORD")]
    pub password: String,

    /// HTTP timeout for the exchange, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Print the raw response body and enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    /// Build the validated update request from the parsed flags
    pub fn to_request(&self) -> Result<UpdateRequest> {
        Ok(UpdateRequest::new(
            &self.zone,
            &self.name,
            &self.newaddress,
            &self.user,
            &self.password,
        )?
        .with_old_address(&self.oldaddress)
        .with_ttl(&self.ttl))
    }
}
