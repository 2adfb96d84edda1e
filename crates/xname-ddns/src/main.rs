//! xname-ddns - update one A record on XName's DNS servers
//!
//! Thin integration layer only: parse flags, initialize logging, run
//! one update attempt, map the outcome to an exit code. All protocol
//! logic lives in `xname-core`.
//!
//! Exit codes:
//! - 0: the request attempt completed (any HTTP status; the response
//!   body is not inspected)
//! - 1: argument validation failure, or `--help`/`--version`
//! - 2: transport failure (DNS, TLS, connect, timeout)

mod cli;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;
use xname_core::{ClientConfig, Error, UpdateClient, UpdateRequest};

use crate::cli::Args;

/// Exit codes for the termination scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliExitCode {
    /// The request attempt completed
    Attempted = 0,
    /// Argument validation failure, or help/version display
    Usage = 1,
    /// Transport failure during the exchange
    Transport = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Map a client error to the exit code it terminates with
fn exit_code_for(error: &Error) -> CliExitCode {
    match error {
        Error::Config(_) => CliExitCode::Usage,
        Error::Xml(_) | Error::Transport(_) => CliExitCode::Transport,
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too; the historical
            // client exits 1 on both, so that contract is kept.
            let _ = e.print();
            return CliExitCode::Usage.into();
        }
    };

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return CliExitCode::Usage.into();
    }

    let request = match args.to_request() {
        Ok(request) => request,
        Err(e) => {
            error!("{e}");
            eprintln!("Run with --help for usage.");
            return CliExitCode::Usage.into();
        }
    };

    let config = ClientConfig::default().with_timeout(Duration::from_secs(args.timeout));

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("failed to create tokio runtime: {e}");
            return CliExitCode::Transport.into();
        }
    };

    rt.block_on(run_update(config, request, args.verbose)).into()
}

/// Perform the single update attempt and decide the exit code
async fn run_update(config: ClientConfig, request: UpdateRequest, verbose: bool) -> CliExitCode {
    let client = match UpdateClient::with_http_transport(config) {
        Ok(client) => client,
        Err(e) => {
            error!("{e}");
            return exit_code_for(&e);
        }
    };

    match client.update(&request).await {
        Ok(response) => {
            println!("Update attempted: HTTP {} {}", response.status, response.reason);
            if verbose && !response.body.is_empty() {
                println!("{}", response.body);
            }
            // Any completed exchange exits 0, even a non-2xx status:
            // automation built on the historical client depends on
            // "attempted", not "succeeded".
            CliExitCode::Attempted
        }
        Err(e) => {
            error!("{e}");
            exit_code_for(&e)
        }
    }
}
