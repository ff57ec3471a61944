//! Diagnostic runner
//!
//! Sequences load, probe, and report, and renders the console contract:
//! progress lines and banners on stdout, the optional cause line on
//! stderr. Failures are classified here, once, into an exit code;
//! callers never see an error cross this boundary.

use crate::classify::{classify, EXIT_SUCCESS};
use crate::cli::commands::Cli;
use crate::client::Topology;
use crate::config::Credentials;
use crate::error::Result;
use crate::mask::mask;
use crate::probe::probe;
use tracing::{error, info};

/// Drives one diagnostic run
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full diagnostic and return the process exit code.
    pub async fn execute(&self) -> i32 {
        match self.run().await {
            Ok(topology) => {
                info!(
                    brokers = topology.brokers.len(),
                    gateway = topology.gateway_version.as_deref().unwrap_or("unknown"),
                    "topology received"
                );
                println!("Found {} broker(s) in topology", topology.brokers.len());
                println!("***** CONNECTION SUCCESSFUL *****");
                EXIT_SUCCESS
            }
            Err(e) => {
                let failure = classify(&e);
                error!(exit_code = failure.exit_code(), "diagnostic failed");
                println!("***** CONNECTION FAILED: {} *****", failure.message);
                if let Some(cause) = &failure.cause {
                    eprintln!("Caused by: {cause}");
                }
                failure.exit_code()
            }
        }
    }

    /// Load credentials and perform the probe
    async fn run(&self) -> Result<Topology> {
        println!("Loading environment variables...");
        let credentials = match &self.cli.env_file {
            Some(path) => Credentials::from_file(path),
            None => Credentials::load(),
        }?;

        println!("Using client ID: {}", mask(&credentials.client_id));
        println!("Connecting to Camunda 8 SaaS...");
        println!("Testing connection...");
        probe(&credentials).await
    }
}
