//! Camunda connection check CLI
//!
//! The only place the process exits. Everything below this returns a
//! typed result or an exit code.

use camunda_conncheck::cli::{Cli, Runner};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging goes to stderr; stdout carries the console contract.
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);
    std::process::exit(runner.execute().await);
}
