//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Camunda 8 SaaS connection diagnostic
///
/// Verifies that the credentials in `envVarsExtended.txt` can reach the
/// configured cluster and receive a topology response.
///
/// Exit codes: 0 success, 1 SSL error, 2 connection error,
/// 3 authentication error, 4 anything else.
#[derive(Parser, Debug)]
#[command(name = "camunda-conncheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Credentials file (defaults to envVarsExtended.txt in the working
    /// directory, then the parent directory)
    #[arg(short, long)]
    pub env_file: Option<PathBuf>,

    /// Verbose diagnostic logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
