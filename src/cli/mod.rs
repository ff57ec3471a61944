//! Command-line interface
//!
//! Argument parsing and the runner that drives load → probe → report.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
