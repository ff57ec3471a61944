//! # Camunda Connection Check
//!
//! Diagnostic tool that verifies locally-stored credentials can reach a
//! Camunda 8 SaaS cluster and receive a valid topology response. Meant
//! for operators and trainees validating their environment before
//! running real workloads. Every failure maps to one of four actionable
//! categories with a distinct exit code, so scripts can branch without
//! parsing text.
//!
//! ## Exit codes
//!
//! | Code | Meaning              |
//! |------|----------------------|
//! | 0    | Connection successful|
//! | 1    | SSL error            |
//! | 2    | Connection error     |
//! | 3    | Authentication error |
//! | 4    | Any other error      |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use camunda_conncheck::{classify, probe, Credentials};
//!
//! #[tokio::main]
//! async fn main() {
//!     let credentials = Credentials::load().unwrap();
//!     match probe(&credentials).await {
//!         Ok(topology) => println!("{} broker(s)", topology.brokers.len()),
//!         Err(e) => std::process::exit(classify(&e).exit_code()),
//!     }
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Credentials file ──▶ config ──▶ probe ──▶ Topology
//!                                   │
//!                                 error ──▶ classify ──▶ exit code
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the diagnostic
pub mod error;

/// Credentials file loading and validation
pub mod config;

/// Safe-to-log rendering of secrets
pub mod mask;

/// OAuth2 client-credentials authentication
pub mod auth;

/// Camunda 8 SaaS client
pub mod client;

/// Single-round-trip connectivity probe
pub mod probe;

/// Failure classification and exit codes
pub mod classify;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::{classify, ClassifiedFailure, FailureKind};
pub use config::Credentials;
pub use error::{Error, Result};
pub use probe::probe;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
