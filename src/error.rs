//! Error types for the connection diagnostic
//!
//! This module defines the error hierarchy for the whole pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Exit-code mapping lives in [`crate::classify`], not in the errors
//! themselves.

use thiserror::Error;

/// The main error type for the connection diagnostic
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Credentials File Errors
    // ============================================================================
    #[error("{path} file not found. Double check that this file is available in this directory or parent directory")]
    EnvFileNotFound { path: String },

    #[error("Invalid format in {path} at line {line}: {text}")]
    MalformedLine {
        path: String,
        line: usize,
        text: String,
    },

    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("OAuth2 error: {message}")]
    OAuth2 { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Topology Errors
    // ============================================================================
    #[error("Connected but no brokers found in topology")]
    EmptyTopology,

    // ============================================================================
    // I/O and Generic Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an OAuth2 error
    pub fn oauth2(message: impl Into<String>) -> Self {
        Self::OAuth2 {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a missing-variable error
    pub fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }
}

/// Result type alias for the connection diagnostic
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_variable("CAMUNDA_CLUSTER_ID");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: CAMUNDA_CLUSTER_ID"
        );

        let err = Error::http_status(503, "Service Unavailable");
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_env_file_not_found_names_both_locations() {
        let err = Error::EnvFileNotFound {
            path: "envVarsExtended.txt".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("envVarsExtended.txt file not found"));
        assert!(message.contains("parent directory"));
    }

    #[test]
    fn test_malformed_line_carries_line_number() {
        let err = Error::MalformedLine {
            path: "envVarsExtended.txt".to_string(),
            line: 7,
            text: "export BROKEN".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid format in envVarsExtended.txt at line 7: export BROKEN"
        );
    }

    #[test]
    fn test_empty_topology_message() {
        assert_eq!(
            Error::EmptyTopology.to_string(),
            "Connected but no brokers found in topology"
        );
    }
}
