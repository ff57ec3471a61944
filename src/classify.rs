//! Failure classification
//!
//! Maps the open failure surface (TLS, transport, auth, config, anything
//! the stack raises) onto a closed taxonomy with one process exit code
//! per category. The underlying libraries expose no stable error
//! taxonomy to callers, so classification is a text/type heuristic with
//! a fixed priority order; the whole mapping lives in this module and
//! nowhere else. Known limitation: a config error whose message happens
//! to contain a pattern word (say, "timeout") classifies into that
//! category.

use crate::error::Error;
use std::error::Error as StdError;

/// Exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;

const SSL_PATTERNS: &[&str] = &["ssl", "certificate"];

const CONNECTION_PATTERNS: &[&str] = &["connection", "connect", "network", "timeout", "timed out"];

const AUTH_PATTERNS: &[&str] = &[
    "401",
    "403",
    "unauthorized",
    "forbidden",
    "authentication",
    "token",
    "credential",
];

/// Failure category, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// TLS handshake or certificate problems
    Ssl,
    /// Transport-level problems: refused, unreachable, timed out
    Connection,
    /// Rejected credentials or tokens
    Auth,
    /// Everything else, config-loading failures included
    Other,
}

impl FailureKind {
    /// Process exit code for this category
    pub fn exit_code(self) -> i32 {
        match self {
            FailureKind::Ssl => 1,
            FailureKind::Connection => 2,
            FailureKind::Auth => 3,
            FailureKind::Other => 4,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            FailureKind::Ssl => "SSL error",
            FailureKind::Connection => "Connection error",
            FailureKind::Auth => "Authentication error",
            FailureKind::Other => "Unexpected error",
        }
    }
}

/// A classified failure ready for reporting
#[derive(Debug, Clone)]
pub struct ClassifiedFailure {
    /// Matched category
    pub kind: FailureKind,
    /// Banner message, category prefix included
    pub message: String,
    /// Underlying cause for the diagnostic stream (Other only)
    pub cause: Option<String>,
}

impl ClassifiedFailure {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }
}

/// Classify an error into exactly one category. Total and deterministic.
///
/// An empty topology is recognized before the text heuristics run: the
/// round-trip succeeded, so the "connect" fragment of its message must
/// not pull it into the connection category.
pub fn classify(error: &Error) -> ClassifiedFailure {
    if matches!(error, Error::EmptyTopology) {
        return ClassifiedFailure {
            kind: FailureKind::Other,
            message: format!("{}: {}", FailureKind::Other.prefix(), error),
            cause: None,
        };
    }

    let text = classification_text(error);
    let kind = if matches_any(SSL_PATTERNS, &text) {
        FailureKind::Ssl
    } else if matches_any(CONNECTION_PATTERNS, &text) {
        FailureKind::Connection
    } else if matches_any(AUTH_PATTERNS, &text) {
        FailureKind::Auth
    } else {
        FailureKind::Other
    };

    let cause = match kind {
        FailureKind::Other => error.source().map(|cause| cause.to_string()),
        _ => None,
    };

    ClassifiedFailure {
        kind,
        message: format!("{}: {}", kind.prefix(), error),
        cause,
    }
}

fn matches_any(patterns: &[&str], text: &str) -> bool {
    patterns.iter().any(|pattern| text.contains(pattern))
}

/// Message text plus the full source chain plus type-level transport
/// hints, lowercased. The source chain and the `reqwest` kind flags
/// stand in for the exception class names other runtimes would expose.
fn classification_text(error: &Error) -> String {
    let mut text = error.to_string();

    let mut source = error.source();
    while let Some(cause) = source {
        text.push(' ');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    if let Error::Http(http) = error {
        if http.is_timeout() {
            text.push_str(" timeout");
        }
        if http.is_connect() {
            text.push_str(" connection");
        }
    }

    text.to_lowercase()
}
