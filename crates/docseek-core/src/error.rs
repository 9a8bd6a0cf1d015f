//! Error types and handling for docseek-core operations.
//!
//! Most of the lookup pipeline is infallible by construction: classification,
//! URL resolution and manifest analysis never fail. Errors come from the two
//! places that touch the outside world, the HTTP fetcher and the layered
//! configuration loader.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading manifest files and `.env` layers
//! - **Network Errors**: HTTP requests against the documentation host
//! - **Not Found**: a candidate URL answered 404
//! - **Configuration Errors**: unusable configuration values
//!
//! ## Recovery Hints
//!
//! ```rust
//! use docseek_core::{Error, Result};
//!
//! fn handle(result: Result<String>) {
//!     match result {
//!         Ok(body) => println!("{} bytes", body.len()),
//!         Err(e) if e.is_recoverable() => println!("transient failure: {e}"),
//!         Err(e) => println!("{} failure: {e}", e.category()),
//!     }
//! }
//! # handle(Ok(String::new()));
//! ```

use thiserror::Error;

/// The main error type for docseek-core operations.
///
/// The `Display` form is user facing; `Debug` keeps the full source chain.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading manifest files from disk and reading `.env` layers.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Wraps the underlying `reqwest::Error` for connection, TLS and
    /// non-success status failures.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The documentation host answered 404 for a candidate URL.
    #[error("Not found: {0}")]
    NotFound(String),

    /// URL is malformed or invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operation timed out.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Returns `true` for timeouts, connection failures and interrupted I/O.
    /// A 404 is never recoverable: the document simply is not there.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout(_) => true,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a static string identifier.
    ///
    /// Used as a structured field when logging swallowed per-candidate
    /// failures.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::NotFound(_) => "not_found",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Config(_) => "config",
            Self::Timeout(_) => "timeout",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
