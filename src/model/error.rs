//! Error types for adminui.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from startup and the event loop
//!   - [`LoadError`] - record fetch failures (network, HTTP status, body, file)
//!   - [`crate::config::ConfigError`] - config file read/parse failures
//!   - `std::io::Error` - terminal failures
//!
//! Load failures are **non-fatal**: the table stays empty and the failure is
//! logged. Config and terminal failures end the program.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record fetch failed.
    ///
    /// Only surfaces here when a caller chooses to treat the load as fatal;
    /// the TUI itself logs it and keeps running with an empty table.
    #[error("Failed to load records: {0}")]
    Load(#[from] LoadError),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered while fetching the record list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The body was not a JSON array of records.
    #[error("Malformed record list: {0}")]
    Parse(String),

    /// A local record file could not be read.
    #[error("Failed to read records from {path}: {reason}")]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying reason.
        reason: String,
    },

    /// The load was cancelled before a result was produced.
    #[error("Load cancelled")]
    Cancelled,
}

impl LoadError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Network failures and server-side (5xx) statuses are retryable. Parse
    /// failures, client errors, and cancellation are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::Network(_) => true,
            LoadError::Status { status, .. } => *status >= 500,
            LoadError::Parse(_) | LoadError::Io { .. } | LoadError::Cancelled => false,
        }
    }
}
