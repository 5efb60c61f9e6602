//! Record providers.
//!
//! This module provides sources for the initial record list:
//! - HTTP endpoint (the default, a fixed URL unless configured)
//! - Local JSON file for offline use
//! - Background loader that runs a provider off the UI thread

use crate::model::{LoadError, Record};
use std::path::PathBuf;

pub mod file;
pub mod http;
pub mod loader;

pub use file::FileProvider;
pub use http::{HttpProvider, DEFAULT_ENDPOINT};
pub use loader::{spawn_load, LoadHandle, RetryPolicy};

/// Something that can produce the full record list in one call.
pub trait RecordProvider: Send {
    /// Fetch and parse every record. Blocking.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` for transport, status, or body failures.
    fn fetch(&self) -> Result<Vec<Record>, LoadError>;

    /// Human-readable origin for logs (URL or path).
    fn describe(&self) -> String;
}

/// Parse a JSON array of records.
///
/// Shared by every provider so they agree on what a valid body is.
///
/// # Errors
///
/// Returns `LoadError::Parse` when the body is not an array of objects with
/// an `id`.
pub fn parse_records(body: &str) -> Result<Vec<Record>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Where records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// `GET` the URL.
    Http {
        /// Endpoint URL.
        url: String,
        /// Request timeout in seconds.
        timeout_secs: u64,
    },
    /// Read a local JSON file.
    File(PathBuf),
}

impl SourceSpec {
    /// Build the provider for this source.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Network` if the HTTP client cannot be built.
    pub fn into_provider(self) -> Result<Box<dyn RecordProvider>, LoadError> {
        match self {
            SourceSpec::Http { url, timeout_secs } => {
                Ok(Box::new(HttpProvider::new(url, timeout_secs)?))
            }
            SourceSpec::File(path) => Ok(Box::new(FileProvider::new(path))),
        }
    }
}
