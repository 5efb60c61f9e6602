//! HTTP record provider.

use crate::model::{LoadError, Record};
use crate::source::{parse_records, RecordProvider};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches the record list with a single unauthenticated `GET`.
pub struct HttpProvider {
    client: Client,
    url: String,
}

impl HttpProvider {
    /// Create a provider for `url`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Network` if the client cannot be built.
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl RecordProvider for HttpProvider {
    fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        debug!(url = %self.url, "Fetching records");

        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, format!("adminui/{}", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        // Anything but 200 is a failed load, including other 2xx codes
        if response.status() != StatusCode::OK {
            return Err(LoadError::Status {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .text()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
