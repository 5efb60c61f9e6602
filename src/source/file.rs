//! Local JSON file provider.

use crate::model::{LoadError, Record};
use crate::source::{parse_records, RecordProvider};
use std::path::PathBuf;
use tracing::debug;

/// Reads the record list from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    /// Provider reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordProvider for FileProvider {
    fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        debug!(path = ?self.path, "Reading records from file");

        let contents = std::fs::read_to_string(&self.path).map_err(|e| LoadError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        parse_records(&contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
