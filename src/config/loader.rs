//! Configuration file loading with precedence handling.

use crate::source::http::DEFAULT_TIMEOUT_SECS;
use crate::source::{RetryPolicy, SourceSpec, DEFAULT_ENDPOINT};
use crate::state::{FilterPolicy, DEFAULT_ITEMS_PER_PAGE};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is not acceptable.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Config key (or env var) holding the value.
        key: String,
        /// Offending value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/adminui/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// URL returning the JSON record array.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Rows per page.
    #[serde(default)]
    pub items_per_page: Option<usize>,

    /// `"stale"` or `"reapply"`.
    #[serde(default)]
    pub filter_policy: Option<String>,

    /// Total fetch attempts, including the first.
    #[serde(default)]
    pub fetch_attempts: Option<u32>,

    /// Linear backoff step between attempts, in milliseconds.
    #[serde(default)]
    pub retry_backoff_ms: Option<u64>,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Record endpoint URL.
    pub endpoint: String,
    /// Local JSON file to read instead of the endpoint (CLI only).
    pub records_file: Option<PathBuf>,
    /// Rows per page.
    pub items_per_page: usize,
    /// What mutations do to an active search.
    pub filter_policy: FilterPolicy,
    /// Total fetch attempts.
    pub fetch_attempts: u32,
    /// Backoff step between attempts.
    pub retry_backoff_ms: u64,
    /// HTTP request timeout.
    pub request_timeout_secs: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            records_file: None,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            filter_policy: FilterPolicy::Stale,
            fetch_attempts: 1,
            retry_backoff_ms: 500,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Where records should be loaded from. A records file wins over the endpoint.
    pub fn source_spec(&self) -> SourceSpec {
        match &self.records_file {
            Some(path) => SourceSpec::File(path.clone()),
            None => SourceSpec::Http {
                url: self.endpoint.clone(),
                timeout_secs: self.request_timeout_secs,
            },
        }
    }

    /// Retry settings for the background load.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.fetch_attempts.max(1),
            backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/adminui/adminui.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("adminui").join("adminui.log")
    } else {
        PathBuf::from("adminui.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/adminui/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("adminui").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ADMINUI_CONFIG` environment variable
/// 3. Default path `~/.config/adminui/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("ADMINUI_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unknown `filter_policy` or a
/// zero `items_per_page`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let filter_policy = match config.filter_policy {
        Some(raw) => parse_policy("filter_policy", &raw)?,
        None => defaults.filter_policy,
    };

    let items_per_page = match config.items_per_page {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                key: "items_per_page".to_string(),
                value: "0".to_string(),
            })
        }
        Some(n) => n,
        None => defaults.items_per_page,
    };

    Ok(ResolvedConfig {
        endpoint: config.endpoint.unwrap_or(defaults.endpoint),
        records_file: defaults.records_file,
        items_per_page,
        filter_policy,
        fetch_attempts: config.fetch_attempts.unwrap_or(defaults.fetch_attempts),
        retry_backoff_ms: config.retry_backoff_ms.unwrap_or(defaults.retry_backoff_ms),
        request_timeout_secs: config
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ADMINUI_ENDPOINT`: Override endpoint URL
/// - `ADMINUI_FILTER_POLICY`: Override filter policy
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unknown policy name.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(endpoint) = std::env::var("ADMINUI_ENDPOINT") {
        config.endpoint = endpoint;
    }

    if let Ok(policy) = std::env::var("ADMINUI_FILTER_POLICY") {
        config.filter_policy = parse_policy("ADMINUI_FILTER_POLICY", &policy)?;
    }

    Ok(config)
}

/// CLI flags that can override resolved config. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--url`
    pub endpoint: Option<String>,
    /// `--file`
    pub records_file: Option<PathBuf>,
    /// `--page-size`
    pub items_per_page: Option<usize>,
    /// `--reapply-filter`
    pub reapply_filter: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    if let Some(path) = cli.records_file {
        config.records_file = Some(path);
    }

    if let Some(items) = cli.items_per_page {
        config.items_per_page = items.max(1);
    }

    if cli.reapply_filter {
        config.filter_policy = FilterPolicy::Reapply;
    }

    config
}

fn parse_policy(key: &str, raw: &str) -> Result<FilterPolicy, ConfigError> {
    FilterPolicy::parse(raw).ok_or_else(|| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
