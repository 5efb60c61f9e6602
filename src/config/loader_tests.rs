//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_adminui_config_toml() {
    let Some(path) = default_config_path() else {
        return; // No config dir on this platform
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("adminui") && path_str.ends_with("config.toml"),
        "Path should contain 'adminui' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("adminui_test_config.toml");

    let toml_content = r#"
endpoint = "http://localhost:8080/members.json"
items_per_page = 25
filter_policy = "reapply"
fetch_attempts = 3
retry_backoff_ms = 250
request_timeout_secs = 5
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    let config = result
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(
        config.endpoint,
        Some("http://localhost:8080/members.json".to_string())
    );
    assert_eq!(config.items_per_page, Some(25));
    assert_eq!(config.filter_policy, Some("reapply".to_string()));
    assert_eq!(config.fetch_attempts, Some(3));
    assert_eq!(config.retry_backoff_ms, Some(250));
    assert_eq!(config.request_timeout_secs, Some(5));
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("adminui_test_invalid.toml");
    fs::write(&config_path, "items_per_page = [unclosed").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a ParseError, got: {:?}",
        result
    );
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"theme = "monokai""#);
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None).unwrap();
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        endpoint: Some("http://example.test/users".to_string()),
        items_per_page: Some(5),
        filter_policy: Some("reapply".to_string()),
        fetch_attempts: Some(4),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file)).unwrap();
    assert_eq!(resolved.endpoint, "http://example.test/users");
    assert_eq!(resolved.items_per_page, 5);
    assert_eq!(resolved.filter_policy, FilterPolicy::Reapply);
    assert_eq!(resolved.fetch_attempts, 4);
    assert_eq!(
        resolved.request_timeout_secs,
        ResolvedConfig::default().request_timeout_secs
    );
}

#[test]
fn merge_config_rejects_unknown_policy() {
    let config_file = ConfigFile {
        filter_policy: Some("sometimes".to_string()),
        ..ConfigFile::default()
    };

    let result = merge_config(Some(config_file));
    assert_eq!(
        result,
        Err(ConfigError::InvalidValue {
            key: "filter_policy".to_string(),
            value: "sometimes".to_string(),
        })
    );
}

#[test]
fn merge_config_rejects_zero_page_size() {
    let config_file = ConfigFile {
        items_per_page: Some(0),
        ..ConfigFile::default()
    };

    assert!(matches!(
        merge_config(Some(config_file)),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.items_per_page, 10);
    assert_eq!(config.filter_policy, FilterPolicy::Stale);
    assert_eq!(config.fetch_attempts, 1);
    assert_eq!(config.records_file, None);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(adminui_env)]
fn apply_env_overrides_respects_endpoint() {
    let _guard = EnvGuard::new("ADMINUI_ENDPOINT");
    env::set_var("ADMINUI_ENDPOINT", "http://env.test/members.json");

    let result = apply_env_overrides(ResolvedConfig::default()).unwrap();

    assert_eq!(result.endpoint, "http://env.test/members.json");
}

#[test]
#[serial(adminui_env)]
fn apply_env_overrides_respects_filter_policy() {
    let _guard = EnvGuard::new("ADMINUI_FILTER_POLICY");
    env::set_var("ADMINUI_FILTER_POLICY", "reapply");

    let result = apply_env_overrides(ResolvedConfig::default()).unwrap();

    assert_eq!(result.filter_policy, FilterPolicy::Reapply);
}

#[test]
#[serial(adminui_env)]
fn apply_env_overrides_rejects_bad_policy() {
    let _guard = EnvGuard::new("ADMINUI_FILTER_POLICY");
    env::set_var("ADMINUI_FILTER_POLICY", "eventually");

    assert!(apply_env_overrides(ResolvedConfig::default()).is_err());
}

#[test]
#[serial(adminui_env)]
fn apply_env_overrides_no_change_when_env_vars_not_set() {
    let _endpoint = EnvGuard::new("ADMINUI_ENDPOINT");
    let _policy = EnvGuard::new("ADMINUI_FILTER_POLICY");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone()).unwrap();

    assert_eq!(result, base, "Config should be unchanged without env vars");
}

#[test]
#[serial(adminui_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("ADMINUI_CONFIG");

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("adminui_explicit.toml");
    fs::write(&explicit_path, r#"endpoint = "http://explicit.test""#)
        .expect("Failed to write explicit config");

    let env_path = temp_dir.join("adminui_env.toml");
    fs::write(&env_path, r#"endpoint = "http://env.test""#).expect("Failed to write env config");
    env::set_var("ADMINUI_CONFIG", env_path.to_str().unwrap());

    let result = load_config_with_precedence(Some(explicit_path.clone()));

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();

    let config = result.unwrap().unwrap();
    assert_eq!(
        config.endpoint,
        Some("http://explicit.test".to_string()),
        "Should use explicit path, not ADMINUI_CONFIG env var"
    );
}

#[test]
#[serial(adminui_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("ADMINUI_CONFIG");

    let env_path = env::temp_dir().join("adminui_env_only.toml");
    fs::write(&env_path, "items_per_page = 7").expect("Failed to write env config");
    env::set_var("ADMINUI_CONFIG", env_path.to_str().unwrap());

    let result = load_config_with_precedence(None);
    fs::remove_file(env_path).ok();

    let config = result.unwrap().unwrap();
    assert_eq!(config.items_per_page, Some(7));
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    let result = apply_cli_overrides(base.clone(), CliOverrides::default());
    assert_eq!(result, base);
}

#[test]
fn apply_cli_overrides_all_flags() {
    let cli = CliOverrides {
        endpoint: Some("http://cli.test".to_string()),
        records_file: Some(PathBuf::from("members.json")),
        items_per_page: Some(20),
        reapply_filter: true,
    };

    let result = apply_cli_overrides(ResolvedConfig::default(), cli);
    assert_eq!(result.endpoint, "http://cli.test");
    assert_eq!(result.records_file, Some(PathBuf::from("members.json")));
    assert_eq!(result.items_per_page, 20);
    assert_eq!(result.filter_policy, FilterPolicy::Reapply);
}

#[test]
fn records_file_takes_priority_over_endpoint() {
    let config = apply_cli_overrides(
        ResolvedConfig::default(),
        CliOverrides {
            records_file: Some(PathBuf::from("local.json")),
            ..CliOverrides::default()
        },
    );

    assert_eq!(
        config.source_spec(),
        SourceSpec::File(PathBuf::from("local.json"))
    );
}

#[test]
fn default_source_is_http_endpoint() {
    let config = ResolvedConfig::default();
    assert_eq!(
        config.source_spec(),
        SourceSpec::Http {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn retry_policy_reflects_config() {
    let config = ResolvedConfig {
        fetch_attempts: 0,
        retry_backoff_ms: 100,
        ..ResolvedConfig::default()
    };

    let policy = config.retry_policy();
    assert_eq!(policy.attempts, 1);
    assert_eq!(policy.backoff, Duration::from_millis(100));
}

#[test]
fn precedence_chain_config_file_then_cli() {
    let config_file = ConfigFile {
        items_per_page: Some(15),
        endpoint: Some("http://file.test".to_string()),
        ..ConfigFile::default()
    };

    let merged = merge_config(Some(config_file)).unwrap();
    assert_eq!(merged.items_per_page, 15);

    let with_cli = apply_cli_overrides(
        merged,
        CliOverrides {
            items_per_page: Some(30),
            ..CliOverrides::default()
        },
    );
    assert_eq!(with_cli.items_per_page, 30, "CLI should override config file");
    assert_eq!(with_cli.endpoint, "http://file.test");
}
