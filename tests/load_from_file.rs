//! Loading records from disk through the same path the TUI uses.

use adminui::config::{apply_cli_overrides, CliOverrides, ResolvedConfig};
use adminui::model::{LoadError, RecordId};
use adminui::source::{spawn_load, FileProvider, RecordProvider, RetryPolicy};
use adminui::state::{AppState, LoadStatus};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

const MEMBERS_FIXTURE: &str = "tests/fixtures/members.json";
const NOT_AN_ARRAY_FIXTURE: &str = "tests/fixtures/not_an_array.json";

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(path)
}

fn load_fixture() -> AppState {
    let records = FileProvider::new(fixture(MEMBERS_FIXTURE))
        .fetch()
        .expect("Fixture should parse");
    let mut state = AppState::default();
    state.apply_load(Ok(records));
    state
}

#[test]
fn fixture_loads_sorted_by_numeric_id() {
    let state = load_fixture();

    let ids: Vec<&str> = state.store().iter().map(|r| r.id.as_str()).collect();
    let expected: Vec<String> = (1..=23).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
    assert_eq!(state.load_status(), &LoadStatus::Loaded { count: 23 });
}

#[test]
fn fixture_pages_at_ten_rows() {
    let mut state = load_fixture();

    assert_eq!(state.page_count(), 3);
    assert_eq!(state.visible().len(), 10);

    state.last_page();
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.visible().len(), 3);
    assert!(state.is_last_page());
}

#[test]
fn search_matches_extra_role_field() {
    let mut state = load_fixture();

    state.search("ADMIN");

    let ids: Vec<&str> = state.filtered().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "10", "15", "20"]);
}

#[test]
fn extra_fields_survive_edit() {
    let mut state = load_fixture();
    let target = state
        .store()
        .iter()
        .find(|r| r.id == RecordId::from("5"))
        .cloned()
        .expect("Record 5 exists");

    state.begin_edit(target);
    state.update_field(adminui::model::RecordField::Name, "Renamed");
    state.commit_edit();

    let record = state
        .store()
        .iter()
        .find(|r| r.id == RecordId::from("5"))
        .expect("Record 5 still exists");
    assert_eq!(record.name, "Renamed");
    assert_eq!(
        record.extra.get("role"),
        Some(&serde_json::Value::String("admin".to_string()))
    );
}

#[test]
fn non_array_body_is_parse_error() {
    let result = FileProvider::new(fixture(NOT_AN_ARRAY_FIXTURE)).fetch();
    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[test]
fn missing_file_leaves_table_empty() {
    let result = FileProvider::new(fixture("tests/fixtures/missing.json")).fetch();
    assert!(matches!(result, Err(LoadError::Io { .. })));

    let mut state = AppState::default();
    state.apply_load(result);

    assert!(state.store().is_empty());
    assert!(state.filtered().is_empty());
    assert!(matches!(state.load_status(), LoadStatus::Failed { .. }));
    assert_eq!(state.page_count(), 0);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn background_load_from_configured_file() {
    let config = apply_cli_overrides(
        ResolvedConfig::default(),
        CliOverrides {
            records_file: Some(fixture(MEMBERS_FIXTURE)),
            ..CliOverrides::default()
        },
    );

    let provider = config
        .source_spec()
        .into_provider()
        .expect("File provider always builds");
    let mut handle = spawn_load(provider, RetryPolicy::default());

    let deadline = Instant::now() + Duration::from_secs(5);
    let result = loop {
        if let Some(result) = handle.try_take() {
            break result;
        }
        assert!(Instant::now() < deadline, "Load never delivered");
        thread::sleep(Duration::from_millis(10));
    };

    let records = result.expect("Fixture should load");
    assert_eq!(records.len(), 23);
}
