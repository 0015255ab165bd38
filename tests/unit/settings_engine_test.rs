//! Integration-level tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, first-run initialization, and rejection of bad files.

use rstest::rstest;
use webshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use webshell::types::errors::SettingsError;
use webshell::types::settings::ShellSettings;
use webshell::types::shell::TARGET_URL;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// Without a config file the shell starts with the built-in defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, ShellSettings::default());
}

#[test]
fn test_default_settings_values() {
    let defaults = ShellSettings::default();

    assert_eq!(defaults.window.title, "Mr. Chatur");
    assert_eq!(defaults.window.width, 420.0);
    assert_eq!(defaults.window.height, 860.0);

    assert_eq!(defaults.reachability.probe_url, TARGET_URL);
    assert_eq!(defaults.reachability.poll_interval_secs, 5);
    assert_eq!(defaults.reachability.probe_timeout_secs, 3);

    assert!(!defaults.developer.devtools);
    assert_eq!(defaults.developer.log_filter, "webshell=info");
}

/// First run writes the defaults to disk so a fresh engine reads them back.
#[test]
fn test_load_or_init_writes_defaults_on_first_run() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("settings.json");

    let mut engine = engine_in_temp(&dir);
    assert_eq!(engine.load_or_init().unwrap(), ShellSettings::default());
    assert!(config.exists());

    let mut engine2 = engine_in_temp(&dir);
    assert_eq!(engine2.load().unwrap(), ShellSettings::default());
}

/// An existing file is loaded as-is and left untouched.
#[test]
fn test_load_or_init_keeps_existing_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("settings.json");
    let content = r#"{"reachability":{"poll_interval_secs":30}}"#;
    std::fs::write(&config, content).unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load_or_init().unwrap();

    assert_eq!(settings.reachability.poll_interval_secs, 30);
    assert_eq!(settings.reachability.probe_timeout_secs, 3);
    assert_eq!(std::fs::read_to_string(&config).unwrap(), content);
}

#[rstest]
#[case(r#"{"reachability":{"poll_interval_secs":"often"}}"#)]
#[case(r#"{"developer":{"devtools":"yes"}}"#)]
#[case(r#"{"window":{"title":1}}"#)]
fn test_load_rejects_mistyped_values(#[case] content: &str) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), content).unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.load_or_init(),
        Err(SettingsError::SerializationError(_))
    ));
    assert_eq!(*engine.get_settings(), ShellSettings::default());
}

#[test]
fn test_load_malformed_json() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ invalid json }").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}
