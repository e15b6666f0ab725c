//! Tests for TOML configuration loading and application.

mod common;

use common::{Capture, serial};
use coretrace::{Config, Error, Level};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_document_is_all_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.general.enabled, None);
    assert_eq!(config.modules.enabled, None);
}

#[test]
fn parses_every_key() {
    let config = Config::from_toml_str(
        r#"
[general]
enabled = true
level = "warn"
prefix = "==svc=="
thread_safe = false
timestamps = true
source_location = true

[modules]
enabled = ["alloc", "trace"]
"#,
    )
    .unwrap();

    assert_eq!(config.general.enabled, Some(true));
    assert_eq!(config.general.level.as_deref(), Some("warn"));
    assert_eq!(config.general.prefix.as_deref(), Some("==svc=="));
    assert_eq!(config.general.thread_safe, Some(false));
    assert_eq!(config.general.timestamps, Some(true));
    assert_eq!(config.general.source_location, Some(true));
    assert_eq!(
        config.modules.enabled,
        Some(vec!["alloc".to_string(), "trace".to_string()])
    );
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = Config::from_toml_str("[general\nenabled = ").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
    assert!(err.to_string().starts_with("parse error:"));
}

#[test]
fn mistyped_value_is_a_parse_error() {
    let err = Config::from_toml_str("[general]\nenabled = \"yes\"\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn load_from_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("coretrace.toml");
    fs::write(&path, "[general]\nprefix = \"file\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.general.prefix.as_deref(), Some("file"));
}

#[test]
fn load_from_missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_unreadable_path_is_io_error() {
    let tmp_dir = TempDir::new().unwrap();
    // A directory exists but cannot be read as a file.
    let err = Config::load_from(tmp_dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn apply_pushes_settings_into_logger() {
    let _guard = serial();
    let capture = Capture::install();

    Config::from_toml_str(
        r#"
[general]
enabled = true
level = "warn"
prefix = "==cfg=="

[modules]
enabled = ["alloc"]
"#,
    )
    .unwrap()
    .apply();

    assert!(coretrace::log_is_enabled());
    assert_eq!(coretrace::min_level(), Level::Warn);
    assert!(coretrace::module_is_enabled("alloc"));
    assert!(!coretrace::module_is_enabled("trace"));

    coretrace::log(Level::Warn, "configured\n");
    let pid = coretrace::pid();
    assert_eq!(capture.text(), format!("|{pid}| ==cfg== [WARN] configured\n"));
}

#[test]
fn apply_replaces_module_table() {
    let _guard = serial();
    coretrace::enable_module("old");

    Config::from_toml_str("[modules]\nenabled = [\"new\"]\n")
        .unwrap()
        .apply();
    assert!(!coretrace::module_is_enabled("old"));
    assert!(coretrace::module_is_enabled("new"));

    Config::from_toml_str("[modules]\nenabled = []\n")
        .unwrap()
        .apply();
    assert!(coretrace::module_is_enabled("anything"));
}

#[test]
fn apply_leaves_absent_keys_alone() {
    let _guard = serial();
    coretrace::enable_logging();
    coretrace::set_min_level(Level::Error);

    Config::default().apply();
    assert!(coretrace::log_is_enabled());
    assert_eq!(coretrace::min_level(), Level::Error);
}

#[test]
fn bad_level_is_reported_and_ignored() {
    let _guard = serial();
    let capture = Capture::install();

    Config::from_toml_str("[general]\nenabled = true\nlevel = \"loud\"\n")
        .unwrap()
        .apply();

    assert_eq!(coretrace::min_level(), Level::Info);
    let text = capture.text();
    assert!(text.contains("[WARN]"), "{text:?}");
    assert!(text.contains("(coretrace) ignoring config level: unknown log level: 'loud'"));
}
