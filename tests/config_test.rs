//! Tests for configuration loading.

use std::io::Write;
use std::path::{Path, PathBuf};
use tic_tac_toe::AppConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_file(), Path::new("tic_tac_toe.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_from_file_fills_missing_fields() {
    let file = write_config("log_filter = \"tic_tac_toe=debug\"\n");
    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_filter(), "tic_tac_toe=debug");
    assert_eq!(config.log_file(), Path::new("tic_tac_toe.log"));
}

#[test]
fn test_from_file_reads_all_fields() {
    let file = write_config("log_file = \"/tmp/ttt.log\"\nlog_filter = \"warn\"\n");
    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_file(), Path::new("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let file = write_config("log_filter = [");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.toml");
    let err = AppConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_cli_log_file_overrides_config() {
    let config = AppConfig::default().with_log_file(Some(PathBuf::from("other.log")));
    assert_eq!(config.log_file(), Path::new("other.log"));

    let config = AppConfig::default().with_log_file(None);
    assert_eq!(config.log_file(), Path::new("tic_tac_toe.log"));
}

#[test]
fn test_load_without_path_uses_default_file_only_when_present() {
    // Only test in this binary that touches the working directory; the
    // others use absolute temp paths.
    let dir = tempfile::tempdir().expect("temp dir");
    let original = std::env::current_dir().expect("current dir");
    std::env::set_current_dir(dir.path()).expect("enter temp dir");

    let without_file = AppConfig::load(None);
    let written = std::fs::write(
        tic_tac_toe::DEFAULT_CONFIG_FILE,
        "log_file = \"from_default.log\"\n",
    );
    let with_file = AppConfig::load(None);

    std::env::set_current_dir(original).expect("restore current dir");

    written.expect("write default config");
    assert_eq!(without_file.expect("defaults"), AppConfig::default());
    let config = with_file.expect("default file parses");
    assert_eq!(config.log_file(), Path::new("from_default.log"));
    assert_eq!(config.log_filter(), "info");
}
