//! Integration tests for Settings loading from an explicit config file.
//!
//! These tests run without relying on a global config; assertions only
//! cover keys the explicit file sets.

use std::fs;

use tempfile::TempDir;

use tagtree::application::ApplicationError;
use tagtree::config::Settings;

#[test]
fn given_config_file_when_load_then_overrides_specified_keys() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tagtree.toml");
    fs::write(
        &path,
        r#"
text_len = 6
seed = 42
sentinel = "q"
unique_tags = true
echo_construction = false
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(settings.text_len, 6);
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.sentinel, 'q');
    assert!(settings.unique_tags);
    assert!(!settings.echo_construction);
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load(Some(dir.path().join("absent.toml").as_path()));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_config_file_when_load_then_config_error() {
    // Arrange: sentinel must be a single character
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "sentinel = \"quit\"\n").unwrap();

    // Act
    let result = Settings::load(Some(path.as_path()));

    // Assert
    let err = result.unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn given_template_written_to_file_when_load_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("template.toml");
    fs::write(&path, Settings::template()).unwrap();

    assert!(Settings::load(Some(path.as_path())).is_ok());
}

#[test]
fn given_whitespace_sentinel_in_file_when_load_then_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.toml");
    fs::write(&path, "sentinel = \" \"\n").unwrap();

    // Act
    let result = Settings::load(Some(path.as_path()));

    // Assert
    let err = result.unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("blank.toml"));
}
