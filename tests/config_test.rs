//! Integration tests for Settings config loading from an explicit file.
//!
//! Note: These tests use temp config files only; `SSM_TREE_*` variables are
//! expected to be unset in the test environment. Environment overrides are
//! covered in `env_config_test.rs`, which runs as its own test binary.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use ssm_tree::application::ApplicationError;
use ssm_tree::config::Settings;
use ssm_tree::domain::NodeIdentity;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("ssm-tree.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
region = "eu-central-1"
profile = "ops"
identity = "name"
page_size = 10
details = true
"#,
    );

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.region.as_deref(), Some("eu-central-1"));
    assert_eq!(settings.profile.as_deref(), Some("ops"));
    assert_eq!(settings.identity, NodeIdentity::Name);
    assert_eq!(settings.page_size, Some(10));
    assert!(settings.details);
}

#[test]
fn given_partial_config_file_when_load_then_unspecified_fields_keep_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "region = \"us-east-1\"\n");

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.region.as_deref(), Some("us-east-1"));
    assert_eq!(settings.identity, NodeIdentity::Path);
    assert_eq!(settings.page_size, None);
    assert!(!settings.details);
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_unknown_identity_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "identity = \"segment\"\n");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("parse"));
}

#[test]
fn given_page_size_out_of_range_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "page_size = 0\n");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("page_size must be between 1 and 10"));
}

#[test]
fn given_loaded_settings_when_to_toml_then_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "region = \"eu-west-1\"\nidentity = \"name\"\n");
    let settings = Settings::load(Some(&path)).unwrap();

    let rendered = settings.to_toml().unwrap();
    let reparsed: Settings = toml::from_str(&rendered).unwrap();

    assert_eq!(reparsed, settings);
}
