//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_karm_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, karm_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[model]
name = "gemini-2.0-flash"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gemini-2.0-flash");
    // Defaults preserved
    assert_eq!(config.model.max_tokens, 4096);
    assert_eq!(config.model.temperature, 0.7);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, karm_common::ConfigError::ParseError(_)));
}

#[test]
fn load_with_invalid_values_keeps_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
max_tokens = 0
"#,
    )
    .unwrap();

    // Validation only warns; the parsed value is kept.
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.max_tokens, 0);
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[model]"));
    assert!(content.contains("gemini-2.5-flash"));
}

#[test]
fn default_config_path_ends_with_karm() {
    let path = default_config_path().unwrap();
    assert!(path.ends_with("karm/config.toml"));
}
