//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use hybrid_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_hybrid_shell_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[app]
entry_url = "https://m.example.org/"

[navigation]
allowed_prefixes = ["https://m.example.org/"]
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.app.entry_url, "https://m.example.org/");
    assert_eq!(config.navigation.allowed_prefixes, vec!["https://m.example.org/"]);
    // Defaults preserved
    assert_eq!(config.bridge.dialog_timeout_secs, 120);
    assert!(config.webview.ignore_viewport_scale_limits);
}

#[test]
fn unreadable_path_is_not_reported_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_from_path(dir.path());
    assert!(matches!(result, Err(ConfigError::ParseError(ref m)) if m.contains("failed to read")));
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn invalid_values_are_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[bridge]\ndialog_timeout_secs = 99999\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.bridge.dialog_timeout_secs, 99999);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hybrid-shell").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.app.entry_url, "https://example.com/");
    assert_eq!(config.bridge.channels, vec!["log", "ping"]);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ShellConfig;

    let config: ShellConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("hybrid-shell"));
        assert!(path_str.ends_with("config.toml"));
    }
}
