//! Configuration loading tests.

use std::fs;
use std::path::Path;

use tallyfin::config::{load_config, load_config_or_default};
use tempfile::tempdir;

#[test]
fn load_full_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tallyfin.toml");
    fs::write(
        &path,
        r#"
[instance]
url = "http://media.local:8096"
api_key = "secret"
user_id = "admin-1"

[output]
format = "json"
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.instance.url, "http://media.local:8096");
    assert_eq!(config.instance.api_key, "secret");
    assert_eq!(config.instance.user_id.as_deref(), Some("admin-1"));
    assert_eq!(config.output.format, "json");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tallyfin.toml");
    fs::write(&path, "").unwrap();

    let config = load_config(&path).unwrap();
    assert!(config.instance.url.is_empty());
    assert!(config.instance.user_id.is_none());
    assert_eq!(config.output.format, "text");
}

#[test]
fn unknown_keys_are_tolerated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tallyfin.toml");
    fs::write(
        &path,
        "[instance]\nurl = \"http://media.local\"\napi_key = \"k\"\nfuture_knob = 3\n",
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.instance.url, "http://media.local");
}

#[test]
fn invalid_toml_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tallyfin.toml");
    fs::write(&path, "instance = ").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn non_http_url_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tallyfin.toml");
    fs::write(&path, "[instance]\nurl = \"ftp://media.local\"\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("http"));
}

#[test]
fn unknown_output_format_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tallyfin.toml");
    fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();

    assert!(load_config(&path).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_config(Path::new("/nonexistent/tallyfin.toml")).is_err());
}

#[test]
fn explicit_path_wins_over_default_locations() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[instance]\nurl = \"http://custom:8096\"\napi_key = \"k\"\n").unwrap();

    let config = load_config_or_default(Some(&path)).unwrap();
    assert_eq!(config.instance.url, "http://custom:8096");
}
