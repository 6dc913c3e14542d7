//! Configuration loading and validation.
//!
//! Configuration is TOML, looked up from an explicit `--config` path or the
//! usual locations (`./tallyfin.toml`, `~/.config/tallyfin/config.toml`,
//! `/etc/tallyfin/config.toml`). Every field has a default so a missing file
//! is not an error; a file that exists but fails validation is.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub instance: InstanceConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// The remote server instance and its credentials.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InstanceConfig {
    /// Base URL, e.g. `http://media.local:8096`.
    #[serde(default)]
    pub url: String,

    /// API token sent as the `ApiKey` query parameter.
    #[serde(default)]
    pub api_key: String,

    /// Admin user id; discovered through the `Users` endpoint when unset.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Report output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./tallyfin.toml",
        "~/.config/tallyfin/config.toml",
        "/etc/tallyfin/config.toml",
    ];

    for path_str in default_paths {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    let url = &config.instance.url;
    if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("Instance URL must start with http:// or https://: {url}");
    }

    if !url.is_empty() && config.instance.api_key.is_empty() {
        tracing::warn!(url = %url, "instance has no API key configured");
    }

    match config.output.format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Unknown output format '{other}' (expected 'text' or 'json')"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.output.format, "text");
        assert!(config.instance.user_id.is_none());
    }

    #[test]
    fn non_http_url_is_rejected() {
        let config = Config {
            instance: InstanceConfig {
                url: "ftp://media.local".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let config = Config {
            output: OutputConfig {
                format: "xml".to_string(),
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("output format"));
    }
}
