//! Configuration file support for bundle-catalog.
//!
//! Provides YAML-based configuration through `bundle-catalog.config.yml`
//! files, including data structures, file loading, validation and the
//! merge of file values with command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::{DEFAULT_BUNDLES_PATH, DEFAULT_DEPENDENCIES_PATH};
use crate::application::services::DEFAULT_INFO_CHUNK_SIZE;
use crate::catalog::domain::DROPPED_STATUS;
use crate::shared::error::CatalogError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bundle-catalog.config.yml";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

const MAX_TIMEOUT_SECS: u64 = 300;
const MAX_RETRIES_LIMIT: u32 = 10;
const MAX_INFO_CHUNK_SIZE: usize = 100;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub bundles_path: Option<String>,
    pub dependencies_path: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub info_chunk_size: Option<usize>,
    pub excluded_statuses: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(details: impl Into<String>, hint: impl Into<String>) -> anyhow::Error {
    CatalogError::InvalidConfig {
        details: details.into(),
        hint: hint.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(url) = &config.api_url {
        validate_api_url(url)?;
    }
    for (key, value) in [
        ("bundles_path", &config.bundles_path),
        ("dependencies_path", &config.dependencies_path),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(invalid(
                format!("{} must not be empty", key),
                "Remove the key to use the default file name.",
            ));
        }
    }
    if let Some(timeout) = config.timeout_secs {
        if timeout == 0 || timeout > MAX_TIMEOUT_SECS {
            return Err(invalid(
                format!("timeout_secs must be between 1 and {}, got {}", MAX_TIMEOUT_SECS, timeout),
                "Use a timeout in whole seconds, e.g. timeout_secs: 10",
            ));
        }
    }
    if let Some(retries) = config.max_retries {
        if retries > MAX_RETRIES_LIMIT {
            return Err(invalid(
                format!("max_retries must be at most {}, got {}", MAX_RETRIES_LIMIT, retries),
                "Failed requests are retried with a growing delay; a few attempts are enough.",
            ));
        }
    }
    if let Some(size) = config.info_chunk_size {
        if size == 0 || size > MAX_INFO_CHUNK_SIZE {
            return Err(invalid(
                format!("info_chunk_size must be between 1 and {}, got {}", MAX_INFO_CHUNK_SIZE, size),
                "Bundle details are requested this many ids at a time.",
            ));
        }
    }
    if let Some(statuses) = &config.excluded_statuses {
        if let Some(i) = statuses.iter().position(|s| s.trim().is_empty()) {
            return Err(invalid(
                format!("excluded_statuses[{}] must not be empty", i),
                "List workflow status names such as DROPPED.",
            ));
        }
    }
    Ok(())
}

fn validate_api_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(invalid(
            format!("api_url must be an http(s) URL, got '{}'", url),
            "Use the backend's base URL, e.g. http://localhost:8080/api",
        ))
    }
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings after merging defaults, config file and CLI
///
/// Precedence: command line, then config file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub bundles_path: String,
    pub dependencies_path: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub info_chunk_size: usize,
    pub excluded_statuses: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bundles_path: DEFAULT_BUNDLES_PATH.to_string(),
            dependencies_path: DEFAULT_DEPENDENCIES_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            info_chunk_size: DEFAULT_INFO_CHUNK_SIZE,
            excluded_statuses: vec![DROPPED_STATUS.to_string()],
        }
    }
}

/// Values given on the command line that override the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_url: Option<String>,
}

impl Settings {
    pub fn resolve(file: Option<ConfigFile>, cli: CliOverrides) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(file) = file {
            if let Some(url) = file.api_url {
                settings.api_url = url;
            }
            if let Some(path) = file.bundles_path {
                settings.bundles_path = path;
            }
            if let Some(path) = file.dependencies_path {
                settings.dependencies_path = path;
            }
            if let Some(secs) = file.timeout_secs {
                settings.timeout = Duration::from_secs(secs);
            }
            if let Some(retries) = file.max_retries {
                settings.max_retries = retries;
            }
            if let Some(size) = file.info_chunk_size {
                settings.info_chunk_size = size;
            }
            if let Some(statuses) = file.excluded_statuses {
                settings.excluded_statuses = statuses;
            }
        }

        if let Some(url) = cli.api_url {
            validate_api_url(&url)?;
            settings.api_url = url;
        }

        Ok(settings)
    }
}
