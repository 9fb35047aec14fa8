//! Application configuration.
//!
//! Settings are layered: built-in defaults, then an optional JSON file under the
//! user's config directory, then `PARCEL_ROUTE_*` environment variables.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::network::NetworkConfig;

/// Directory under the platform config dir holding our files.
pub const CONFIG_DIR_NAME: &str = "parcel-route";
/// File name of the JSON configuration.
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Prefix for environment overrides, e.g. `PARCEL_ROUTE_LOG_DIR`.
pub const ENV_PREFIX: &str = "PARCEL_ROUTE";

/// Runtime settings for the parcel router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory that receives the log file. Relative paths resolve against the
    /// working directory.
    pub log_dir: PathBuf,
    /// Locations and edges of the shipping network.
    pub network: NetworkConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            network: NetworkConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load from `path`, which may be missing, with environment overrides applied.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_layered(path.as_ref(), environment())
    }

    fn load_layered(path: &Path, environment: Environment) -> Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(environment)
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

/// `PARCEL_ROUTE_LOG_DIR` sets `log_dir`; `__` separates nested keys.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Platform config directory for this application.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Full path of the JSON configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Write the default configuration if no file exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    write_default_config(&path)?;
    Ok(path)
}

/// Write defaults to `path` unless it already exists. Returns whether a file was written.
pub fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let serialized = serde_json::to_string_pretty(&AppConfig::default())
        .context("failed to serialize default config")?;
    fs::write(path, serialized)
        .with_context(|| format!("failed to write config {}", path.display()))?;
    Ok(true)
}
