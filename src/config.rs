//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`COMPDECK_BASE_URL`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./compdeck.toml in the current directory
//! 4. $XDG_CONFIG_HOME/compdeck/compdeck.toml (or ~/.config/compdeck/compdeck.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const LOCAL_CONFIG_FILE: &str = "compdeck.toml";

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub display: DisplayConfig,
}

/// Analysis service connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the service exposing `POST /compile`.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

/// Terminal display settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Load configuration, applying file and environment precedence.
pub fn load_config(explicit_path: Option<&str>) -> Result<Config, ConfigError> {
    load_config_with(explicit_path, |key| std::env::var(key).ok())
}

/// Testable core of [`load_config`]: environment lookup is injected.
fn load_config_with(
    explicit_path: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let mut config = match resolve_config_path(explicit_path)? {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            toml::from_str::<Config>(&raw)?
        }
        None => Config::default(),
    };

    if let Some(url) = env("COMPDECK_BASE_URL").filter(|v| !v.trim().is_empty()) {
        config.server.base_url = url;
    }

    validate(&config)?;
    Ok(config)
}

/// Pick the config file to read, honoring the documented precedence.
fn resolve_config_path(explicit_path: Option<&str>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit_path {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(ConfigError::Invalid(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Ok(Some(local));
    }

    if let Some(user) = dirs::config_dir().map(|dir| dir.join("compdeck").join(LOCAL_CONFIG_FILE)) {
        if user.exists() {
            return Ok(Some(user));
        }
    }

    Ok(None)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.server.base_url.trim().is_empty() {
        return Err(ConfigError::Invalid("server.base_url cannot be empty".into()));
    }
    Ok(())
}
