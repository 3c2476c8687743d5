// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration is stored in `reef/config.toml` under the platform config
//! directory and currently holds one setting:
//! - `api_url`: the API base URL commands talk to
//!
//! The active URL is resolved in order: `--api` flag, `REEF_API` environment
//! variable, config file, built-in default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "reef";
const CONFIG_FILE_NAME: &str = "config.toml";

/// API base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Environment variable names recognized by the CLI.
pub mod names {
    /// Overrides the API base URL.
    pub const REEF_API: &str = "REEF_API";
    /// Overrides the config directory (mainly for tests).
    pub const REEF_CONFIG_DIR: &str = "REEF_CONFIG_DIR";
}

/// CLI configuration stored in `reef/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API base URL. Unset means the default or whatever `REEF_API` says.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Loads the configuration from the given directory, returning
    /// defaults when no file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves the configuration into the given directory, creating it if
    /// needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}

/// The directory holding `config.toml`.
///
/// `REEF_CONFIG_DIR` wins when set; otherwise the platform config
/// directory (`~/.config/reef` on Linux) is used, falling back to
/// `.config/reef` relative to the working directory when the platform
/// directory cannot be determined.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(names::REEF_CONFIG_DIR) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(CONFIG_DIR_NAME)
}

/// Full path of the config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Resolves the API base URL from flag, environment, config file, default.
pub fn resolve_api_url(flag: Option<&str>) -> Result<String> {
    if let Some(url) = flag {
        return Ok(url.to_string());
    }
    if let Ok(url) = std::env::var(names::REEF_API) {
        if !url.is_empty() {
            return Ok(url);
        }
    }
    if let Some(url) = Config::load(&config_dir())?.api_url {
        return Ok(url);
    }
    Ok(DEFAULT_API_URL.to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
