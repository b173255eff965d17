//! Configuration handling.
//!
//! Configuration lives in `<data dir>/config.yaml` and includes:
//! - The base URL of the catalog API
//! - The signature that seeds the colour theme
//! - An optional per-request timeout

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_SIGNATURE: &str = "dexbrowse";
const CONFIG_FILE: &str = "config.yaml";

/// Keys accepted by `config set`
pub const CONFIG_KEYS: &[&str] = &["api_base_url", "signature", "request_timeout_secs"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the catalog REST API
    pub api_base_url: String,

    /// Seed for the accent colours
    pub signature: String,

    /// Per-request timeout; unset means requests may wait indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            signature: DEFAULT_SIGNATURE.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Platform directory holding config and preferences
pub fn default_data_dir() -> Result<PathBuf> {
    directories::ProjectDirs::from("dev", "dexbrowse", "dexbrowse")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("cannot determine config directory".to_string()))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Load configuration from file, or return default if not found
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = Self::config_path(data_dir);
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir)?;
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(Self::config_path(data_dir), content)?;
        Ok(())
    }

    /// Read a value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api_base_url" => Ok(self.api_base_url.clone()),
            "signature" => Ok(self.signature.clone()),
            "request_timeout_secs" => Ok(self
                .request_timeout_secs
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a value by key.
    ///
    /// `request_timeout_secs` accepts `none` to clear the timeout.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_base_url" => {
                url::Url::parse(value).map_err(|e| {
                    CatalogError::Config(format!("invalid URL '{value}': {e}"))
                })?;
                self.api_base_url = value.to_string();
            }
            "signature" => {
                if value.trim().is_empty() {
                    return Err(CatalogError::Config("signature cannot be empty".to_string()));
                }
                self.signature = value.to_string();
            }
            "request_timeout_secs" => {
                self.request_timeout_secs = match value {
                    "none" | "" => None,
                    v => Some(v.parse().map_err(|_| {
                        CatalogError::Config(format!("invalid timeout '{v}', expected seconds"))
                    })?),
                };
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> CatalogError {
    CatalogError::Config(format!(
        "unknown key '{}', expected one of: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("signature", "ash").unwrap();
        config.set("request_timeout_secs", "15").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.signature, "ash");
        assert_eq!(loaded.request_timeout_secs, Some(15));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            Config::config_path(dir.path()),
            "api_base_url: http://localhost:8080/api\n",
        )
        .unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.api_base_url, "http://localhost:8080/api");
        assert_eq!(loaded.signature, DEFAULT_SIGNATURE);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("api_base_url", "nope").is_err());
        assert!(config.set("request_timeout_secs", "soon").is_err());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_clear_timeout() {
        let mut config = Config::default();
        config.set("request_timeout_secs", "5").unwrap();
        config.set("request_timeout_secs", "none").unwrap();
        assert_eq!(config.get("request_timeout_secs").unwrap(), "none");
    }
}
