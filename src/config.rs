//! User configuration, read from `config.toml`
//!
//! Every field is optional:
//! ```toml
//! data_dir = "/home/me/.local/share/flashdrill"
//! storage_key = "flashdrill-v1"
//! deck_path = "/home/me/decks/spanish.json"
//! host_env_var = "FLASHDRILL_HOST_READY"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drill::{FileStateStore, DEFAULT_STORAGE_KEY};
use crate::host::DEFAULT_HOST_ENV_VAR;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Directory holding the state slot (default: platform data dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Key of the state slot
    pub storage_key: String,
    /// Custom deck file; the bundled deck is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_path: Option<PathBuf>,
    /// Environment variable the host container sets
    pub host_env_var: String,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            deck_path: None,
            host_env_var: DEFAULT_HOST_ENV_VAR.to_string(),
        }
    }
}

impl DrillConfig {
    /// Default config file path (e.g., ~/.config/flashdrill/config.toml)
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join("flashdrill").join("config.toml"))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: DrillConfig = toml::from_str(&content)?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from the default location
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&Self::default_path()?)
    }

    /// Configured data directory, falling back to the platform default
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| FileStateStore::default_data_dir().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = DrillConfig::load(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, DrillConfig::default());
        assert_eq!(config.storage_key, "flashdrill-v1");
        assert_eq!(config.host_env_var, "FLASHDRILL_HOST_READY");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "deck_path = \"/tmp/deck.json\"\n").unwrap();

        let config = DrillConfig::load(&path).unwrap();
        assert_eq!(config.deck_path, Some(PathBuf::from("/tmp/deck.json")));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "storage_key = [").unwrap();

        assert!(matches!(DrillConfig::load(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = DrillConfig {
            data_dir: Some(PathBuf::from("/srv/drill")),
            ..DrillConfig::default()
        };
        assert_eq!(config.resolved_data_dir(), Some(PathBuf::from("/srv/drill")));
    }
}
