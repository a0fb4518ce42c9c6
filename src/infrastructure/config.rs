//! Configuration management

use crate::error::{FtagError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk format version, bumped when the index layout changes.
pub const STORE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: u32,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: STORE_VERSION,
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .ftag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".ftag").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FtagError::NotInitialized(path.to_path_buf())
            } else {
                FtagError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| FtagError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Fail if this database was written by an incompatible version.
    pub fn ensure_supported(&self) -> Result<()> {
        if self.version != STORE_VERSION {
            return Err(FtagError::Config(format!(
                "Unsupported store version {} (this build supports {})",
                self.version, STORE_VERSION
            )));
        }
        Ok(())
    }

    /// Save config to .ftag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let ftag_dir = path.join(".ftag");
        let config_path = ftag_dir.join("config.toml");

        if !ftag_dir.exists() {
            fs::create_dir(&ftag_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| FtagError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
