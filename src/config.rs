// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration management
//!
//! The CLI reads an optional TOML file from the platform config directory
//! and falls back to environment variables (a `.env` file is honored).
//! Library consumers construct [`Config`] directly and ignore all of this.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Path of the SQLite store holding plans, weeks and load records
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: dirs::data_dir()
                .map(|p| p.join("shuttleplan/store.db"))
                .unwrap_or_else(|| "shuttleplan.db".into()),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, the default config file,
    /// or the environment, in that order
    pub fn load(path: Option<String>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|p| p.join("shuttleplan/config.toml"))
                .unwrap_or_else(|| "config.toml".into())
                .to_string_lossy()
                .to_string()
        });

        if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("reading config file {config_path}"))?;
            toml::from_str(&content).context("parsing config file")
        } else {
            dotenv::dotenv().ok();

            let mut config = Config::default();
            if let Ok(path) = std::env::var("SHUTTLEPLAN_DB") {
                config.database_path = path.into();
            }
            Ok(config)
        }
    }

    /// Write the configuration to the default config file
    pub fn save(&self, path: Option<String>) -> Result<()> {
        let config_path = path.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|p| p.join("shuttleplan/config.toml"))
                .unwrap_or_else(|| "config.toml".into())
                .to_string_lossy()
                .to_string()
        });

        let parent = Path::new(&config_path)
            .parent()
            .context("invalid config path")?;
        fs::create_dir_all(parent)?;
        fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            database_path: "/tmp/test-store.db".into(),
        };

        config
            .save(Some(path.to_string_lossy().to_string()))
            .unwrap();
        let loaded = Config::load(Some(path.to_string_lossy().to_string())).unwrap();
        assert_eq!(loaded.database_path, config.database_path);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load(Some("/definitely/not/here.toml".into()));
        // Either the env override or the platform default applies; both
        // produce a usable path
        assert!(config.is_ok());
    }
}
