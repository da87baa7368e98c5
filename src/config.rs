//! Application configuration.
//!
//! Loaded from `config.json` under the platform config directory, with
//! `.env` / environment-variable overrides for the cache location and the
//! mock backend's simulated latency:
//!
//! - `STARSIGN_CACHE_DIR`
//! - `STARSIGN_NETWORK_DELAY_MS`

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "starsign";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Cache directory override; platform cache dir when unset.
    pub cache_dir: Option<PathBuf>,
    /// Simulated network latency override, in milliseconds.
    pub network_delay_ms: Option<u64>,
}

impl Config {
    /// Load from disk, then apply environment overrides.
    pub fn load() -> Result<Self> {
        // Pick up a .env file if present; silently ignore when absent.
        let _ = dotenvy::dotenv();

        let path = Self::config_path()?;
        let mut config: Self = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };

        if let Ok(dir) = std::env::var("STARSIGN_CACHE_DIR") {
            config.cache_dir = Some(PathBuf::from(dir));
        }
        if let Ok(delay) = std::env::var("STARSIGN_NETWORK_DELAY_MS") {
            config.network_delay_ms = delay.parse().ok();
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Where the cache store lives: the configured override, or the
    /// platform cache directory.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.cache_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}
