//! # tt-config
//!
//! Layered configuration loading for techtrack using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TECHTRACK_*` prefix, `__` as separator)
//! 2. Project-level `.techtrack/config.toml`
//! 3. User-level `~/.config/techtrack/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TECHTRACK_CATALOG__BASE_URL` -> `catalog.base_url`,
//! `TECHTRACK_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//!
//! ```no_run
//! use tt_config::TrackConfig;
//!
//! let config = TrackConfig::load_with_dotenv().expect("config");
//! println!("slots live in {}", config.storage.resolved_data_dir().display());
//! ```

mod catalog;
mod error;
mod general;
mod search;
mod storage;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use search::SearchConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TrackConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.catalog.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".techtrack/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TECHTRACK_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("techtrack").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TrackConfig::default();
        assert_eq!(config.storage.working_key, "technologies");
        assert_eq!(config.catalog.base_url, "https://dummyjson.com");
        assert_eq!(config.search.debounce_ms, 500);
        assert_eq!(config.general.default_limit, 20);
    }
}
