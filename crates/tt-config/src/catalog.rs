//! Demo catalog API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    String::from("https://dummyjson.com")
}

const fn default_page_size() -> u32 {
    12
}

const fn default_roadmap_limit() -> u32 {
    6
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Items per catalog page and per search.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Roadmap items requested from the remote roadmap source.
    #[serde(default = "default_roadmap_limit")]
    pub roadmap_limit: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            roadmap_limit: default_roadmap_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject values the catalog client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "catalog.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.page_size == 0 || self.page_size > 100 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.page_size".into(),
                reason: "must be between 1 and 100".into(),
            });
        }
        if self.roadmap_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.roadmap_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
