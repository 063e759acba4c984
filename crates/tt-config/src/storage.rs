//! Local storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_working_key() -> String {
    String::from("technologies")
}

fn default_backup_key() -> String {
    String::from("techTrackerData")
}

fn default_plans_key() -> String {
    String::from("studyPlans")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the storage slots. If empty, the platform data
    /// directory is used.
    #[serde(default)]
    pub data_dir: String,

    /// Slot holding the working collection.
    #[serde(default = "default_working_key")]
    pub working_key: String,

    /// Slot written by `save` and read by `load`.
    #[serde(default = "default_backup_key")]
    pub backup_key: String,

    /// Slot holding study plans.
    #[serde(default = "default_plans_key")]
    pub plans_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            working_key: default_working_key(),
            backup_key: default_backup_key(),
            plans_key: default_plans_key(),
        }
    }
}

impl StorageConfig {
    /// Directory the slots live in.
    ///
    /// Returns `data_dir` if set, otherwise `<platform data dir>/techtrack`,
    /// falling back to `.techtrack/data` when the platform has none.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".techtrack").join("data"),
            |dir| dir.join("techtrack"),
        )
    }
}
