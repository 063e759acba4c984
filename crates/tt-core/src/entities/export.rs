use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Technology;

/// The JSON document written by `export` and accepted by `import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportDocument {
    pub technologies: Vec<Technology>,
    #[serde(rename = "exportedAt")]
    pub exported_at: DateTime<Utc>,
}

impl ExportDocument {
    /// File name for an export taken on `date`: `technologies_<YYYY-MM-DD>.json`.
    #[must_use]
    pub fn file_name(date: NaiveDate) -> String {
        format!("technologies_{}.json", date.format("%Y-%m-%d"))
    }
}
