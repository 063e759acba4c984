use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TechStatus;
use crate::ids::TechnologyId;

/// A technology the user is studying.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Technology {
    pub id: TechnologyId,
    pub title: String,
    pub description: String,
    pub status: TechStatus,
    #[serde(default)]
    pub notes: String,
    /// Target completion date, `YYYY-MM-DD` on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl Technology {
    /// Build a fresh, not-started technology with empty notes.
    #[must_use]
    pub fn new(id: TechnologyId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status: TechStatus::NotStarted,
            notes: String::new(),
            deadline: None,
        }
    }

    /// Text searched by [`crate::filter::SearchFilter`], lowercased.
    #[must_use]
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.status).to_lowercase()
    }
}
