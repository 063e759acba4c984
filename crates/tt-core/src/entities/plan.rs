use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PlanStatus;
use crate::ids::TechnologyId;

/// A scheduled study window for one technology.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub id: String,
    pub technology_id: TechnologyId,
    /// Title captured when the plan was created.
    pub technology_title: String,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    pub weekly_hours: u8,
    pub goal: String,
    pub status: PlanStatus,
    pub created_at: DateTime<Utc>,
}
