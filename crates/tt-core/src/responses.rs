//! CLI response types returned by `techtrack` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `techtrack import`, `techtrack bulk`, `techtrack stats`, and
//! `techtrack export`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{InvalidEntry, Technology};
use crate::enums::TechStatus;

/// How many invalid entries an import summary carries for diagnostics.
pub const INVALID_SAMPLE_LIMIT: usize = 5;

/// How many imported technologies an import summary previews.
pub const PREVIEW_LIMIT: usize = 5;

/// Outcome of a successful import (file or backup slot).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportSummary {
    /// Technologies now in the working collection.
    pub applied_count: usize,
    /// Candidates rejected by field validation.
    pub skipped_count: usize,
    /// Up to [`INVALID_SAMPLE_LIMIT`] rejected candidates.
    pub invalid_samples: Vec<InvalidEntry>,
    /// Up to [`PREVIEW_LIMIT`] imported technologies.
    pub preview: Vec<Technology>,
}

/// Response from `techtrack load`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BackupLoadResponse {
    /// `false` when the backup slot holds no data.
    pub loaded: bool,
    pub summary: Option<ImportSummary>,
}

/// Response from `techtrack bulk` and `techtrack mark-all`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BulkUpdateResponse {
    pub updated: usize,
    pub status: TechStatus,
}

/// Response from `techtrack stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatsResponse {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatsResponse {
    /// Tally statuses across `technologies`.
    #[must_use]
    pub fn tally<'a>(technologies: impl IntoIterator<Item = &'a Technology>) -> Self {
        technologies
            .into_iter()
            .fold(Self::default(), |mut stats, tech| {
                stats.total += 1;
                match tech.status {
                    TechStatus::NotStarted => stats.not_started += 1,
                    TechStatus::InProgress => stats.in_progress += 1,
                    TechStatus::Completed => stats.completed += 1,
                }
                stats
            })
    }
}

/// Response from `techtrack export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub path: String,
    pub count: usize,
    pub exported_at: DateTime<Utc>,
}
