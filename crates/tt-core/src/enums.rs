//! Status and difficulty enums for techtrack.
//!
//! Technology statuses serialize as kebab-case (`not-started`) because that is
//! the format stored in export files and durable slots. Other enums use plain
//! lowercase words, so the two conventions coincide.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TechStatus
// ---------------------------------------------------------------------------

/// Study status of a tracked technology.
///
/// ```text
/// not-started → in-progress → completed → not-started (cycle)
/// ```
///
/// Any status may be assigned directly; the cycle is only what the
/// single-step `cycle` command follows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum TechStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TechStatus {
    /// Every status, in cycle order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// The status that follows `self` when cycling.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }

    /// Parse the wire representation. Returns `None` for unsupported values.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TechStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TechStatus {
    type Err = CoreError;

    /// Accepts the wire form plus `snake_case` spellings (`in_progress`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::from_wire(&normalized).ok_or_else(|| CoreError::InvalidValue {
            field: "status",
            value: s.to_string(),
            expected: "not-started, in-progress, completed",
        })
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty tier of a catalog technology, derived from its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Map a numeric rating band onto a tier.
    ///
    /// ```text
    /// rating >= 4.5 → advanced
    /// rating >= 4.0 → intermediate
    /// otherwise     → beginner
    /// ```
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            Self::Advanced
        } else if rating >= 4.0 {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PlanStatus
// ---------------------------------------------------------------------------

/// Status of a study plan.
///
/// ```text
/// scheduled ⇄ completed
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    #[default]
    Scheduled,
    Completed,
}

impl PlanStatus {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Scheduled => Self::Completed,
            Self::Completed => Self::Scheduled,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
