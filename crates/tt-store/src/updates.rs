//! Technology update builder.

use chrono::NaiveDate;
use serde::Serialize;
use tt_core::enums::TechStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechnologyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TechStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<NaiveDate>>,
}

impl TechnologyUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none() && self.deadline.is_none()
    }
}

#[derive(Debug, Default)]
pub struct TechnologyUpdateBuilder(TechnologyUpdate);

impl TechnologyUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TechnologyUpdate::default())
    }

    #[must_use]
    pub const fn status(mut self, status: TechStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.0.notes = Some(notes.into());
        self
    }

    /// `None` clears the deadline.
    #[must_use]
    pub const fn deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.0.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn build(self) -> TechnologyUpdate {
        self.0
    }
}
