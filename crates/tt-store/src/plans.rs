//! Study plans: scheduled study windows for tracked technologies.
//!
//! Plans live in their own slot, independent of the working collection. A plan
//! captures the technology title at creation time, so it still reads sensibly
//! after the collection is replaced by an import.

use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tt_core::entities::{StudyPlan, Technology};
use tt_core::enums::PlanStatus;
use tt_core::ids::{TechnologyId, generate_plan_id};

use crate::error::StoreError;
use crate::slot::KeyValueSlot;

pub const MIN_WEEKLY_HOURS: u32 = 1;
pub const MAX_WEEKLY_HOURS: u32 = 60;
pub const MIN_GOAL_CHARS: usize = 10;

/// Unvalidated plan input, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanDraft {
    pub technology_id: Option<TechnologyId>,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub weekly_hours: Option<u32>,
    pub goal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanField {
    TechnologyId,
    StartDate,
    Deadline,
    WeeklyHours,
    Goal,
}

impl PlanField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TechnologyId => "technology",
            Self::StartDate => "start date",
            Self::Deadline => "deadline",
            Self::WeeklyHours => "weekly hours",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for PlanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed rule on one draft field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: PlanField,
    pub message: String,
}

impl FieldError {
    fn new(field: PlanField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check `draft` against the plan rules. At most one error per field.
#[must_use]
pub fn validate_draft(
    draft: &PlanDraft,
    technologies: &[Technology],
    today: NaiveDate,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match &draft.technology_id {
        None => errors.push(FieldError::new(
            PlanField::TechnologyId,
            "choose a technology",
        )),
        Some(id) if !technologies.iter().any(|t| &t.id == id) => errors.push(FieldError::new(
            PlanField::TechnologyId,
            format!("technology {id} is not tracked"),
        )),
        Some(_) => {}
    }

    match draft.start_date {
        None => errors.push(FieldError::new(PlanField::StartDate, "start date is required")),
        Some(start) if start < today => errors.push(FieldError::new(
            PlanField::StartDate,
            "start date cannot be in the past",
        )),
        Some(_) => {}
    }

    match draft.deadline {
        None => errors.push(FieldError::new(PlanField::Deadline, "deadline is required")),
        Some(deadline) if deadline < today => errors.push(FieldError::new(
            PlanField::Deadline,
            "deadline cannot be in the past",
        )),
        Some(deadline) if draft.start_date.is_some_and(|start| deadline < start) => errors.push(
            FieldError::new(PlanField::Deadline, "deadline cannot be before the start date"),
        ),
        Some(_) => {}
    }

    match draft.weekly_hours {
        None => errors.push(FieldError::new(
            PlanField::WeeklyHours,
            "weekly hours are required",
        )),
        Some(hours) if !(MIN_WEEKLY_HOURS..=MAX_WEEKLY_HOURS).contains(&hours) => {
            errors.push(FieldError::new(
                PlanField::WeeklyHours,
                format!("use between {MIN_WEEKLY_HOURS} and {MAX_WEEKLY_HOURS} hours per week"),
            ));
        }
        Some(_) => {}
    }

    let goal = draft.goal.trim();
    if goal.is_empty() {
        errors.push(FieldError::new(PlanField::Goal, "describe the study goal"));
    } else if goal.chars().count() < MIN_GOAL_CHARS {
        errors.push(FieldError::new(
            PlanField::Goal,
            format!("at least {MIN_GOAL_CHARS} characters"),
        ));
    }

    errors
}

/// Whole days from `today` to the plan deadline; negative once it has passed.
#[must_use]
pub fn days_left(plan: &StudyPlan, today: NaiveDate) -> i64 {
    (plan.deadline - today).num_days()
}

/// The stored set of study plans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanBook {
    plans: Vec<StudyPlan>,
}

impl PlanBook {
    /// Read plans from `key`. An absent slot is an empty book.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] or [`StoreError::MalformedEncoding`].
    pub fn load(slots: &impl KeyValueSlot, key: &str) -> Result<Self, StoreError> {
        let plans = match slots.read(key)? {
            Some(text) if !text.trim().is_empty() => serde_json::from_str(&text)
                .map_err(|e| StoreError::MalformedEncoding(format!("slot '{key}': {e}")))?,
            _ => Vec::new(),
        };
        Ok(Self { plans })
    }

    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] if the slot cannot be written.
    pub fn save(&self, slots: &impl KeyValueSlot, key: &str) -> Result<(), StoreError> {
        let body =
            serde_json::to_string_pretty(&self.plans).map_err(|e| StoreError::Other(e.into()))?;
        slots.write(key, &body)
    }

    /// Validate `draft` and add a scheduled plan.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] listing every failed field rule.
    pub fn create(
        &mut self,
        draft: &PlanDraft,
        technologies: &[Technology],
        today: NaiveDate,
    ) -> Result<StudyPlan, StoreError> {
        let errors = validate_draft(draft, technologies, today);
        let (Some(technology_id), Some(start_date), Some(deadline), Some(hours)) = (
            draft.technology_id.clone(),
            draft.start_date,
            draft.deadline,
            draft.weekly_hours,
        ) else {
            return Err(StoreError::Validation(
                errors.iter().map(ToString::to_string).collect(),
            ));
        };
        if !errors.is_empty() {
            return Err(StoreError::Validation(
                errors.iter().map(ToString::to_string).collect(),
            ));
        }

        let technology_title = technologies
            .iter()
            .find(|t| t.id == technology_id)
            .map(|t| t.title.clone())
            .unwrap_or_default();
        let weekly_hours = u8::try_from(hours).map_err(|e| StoreError::Other(e.into()))?;

        let plan = StudyPlan {
            id: generate_plan_id(),
            technology_id,
            technology_title,
            start_date,
            deadline,
            weekly_hours,
            goal: draft.goal.trim().to_string(),
            status: PlanStatus::Scheduled,
            created_at: Utc::now(),
        };
        self.plans.push(plan.clone());
        tracing::info!(id = %plan.id, technology = %plan.technology_id, "study plan created");
        Ok(plan)
    }

    /// Plans ordered by deadline, earliest first.
    #[must_use]
    pub fn list(&self) -> Vec<&StudyPlan> {
        let mut plans: Vec<&StudyPlan> = self.plans.iter().collect();
        plans.sort_by_key(|plan| plan.deadline);
        plans
    }

    /// Flip a plan between scheduled and completed.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no plan has `id`.
    pub fn toggle(&mut self, id: &str) -> Result<&StudyPlan, StoreError> {
        let plan = self
            .plans
            .iter_mut()
            .find(|plan| plan.id == id)
            .ok_or_else(|| StoreError::not_found("study plan", id))?;
        plan.status = plan.status.toggled();
        Ok(plan)
    }

    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no plan has `id`.
    pub fn delete(&mut self, id: &str) -> Result<StudyPlan, StoreError> {
        let position = self
            .plans
            .iter()
            .position(|plan| plan.id == id)
            .ok_or_else(|| StoreError::not_found("study plan", id))?;
        Ok(self.plans.remove(position))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
