//! Working collection service.
//!
//! `TechnologyService` owns the in-memory working collection and the slot
//! backend it is persisted to. Every mutating method changes the collection
//! in memory only; callers decide when to [`TechnologyService::persist`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tt_config::StorageConfig;
use tt_core::entities::{ExportDocument, InvalidEntry, Technology};
use tt_core::enums::TechStatus;
use tt_core::filter::SearchFilter;
use tt_core::ids::{TechnologyId, next_numeric_id, resolve_id};
use tt_core::responses::{ImportSummary, StatsResponse};
use tt_core::selection::SelectionSet;

use crate::bulk;
use crate::error::StoreError;
use crate::export;
use crate::import::{self, LoadOutcome};
use crate::seed::starter_collection;
use crate::slot::KeyValueSlot;
use crate::updates::TechnologyUpdate;
use crate::validation::text_errors;

/// Slot keys used by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotKeys {
    pub working: String,
    pub backup: String,
    pub plans: String,
}

impl Default for SlotKeys {
    fn default() -> Self {
        Self::from(&StorageConfig::default())
    }
}

impl From<&StorageConfig> for SlotKeys {
    fn from(config: &StorageConfig) -> Self {
        Self {
            working: config.working_key.clone(),
            backup: config.backup_key.clone(),
            plans: config.plans_key.clone(),
        }
    }
}

/// A technology coming from the catalog or a roadmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTechnology {
    /// Id carried over from the source, if any.
    pub source_id: Option<TechnologyId>,
    pub title: String,
    pub description: String,
}

/// Result of [`TechnologyService::append_new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppendOutcome {
    pub added: Vec<Technology>,
    /// Entries whose id already exists in the collection.
    pub skipped: usize,
    /// Entries whose title or description would not survive an import.
    pub rejected: Vec<InvalidEntry>,
}

pub struct TechnologyService<S> {
    slots: S,
    keys: SlotKeys,
    technologies: Vec<Technology>,
}

impl<S: KeyValueSlot> TechnologyService<S> {
    /// Load the working collection from its slot.
    ///
    /// An absent slot starts from the built-in starter collection.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] if the slot cannot be read,
    /// [`StoreError::MalformedEncoding`] if it does not hold a technology list.
    pub fn open(slots: S, keys: SlotKeys) -> Result<Self, StoreError> {
        let technologies = match slots.read(&keys.working)? {
            Some(text) => serde_json::from_str(&text).map_err(|e| {
                StoreError::MalformedEncoding(format!("slot '{}': {e}", keys.working))
            })?,
            None => {
                tracing::debug!(key = %keys.working, "no working collection yet, using starter set");
                starter_collection()
            }
        };
        Ok(Self {
            slots,
            keys,
            technologies,
        })
    }

    #[must_use]
    pub const fn slots(&self) -> &S {
        &self.slots
    }

    #[must_use]
    pub const fn keys(&self) -> &SlotKeys {
        &self.keys
    }

    #[must_use]
    pub fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    /// Write the working collection back to its slot.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] if the slot cannot be written.
    pub fn persist(&self) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(&self.technologies)
            .map_err(|e| StoreError::Other(e.into()))?;
        self.slots.write(&self.keys.working, &body)
    }

    /// Add a new not-started technology with the next numeric id.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] if the title or description is too short.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        notes: Option<&str>,
    ) -> Result<Technology, StoreError> {
        let title = title.trim();
        let description = description.trim();
        let errors = text_errors(title, description);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let id = next_numeric_id(self.technologies.iter().map(|t| &t.id));
        let mut tech = Technology::new(id, title, description);
        tech.notes = notes.unwrap_or_default().to_string();
        self.technologies.push(tech.clone());
        tracing::info!(id = %tech.id, title = %tech.title, "technology added");
        Ok(tech)
    }

    /// A digit-only `id` also finds a technology stored under the same text id.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no technology has `id`.
    pub fn get(&self, id: &TechnologyId) -> Result<&Technology, StoreError> {
        let index = self.position(id)?;
        Ok(&self.technologies[index])
    }

    fn get_mut(&mut self, id: &TechnologyId) -> Result<&mut Technology, StoreError> {
        let index = self.position(id)?;
        Ok(&mut self.technologies[index])
    }

    fn position(&self, id: &TechnologyId) -> Result<usize, StoreError> {
        let ids = || self.technologies.iter().map(|t| &t.id);
        resolve_id(id, ids())
            .and_then(|found| ids().position(|candidate| candidate == found))
            .ok_or_else(|| StoreError::not_found("technology", id))
    }

    /// Technologies visible under `filter`, in collection order.
    #[must_use]
    pub fn list(&self, filter: &SearchFilter) -> Vec<&Technology> {
        filter.visible(&self.technologies)
    }

    #[must_use]
    pub fn stats(&self) -> StatsResponse {
        StatsResponse::tally(&self.technologies)
    }

    /// Apply the set fields of `update`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no technology has `id`.
    pub fn update(
        &mut self,
        id: &TechnologyId,
        update: TechnologyUpdate,
    ) -> Result<&Technology, StoreError> {
        let tech = self.get_mut(id)?;
        if let Some(status) = update.status {
            tech.status = status;
        }
        if let Some(notes) = update.notes {
            tech.notes = notes;
        }
        if let Some(deadline) = update.deadline {
            tech.deadline = deadline;
        }
        Ok(tech)
    }

    /// Advance the status one step around the cycle. Returns the new status.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no technology has `id`.
    pub fn cycle_status(&mut self, id: &TechnologyId) -> Result<TechStatus, StoreError> {
        let tech = self.get_mut(id)?;
        tech.status = tech.status.next();
        Ok(tech.status)
    }

    /// Set a deadline, which must fall strictly after `today`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] for a deadline on or before `today`,
    /// [`StoreError::NotFound`] if no technology has `id`.
    pub fn set_deadline(
        &mut self,
        id: &TechnologyId,
        deadline: NaiveDate,
        today: NaiveDate,
    ) -> Result<&Technology, StoreError> {
        if deadline <= today {
            return Err(StoreError::Validation(vec![format!(
                "deadline {deadline} must be after {today}"
            )]));
        }
        let tech = self.get_mut(id)?;
        tech.deadline = Some(deadline);
        Ok(tech)
    }

    /// Replace the collection with the starter set.
    pub fn reset(&mut self) {
        self.technologies = starter_collection();
        tracing::info!("working collection reset to starter set");
    }

    /// Bulk-apply `target` to `selection`. See [`bulk::apply_bulk_status`].
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptySelection`] when nothing is selected.
    pub fn apply_bulk(
        &mut self,
        selection: &mut SelectionSet,
        target: TechStatus,
    ) -> Result<usize, StoreError> {
        bulk::apply_bulk_status(&mut self.technologies, selection, target)
    }

    pub fn mark_all(&mut self, target: TechStatus) -> usize {
        bulk::set_all_statuses(&mut self.technologies, target)
    }

    /// Replace the collection with the valid entries of an import file.
    ///
    /// # Errors
    ///
    /// See [`import::import_into`]; the collection is untouched on error.
    pub fn import_from(&mut self, raw: &str) -> Result<ImportSummary, StoreError> {
        import::import_into(&mut self.technologies, raw)
    }

    #[must_use]
    pub fn export_document(&self, exported_at: DateTime<Utc>) -> ExportDocument {
        export::export_document(&self.technologies, exported_at)
    }

    /// Copy the working collection into the backup slot. Returns the count saved.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] if the slot cannot be written.
    pub fn save_backup(&self) -> Result<usize, StoreError> {
        let body = serde_json::to_string(&self.technologies)
            .map_err(|e| StoreError::Other(e.into()))?;
        self.slots.write(&self.keys.backup, &body)?;
        tracing::info!(count = self.technologies.len(), key = %self.keys.backup, "backup saved");
        Ok(self.technologies.len())
    }

    /// Replace the collection with the backup slot, through the import pipeline.
    ///
    /// # Errors
    ///
    /// Slot read errors and any import pipeline error.
    pub fn load_backup(&mut self) -> Result<LoadOutcome, StoreError> {
        let stored = self.slots.read(&self.keys.backup)?;
        import::load_into(&mut self.technologies, stored.as_deref())
    }

    /// Append catalog or roadmap entries as not-started technologies.
    ///
    /// Entries keep their source id when they have one, otherwise they get the
    /// next numeric id. Entries whose id is already present are skipped.
    /// Entries failing the title/description rules are rejected and reported,
    /// so the collection always re-imports cleanly.
    pub fn append_new(&mut self, entries: impl IntoIterator<Item = NewTechnology>) -> AppendOutcome {
        let mut outcome = AppendOutcome::default();
        for (position, entry) in entries.into_iter().enumerate() {
            let title = entry.title.trim();
            let description = entry.description.trim();
            let errors = text_errors(title, description);
            if !errors.is_empty() {
                tracing::warn!(title = %entry.title, ?errors, "catalog entry rejected");
                outcome.rejected.push(InvalidEntry {
                    index: position + 1,
                    preview: if title.is_empty() {
                        entry
                            .source_id
                            .as_ref()
                            .map_or_else(|| format!("Entry {}", position + 1), ToString::to_string)
                    } else {
                        title.to_string()
                    },
                    errors,
                });
                continue;
            }

            let id = entry
                .source_id
                .unwrap_or_else(|| next_numeric_id(self.technologies.iter().map(|t| &t.id)));
            if self.technologies.iter().any(|t| t.id == id) {
                tracing::warn!(%id, title = %entry.title, "technology already tracked, skipping");
                outcome.skipped += 1;
                continue;
            }
            let tech = Technology::new(id, title, description);
            self.technologies.push(tech.clone());
            outcome.added.push(tech);
        }
        tracing::info!(
            added = outcome.added.len(),
            skipped = outcome.skipped,
            rejected = outcome.rejected.len(),
            "appended technologies"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlots;
    use crate::updates::TechnologyUpdateBuilder;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> TechnologyService<MemorySlots> {
        TechnologyService::open(MemorySlots::new(), SlotKeys::default()).unwrap()
    }

    #[test]
    fn absent_slot_starts_from_starter_set() {
        let svc = service();
        assert_eq!(svc.technologies(), starter_collection().as_slice());
    }

    #[test]
    fn malformed_slot_is_reported() {
        let slots = MemorySlots::new().with("technologies", "{oops");
        let err = TechnologyService::open(slots, SlotKeys::default())
            .err()
            .unwrap();
        assert!(matches!(err, StoreError::MalformedEncoding(_)));
    }

    #[test]
    fn persist_then_reopen() {
        let slots = MemorySlots::new();
        let mut svc = TechnologyService::open(&slots, SlotKeys::default()).unwrap();
        svc.add("Rust", "Ownership and borrowing", Some("chapter 4"))
            .unwrap();
        svc.persist().unwrap();

        let reopened = TechnologyService::open(&slots, SlotKeys::default()).unwrap();
        assert_eq!(reopened.technologies(), svc.technologies());
    }

    #[test]
    fn add_assigns_next_numeric_id() {
        let mut svc = service();
        let tech = svc.add("  Rust ", " Ownership and borrowing ", None).unwrap();
        assert_eq!(tech.id, TechnologyId::Number(6));
        assert_eq!(tech.title, "Rust");
        assert_eq!(tech.status, TechStatus::NotStarted);
    }

    #[test]
    fn add_validates_fields() {
        let mut svc = service();
        let err = svc.add("R", "short", None).unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref errors) if errors.len() == 2));
        assert_eq!(svc.technologies().len(), 5);
    }

    #[test]
    fn get_unknown_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.get(&TechnologyId::Number(404)),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn update_applies_only_set_fields() {
        let mut svc = service();
        let id = TechnologyId::Number(1);
        let before = svc.get(&id).unwrap().clone();
        let after = svc
            .update(&id, TechnologyUpdateBuilder::new().notes("flexbox froggy").build())
            .unwrap()
            .clone();
        assert_eq!(after.notes, "flexbox froggy");
        assert_eq!(after.status, before.status);
        assert_eq!(after.deadline, before.deadline);
    }

    #[test]
    fn cycle_wraps_around() {
        let mut svc = service();
        let id = TechnologyId::Number(4);
        assert_eq!(svc.cycle_status(&id).unwrap(), TechStatus::InProgress);
        assert_eq!(svc.cycle_status(&id).unwrap(), TechStatus::Completed);
        assert_eq!(svc.cycle_status(&id).unwrap(), TechStatus::NotStarted);
    }

    #[test]
    fn deadline_must_be_in_the_future() {
        let mut svc = service();
        let id = TechnologyId::Number(1);
        let today = date(2026, 10, 16);
        assert!(matches!(
            svc.set_deadline(&id, today, today),
            Err(StoreError::Validation(_))
        ));
        let tech = svc.set_deadline(&id, date(2026, 10, 17), today).unwrap();
        assert_eq!(tech.deadline, Some(date(2026, 10, 17)));
    }

    #[test]
    fn stats_tally_starter_set() {
        let stats = service().stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.not_started, 2);
    }

    #[test]
    fn backup_round_trip() {
        let mut svc = service();
        assert_eq!(svc.load_backup().unwrap(), LoadOutcome::Empty);

        svc.save_backup().unwrap();
        svc.add("Rust", "Ownership and borrowing", None).unwrap();
        assert_eq!(svc.technologies().len(), 6);

        let outcome = svc.load_backup().unwrap();
        assert!(matches!(outcome, LoadOutcome::Loaded(ref s) if s.applied_count == 5));
        assert_eq!(svc.technologies(), starter_collection().as_slice());
    }

    #[test]
    fn reset_restores_starter_set() {
        let mut svc = service();
        svc.mark_all(TechStatus::Completed);
        svc.reset();
        assert_eq!(svc.technologies(), starter_collection().as_slice());
    }

    #[test]
    fn append_new_skips_existing_ids() {
        let mut svc = service();
        let outcome = svc.append_new(vec![
            NewTechnology {
                source_id: Some(TechnologyId::Number(1)),
                title: "Duplicate".into(),
                description: "Already tracked under id 1".into(),
            },
            NewTechnology {
                source_id: Some(TechnologyId::Number(30)),
                title: "Catalog item".into(),
                description: "Comes with its own id".into(),
            },
            NewTechnology {
                source_id: None,
                title: "Roadmap item".into(),
                description: "Gets the next numeric id".into(),
            },
        ]);
        assert_eq!(outcome.skipped, 1);
        let ids: Vec<_> = outcome.added.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![TechnologyId::Number(30), TechnologyId::Number(31)]);
        assert!(outcome.added.iter().all(|t| t.status == TechStatus::NotStarted));
    }

    #[test]
    fn append_new_rejects_short_text() {
        let mut svc = service();
        let outcome = svc.append_new(vec![
            NewTechnology {
                source_id: None,
                title: "Pizza".into(),
                description: "Boil.".into(),
            },
            NewTechnology {
                source_id: Some(TechnologyId::Number(40)),
                title: String::new(),
                description: String::new(),
            },
        ]);
        assert!(outcome.added.is_empty());
        assert_eq!(outcome.skipped, 0);
        let previews: Vec<_> = outcome.rejected.iter().map(|r| r.preview.as_str()).collect();
        assert_eq!(previews, vec!["Pizza", "40"]);
        assert_eq!(outcome.rejected[0].errors.len(), 1);
        assert_eq!(outcome.rejected[1].errors.len(), 2);
        assert_eq!(svc.technologies(), starter_collection().as_slice());
    }

    #[test]
    fn appended_collection_survives_export_then_import() {
        let mut svc = service();
        svc.append_new(vec![
            NewTechnology {
                source_id: None,
                title: "Pizza".into(),
                description: "Boil.".into(),
            },
            NewTechnology {
                source_id: Some(TechnologyId::Number(30)),
                title: " Catalog item ".into(),
                description: " Comes with its own id ".into(),
            },
        ]);
        let before = svc.technologies().to_vec();
        assert_eq!(before.len(), 6);

        let json = serde_json::to_string(&svc.export_document(Utc::now())).unwrap();
        let summary = svc.import_from(&json).unwrap();
        assert_eq!(summary.applied_count, 6);
        assert_eq!(summary.skipped_count, 0);
        assert_eq!(svc.technologies(), before.as_slice());
    }

    #[test]
    fn digit_argument_finds_text_id() {
        let mut svc = service();
        let raw = r#"[{"id": "42", "title": "Rust", "description": "Ownership and borrowing"}]"#;
        svc.import_from(raw).unwrap();

        let arg: TechnologyId = "42".parse().unwrap();
        assert_eq!(svc.get(&arg).unwrap().id, TechnologyId::Text("42".into()));
        assert_eq!(svc.cycle_status(&arg).unwrap(), TechStatus::InProgress);
    }
}
