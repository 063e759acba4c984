//! Import pipeline: parse, normalize, validate, replace.
//!
//! A successful import REPLACES the whole working collection with the valid
//! candidates. It never merges. When nothing survives validation the
//! collection is left untouched and [`StoreError::NoValidEntries`] carries the
//! rejected entries back to the caller.

use serde_json::Value;
use tt_core::entities::{Technology, ValidationReport};
use tt_core::responses::{INVALID_SAMPLE_LIMIT, ImportSummary, PREVIEW_LIMIT};

use crate::error::StoreError;
use crate::payload::normalize;
use crate::validation;

/// Result of loading from a slot that may hold nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The slot is absent or blank. Not an error.
    Empty,
    Loaded(ImportSummary),
}

/// Parse raw text and validate every candidate it holds.
///
/// # Errors
///
/// [`StoreError::MalformedEncoding`] if `raw` is not JSON,
/// [`StoreError::InvalidPayloadShape`] if it is JSON of the wrong shape.
pub fn read_report(raw: &str) -> Result<ValidationReport, StoreError> {
    let payload: Value =
        serde_json::from_str(raw).map_err(|e| StoreError::MalformedEncoding(e.to_string()))?;
    let items = normalize(&payload)?;
    Ok(validation::build(items))
}

/// Replace `collection` with the report's valid items.
///
/// # Errors
///
/// [`StoreError::NoValidEntries`] if the report has no valid items; the
/// collection is not modified in that case.
pub fn apply_report(
    collection: &mut Vec<Technology>,
    report: ValidationReport,
) -> Result<ImportSummary, StoreError> {
    if report.valid.is_empty() {
        tracing::warn!(rejected = report.invalid.len(), "import has no valid technologies");
        return Err(StoreError::NoValidEntries {
            rejected: report.invalid,
        });
    }

    if !report.invalid.is_empty() {
        tracing::warn!(skipped = report.invalid.len(), "some import entries were skipped");
    }

    let summary = ImportSummary {
        applied_count: report.valid.len(),
        skipped_count: report.invalid.len(),
        invalid_samples: report
            .invalid
            .into_iter()
            .take(INVALID_SAMPLE_LIMIT)
            .collect(),
        preview: report.valid.iter().take(PREVIEW_LIMIT).cloned().collect(),
    };
    *collection = report.valid;
    tracing::info!(applied = summary.applied_count, "working collection replaced by import");
    Ok(summary)
}

/// Run the whole pipeline on `raw` against `collection`.
///
/// # Errors
///
/// Any of the pipeline errors; `collection` is untouched on error.
pub fn import_into(
    collection: &mut Vec<Technology>,
    raw: &str,
) -> Result<ImportSummary, StoreError> {
    apply_report(collection, read_report(raw)?)
}

/// Run the pipeline on optional slot contents. Absent or blank contents
/// yield [`LoadOutcome::Empty`].
///
/// # Errors
///
/// Same as [`import_into`].
pub fn load_into(
    collection: &mut Vec<Technology>,
    stored: Option<&str>,
) -> Result<LoadOutcome, StoreError> {
    match stored {
        Some(raw) if !raw.trim().is_empty() => import_into(collection, raw).map(LoadOutcome::Loaded),
        _ => Ok(LoadOutcome::Empty),
    }
}
