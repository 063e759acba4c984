//! Export of the working collection.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tt_core::entities::{ExportDocument, Technology};

use crate::error::StoreError;

/// Snapshot `technologies` into an export document stamped `exported_at`.
#[must_use]
pub fn export_document(technologies: &[Technology], exported_at: DateTime<Utc>) -> ExportDocument {
    ExportDocument {
        technologies: technologies.to_vec(),
        exported_at,
    }
}

/// Write `document` as pretty JSON into `dir`, named after its export date.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns [`StoreError::StorageUnavailable`] if the directory or file cannot
/// be written.
pub fn write_export(dir: &Path, document: &ExportDocument) -> Result<PathBuf, StoreError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(ExportDocument::file_name(
        document.exported_at.date_naive(),
    ));
    let body = serde_json::to_string_pretty(document).map_err(|e| StoreError::Other(e.into()))?;
    std::fs::write(&path, body)?;
    tracing::info!(path = %path.display(), count = document.technologies.len(), "exported technologies");
    Ok(path)
}
