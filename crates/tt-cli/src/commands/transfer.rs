//! File import and export.

use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::Utc;
use tt_core::entities::InvalidEntry;
use tt_core::responses::{ExportResponse, INVALID_SAMPLE_LIMIT};
use tt_store::StoreError;
use tt_store::export::write_export;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ExportArgs, ImportArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// Handle `techtrack import`. The file replaces the working collection.
pub fn import(args: &ImportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let summary = match ctx.service.import_from(&raw) {
        Ok(summary) => summary,
        Err(StoreError::NoValidEntries { rejected }) => {
            report_rejected(&rejected, flags);
            bail!(
                "{} holds no valid technologies ({} rejected); collection left unchanged",
                args.file.display(),
                rejected.len()
            );
        }
        Err(error) => {
            return Err(error).with_context(|| format!("failed to import {}", args.file.display()));
        }
    };
    ctx.persist()?;

    if summary.skipped_count > 0 {
        ui::notice(
            flags,
            &format!("{} invalid entries were skipped", summary.skipped_count),
        );
    }
    output(&summary, flags.format)
}

fn report_rejected(rejected: &[InvalidEntry], flags: &GlobalFlags) {
    for entry in rejected.iter().take(INVALID_SAMPLE_LIMIT) {
        ui::notice(
            flags,
            &format!(
                "  entry {} ({}): {}",
                entry.index,
                entry.preview,
                entry.errors.join("; ")
            ),
        );
    }
}

/// Handle `techtrack export`. An empty collection is refused with a notice.
pub fn export(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.service.technologies().is_empty() {
        ui::notice(flags, "Nothing to export: the collection is empty.");
        return Ok(());
    }

    let exported_at = Utc::now();
    let document = ctx.service.export_document(exported_at);
    let dir = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = write_export(&dir, &document)
        .with_context(|| format!("failed to export to {}", dir.display()))?;

    output(
        &ExportResponse {
            path: path.display().to_string(),
            count: document.technologies.len(),
            exported_at,
        },
        flags.format,
    )
}
