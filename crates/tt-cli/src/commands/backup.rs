//! Backup slot save/load and reset to the starter set.

use serde::Serialize;
use tt_core::responses::BackupLoadResponse;
use tt_store::LoadOutcome;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Debug, Serialize)]
struct SaveResponse<'a> {
    saved: usize,
    slot: &'a str,
}

pub fn save(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let saved = ctx.service.save_backup()?;
    output(
        &SaveResponse {
            saved,
            slot: &ctx.service.keys().backup,
        },
        flags.format,
    )
}

pub fn load(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = match ctx.service.load_backup()? {
        LoadOutcome::Empty => {
            ui::notice(flags, "No saved data found; collection left unchanged.");
            BackupLoadResponse {
                loaded: false,
                summary: None,
            }
        }
        LoadOutcome::Loaded(summary) => {
            ctx.persist()?;
            BackupLoadResponse {
                loaded: true,
                summary: Some(summary),
            }
        }
    };
    output(&response, flags.format)
}

pub fn reset(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.reset();
    ctx.persist()?;
    output(&ctx.service.stats(), flags.format)
}
