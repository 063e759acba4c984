use anyhow::Context;
use tt_store::NewTechnology;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RoadmapCommands;
use crate::commands::shared::append_notices;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `techtrack roadmap`.
pub async fn handle(
    action: &RoadmapCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RoadmapCommands::Import => import(ctx, flags).await,
    }
}

async fn import(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.catalog()?;
    let spinner = Progress::spinner("Fetching roadmap...");
    let entries = match client.fetch_roadmap().await {
        Ok(entries) => {
            spinner.finish_ok(&format!("{} roadmap entries", entries.len()));
            entries
        }
        Err(error) => {
            spinner.finish_err("roadmap unavailable");
            return Err(error).context("failed to import the roadmap");
        }
    };

    let outcome = ctx
        .service
        .append_new(entries.into_iter().map(|entry| NewTechnology {
            source_id: None,
            title: entry.title,
            description: entry.description,
        }));
    ctx.persist()?;
    append_notices(&outcome, flags);
    output(&outcome, flags.format)
}
