mod add;
mod list;
mod resources;
mod search;
mod watch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::context::AppContext;

/// Handle `techtrack catalog`.
pub async fn handle(
    action: &CatalogCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CatalogCommands::List => list::run(ctx, flags).await,
        CatalogCommands::Search { query } => search::run(query, ctx, flags).await,
        CatalogCommands::Resources { id } => resources::run(*id, ctx, flags).await,
        CatalogCommands::Add { ids } => add::run(ids, ctx, flags).await,
        CatalogCommands::Watch => watch::run(ctx, flags).await,
    }
}
