use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::technology::add(&args, ctx, flags),
        Commands::List(args) => commands::technology::list(&args, ctx, flags),
        Commands::Get(args) => commands::technology::get(&args, ctx, flags),
        Commands::Status(args) => commands::technology::set_status(&args, ctx, flags),
        Commands::Cycle(args) => commands::technology::cycle(&args, ctx, flags),
        Commands::Notes(args) => commands::technology::notes(&args, ctx, flags),
        Commands::Deadline(args) => commands::technology::deadline(&args, ctx, flags),
        Commands::Bulk(args) => commands::bulk::handle(&args, ctx, flags),
        Commands::MarkAll(args) => commands::bulk::mark_all(&args, ctx, flags),
        Commands::Stats => commands::technology::stats(ctx, flags),
        Commands::Import(args) => commands::transfer::import(&args, ctx, flags),
        Commands::Export(args) => commands::transfer::export(&args, ctx, flags),
        Commands::Save => commands::backup::save(ctx, flags),
        Commands::Load => commands::backup::load(ctx, flags),
        Commands::Reset => commands::backup::reset(ctx, flags),
        Commands::Catalog { action } => commands::catalog::handle(&action, ctx, flags).await,
        Commands::Roadmap { action } => commands::roadmap::handle(&action, ctx, flags).await,
        Commands::Plan { action } => commands::plan::handle(&action, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
