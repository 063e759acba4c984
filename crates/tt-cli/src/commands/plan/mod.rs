mod create;
mod list;
mod toggle;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanCommands;
use crate::context::AppContext;

/// Handle `techtrack plan`.
pub fn handle(action: &PlanCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PlanCommands::Create {
            technology,
            start,
            deadline,
            hours,
            goal,
        } => create::run(
            tt_store::plans::PlanDraft {
                technology_id: technology.clone(),
                start_date: *start,
                deadline: *deadline,
                weekly_hours: *hours,
                goal: goal.clone().unwrap_or_default(),
            },
            ctx,
            flags,
        ),
        PlanCommands::List => list::run(ctx, flags),
        PlanCommands::Toggle { id } => toggle::toggle(id, ctx, flags),
        PlanCommands::Delete { id } => toggle::delete(id, ctx, flags),
    }
}
