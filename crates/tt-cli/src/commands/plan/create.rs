use tt_store::plans::{PlanDraft, validate_draft};

use crate::cli::GlobalFlags;
use crate::commands::shared::today;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

pub fn run(draft: PlanDraft, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = today();
    let technologies = ctx.service.technologies();

    let errors = validate_draft(&draft, technologies, today);
    if !errors.is_empty() {
        for error in &errors {
            ui::notice(flags, &format!("  {error}"));
        }
        anyhow::bail!("study plan not created: {} field(s) invalid", errors.len());
    }

    let mut book = ctx.load_plans()?;
    let plan = book.create(&draft, technologies, today)?;
    ctx.save_plans(&book)?;
    output(&plan, flags.format)
}
