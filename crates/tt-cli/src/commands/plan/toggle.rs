use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    deleted: String,
}

/// Flip a plan between scheduled and completed.
pub fn toggle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut book = ctx.load_plans()?;
    let plan = book.toggle(id)?.clone();
    ctx.save_plans(&book)?;
    output(&plan, flags.format)
}

pub fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut book = ctx.load_plans()?;
    let removed = book.delete(id)?;
    ctx.save_plans(&book)?;
    output(&DeleteResponse { deleted: removed.id }, flags.format)
}

#[cfg(test)]
mod tests {
    use chrono::Days;
    use tt_core::enums::PlanStatus;
    use tt_core::ids::TechnologyId;
    use tt_store::plans::PlanDraft;

    use super::*;
    use crate::commands::shared::{test_flags, today};

    fn seeded(ctx: &AppContext) -> String {
        let today = today();
        let mut book = ctx.load_plans().expect("plans");
        let plan = book
            .create(
                &PlanDraft {
                    technology_id: Some(TechnologyId::Number(5)),
                    start_date: Some(today),
                    deadline: today.checked_add_days(Days::new(14)),
                    weekly_hours: Some(3),
                    goal: "Learn interactive rebase".into(),
                },
                ctx.service.technologies(),
                today,
            )
            .expect("plan");
        ctx.save_plans(&book).expect("save");
        plan.id
    }

    #[test]
    fn toggle_flips_and_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = AppContext::for_dir(dir.path());
        let id = seeded(&ctx);

        toggle(&id, &ctx, &test_flags()).expect("toggle should work");
        let book = ctx.load_plans().expect("plans");
        assert_eq!(book.list()[0].status, PlanStatus::Completed);
    }

    #[test]
    fn delete_removes_plan() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = AppContext::for_dir(dir.path());
        let id = seeded(&ctx);

        delete(&id, &ctx, &test_flags()).expect("delete should work");
        assert!(ctx.load_plans().expect("plans").is_empty());
        assert!(delete(&id, &ctx, &test_flags()).is_err());
    }
}
