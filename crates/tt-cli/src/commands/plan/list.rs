use serde::Serialize;
use tt_core::entities::StudyPlan;
use tt_store::plans::days_left;

use crate::cli::GlobalFlags;
use crate::commands::shared::today;
use crate::context::AppContext;
use crate::output::output;

/// A plan with its countdown, as listed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanRow<'a> {
    #[serde(flatten)]
    plan: &'a StudyPlan,
    days_left: i64,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let book = ctx.load_plans()?;
    let today = today();
    let rows = book
        .list()
        .into_iter()
        .map(|plan| PlanRow {
            plan,
            days_left: days_left(plan, today),
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
