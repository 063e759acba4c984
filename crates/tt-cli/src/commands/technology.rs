//! Single-technology commands: add, list, get, status, cycle, notes,
//! deadline, stats.

use anyhow::{Context, bail};
use tt_core::entities::Technology;
use tt_core::enums::TechStatus;
use tt_core::filter::SearchFilter;
use tt_store::updates::TechnologyUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AddArgs, DeadlineArgs, IdArgs, ListArgs, NotesArgs, StatusArgs};
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::today;
use crate::context::AppContext;
use crate::output::output;

pub fn add(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tech = ctx
        .service
        .add(&args.title, &args.description, args.notes.as_deref())?;
    ctx.persist()?;
    output(&tech, flags.format)
}

pub fn list(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = args
        .status
        .as_deref()
        .map(str::parse::<TechStatus>)
        .transpose()?;
    let filter = SearchFilter::new(args.search.as_deref().unwrap_or_default());

    let mut rows = filter_by_status(ctx.service.list(&filter), status);
    apply_limit(
        &mut rows,
        effective_limit(flags.limit, ctx.config.general.default_limit),
    );
    output(&rows, flags.format)
}

fn filter_by_status(rows: Vec<&Technology>, status: Option<TechStatus>) -> Vec<&Technology> {
    match status {
        Some(status) => rows.into_iter().filter(|t| t.status == status).collect(),
        None => rows,
    }
}

pub fn get(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(ctx.service.get(&args.id)?, flags.format)
}

pub fn set_status(
    args: &StatusArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = args.status.parse::<TechStatus>()?;
    let update = TechnologyUpdateBuilder::new().status(status).build();
    ctx.service.update(&args.id, update)?;
    ctx.persist()?;
    output(ctx.service.get(&args.id)?, flags.format)
}

pub fn cycle(args: &IdArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.service.cycle_status(&args.id)?;
    tracing::debug!(id = %args.id, %status, "status cycled");
    ctx.persist()?;
    output(ctx.service.get(&args.id)?, flags.format)
}

pub fn notes(args: &NotesArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = TechnologyUpdateBuilder::new().notes(args.text.as_str()).build();
    ctx.service.update(&args.id, update)?;
    ctx.persist()?;
    output(ctx.service.get(&args.id)?, flags.format)
}

pub fn deadline(
    args: &DeadlineArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match (args.date, args.clear) {
        (_, true) => {
            let update = TechnologyUpdateBuilder::new().deadline(None).build();
            ctx.service.update(&args.id, update)?;
        }
        (Some(date), false) => {
            ctx.service.set_deadline(&args.id, date, today())?;
        }
        (None, false) => bail!("pass a deadline date or --clear"),
    }
    ctx.persist()?;
    output(ctx.service.get(&args.id)?, flags.format)
}

pub fn stats(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.stats(), flags.format)
        .context("failed to render collection statistics")
}
