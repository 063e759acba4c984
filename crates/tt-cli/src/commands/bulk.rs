use anyhow::anyhow;
use tt_core::entities::Technology;
use tt_core::enums::TechStatus;
use tt_core::filter::SearchFilter;
use tt_core::ids::resolve_id;
use tt_core::responses::BulkUpdateResponse;
use tt_core::selection::SelectionSet;
use tt_store::StoreError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{BulkArgs, MarkAllArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `techtrack bulk`.
pub fn handle(args: &BulkArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = args.status.parse::<TechStatus>()?;
    let mut selection = build_selection(args, ctx.service.technologies());

    let updated = ctx
        .service
        .apply_bulk(&mut selection, status)
        .map_err(|error| match error {
            StoreError::EmptySelection => {
                anyhow!("no technologies selected; pass --id or --search with --all-visible")
            }
            other => other.into(),
        })?;
    ctx.persist()?;

    output(&BulkUpdateResponse { updated, status }, flags.format)
}

/// Handle `techtrack mark-all`.
pub fn mark_all(
    args: &MarkAllArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = args.status.parse::<TechStatus>()?;
    let updated = ctx.service.mark_all(status);
    ctx.persist()?;
    output(&BulkUpdateResponse { updated, status }, flags.format)
}

/// Explicit ids plus, with `--all-visible`, everything the filter shows.
fn build_selection(args: &BulkArgs, technologies: &[Technology]) -> SelectionSet {
    let mut selection: SelectionSet = args
        .id
        .iter()
        .map(|arg| {
            resolve_id(arg, technologies.iter().map(|t| &t.id))
                .unwrap_or(arg)
                .clone()
        })
        .collect();
    if args.all_visible {
        let filter = SearchFilter::new(args.search.as_deref().unwrap_or_default());
        let visible = filter.visible(technologies);
        if !selection.is_all_visible_selected(&visible) {
            selection.toggle_all_visible(&visible);
        }
    }
    selection
}
