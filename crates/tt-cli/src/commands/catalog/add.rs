use anyhow::Context;
use tt_catalog::CatalogTechnology;
use tt_core::ids::TechnologyId;
use tt_store::NewTechnology;

use crate::cli::GlobalFlags;
use crate::commands::shared::append_notices;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Fetch each catalog entry, then append the ones not already tracked.
pub async fn run(ids: &[i64], ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.catalog()?;
    let spinner = Progress::spinner("Fetching catalog entries...");

    let mut fetched = Vec::with_capacity(ids.len());
    for id in ids {
        spinner.set_message(&format!("Fetching catalog entry {id}..."));
        let item = client
            .fetch_product(*id)
            .await
            .inspect_err(|_| spinner.finish_err("catalog unavailable"))
            .with_context(|| format!("failed to fetch catalog entry {id}"))?;
        fetched.push(item);
    }
    spinner.finish_clear();

    let outcome = ctx.service.append_new(fetched.into_iter().map(to_new));
    ctx.persist()?;

    append_notices(&outcome, flags);
    output(&outcome, flags.format)
}

fn to_new(item: CatalogTechnology) -> NewTechnology {
    NewTechnology {
        source_id: Some(TechnologyId::Number(item.id)),
        title: item.title,
        description: item.description,
    }
}
