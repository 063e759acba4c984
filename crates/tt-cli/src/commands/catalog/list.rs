use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.catalog()?;
    let limit = flags.limit.unwrap_or_else(|| client.page_size());

    let spinner = Progress::spinner("Loading catalog...");
    let items = match client.fetch_page(limit).await {
        Ok(items) => {
            spinner.finish_clear();
            items
        }
        Err(error) => {
            spinner.finish_err("catalog unavailable");
            return Err(error).context("failed to load the catalog");
        }
    };
    output(&items, flags.format)
}
