use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

pub async fn run(query: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        ui::notice(flags, "Empty query; nothing to search.");
        return output(&Vec::<tt_catalog::CatalogTechnology>::new(), flags.format);
    }

    let client = ctx.catalog()?;
    let limit = flags.limit.unwrap_or_else(|| client.page_size());

    let spinner = Progress::spinner(&format!("Searching catalog for '{query}'..."));
    let items = match client.search(query, limit).await {
        Ok(items) => {
            spinner.finish_clear();
            items
        }
        Err(error) => {
            spinner.finish_err("search failed");
            return Err(error).with_context(|| format!("catalog search for '{query}' failed"));
        }
    };
    output(&items, flags.format)
}
