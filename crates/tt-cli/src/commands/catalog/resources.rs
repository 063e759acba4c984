use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.catalog()?;
    let spinner = Progress::spinner(&format!("Loading resources for {id}..."));
    let links = client
        .load_resources(id)
        .await
        .inspect_err(|_| spinner.finish_err("resources unavailable"))
        .with_context(|| format!("failed to load resources for catalog entry {id}"))?;
    spinner.finish_clear();
    output(&links, flags.format)
}
