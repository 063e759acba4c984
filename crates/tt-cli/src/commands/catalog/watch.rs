//! Interactive catalog search: each stdin line replaces the pending query,
//! and only the newest query's results are printed.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tt_catalog::{LatestRequest, RequestState, SearchOutcome};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = Arc::new(ctx.catalog()?);
    let mut register = LatestRequest::new(client, ctx.config.search.debounce());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    ui::notice(
        flags,
        "Type a query and press enter. An empty line clears, Ctrl-D quits.",
    );

    loop {
        let pending = matches!(register.state(), RequestState::Pending { .. });
        if !input_open && !pending {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("failed to read stdin")? {
                    Some(query) => {
                        register.issue(&query);
                        if register.state() == &RequestState::Idle {
                            ui::notice(flags, "(cleared)");
                        }
                    }
                    None => input_open = false,
                }
            }
            Some(outcome) = register.next_outcome(), if pending => {
                print_outcome(outcome, flags)?;
            }
            else => break,
        }
    }
    Ok(())
}

fn print_outcome(outcome: SearchOutcome, flags: &GlobalFlags) -> anyhow::Result<()> {
    match outcome.result {
        Ok(items) => {
            ui::notice(
                flags,
                &format!("{} result(s) for '{}':", items.len(), outcome.query),
            );
            output(&items, flags.format)
        }
        Err(error) => {
            tracing::warn!(query = %outcome.query, %error, "catalog search failed");
            ui::notice(flags, &format!("search for '{}' failed: {error}", outcome.query));
            Ok(())
        }
    }
}
