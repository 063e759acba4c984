use std::path::Path;

use anyhow::Context;
use tt_config::TrackConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TrackConfig> {
    load_dotenv(flags)?;

    let mut config = TrackConfig::load().context("failed to load techtrack configuration")?;
    if let Some(dir) = &flags.data_dir {
        config.storage.data_dir = dir.clone();
    }
    tracing::debug!(
        data_dir = %config.storage.resolved_data_dir().display(),
        catalog = %config.catalog.base_url,
        "configuration loaded"
    );
    Ok(config)
}

/// Read `.env` from the data directory override if it has one, else from the
/// current directory. A missing file is fine; a malformed one is not.
fn load_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    let candidate = match &flags.data_dir {
        Some(dir) => Path::new(dir).join(".env"),
        None => std::env::current_dir()
            .context("failed to determine current directory")?
            .join(".env"),
    };

    if candidate.exists() {
        dotenv_from(&candidate)?;
    }
    Ok(())
}

fn dotenv_from(path: &Path) -> anyhow::Result<()> {
    dotenvy::from_path(path)
        .with_context(|| format!("failed to load dotenv file at {}", path.display()))
}
