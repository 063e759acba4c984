use clap::Subcommand;

/// Roadmap commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RoadmapCommands {
    /// Fetch the roadmap and append its technologies.
    Import,
}
