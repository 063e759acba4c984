use clap::Subcommand;

/// Demo catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// Show the first page of the catalog.
    List,
    /// Search the catalog by title.
    Search { query: String },
    /// Resource links for a catalog entry.
    Resources { id: i64 },
    /// Add catalog entries to the collection.
    Add {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Interactive search: one query per stdin line, results as they settle.
    Watch,
}
