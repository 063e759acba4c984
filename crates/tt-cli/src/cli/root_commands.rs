use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use tt_core::ids::TechnologyId;

use crate::cli::subcommands::{CatalogCommands, PlanCommands, RoadmapCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add a technology to the working collection.
    Add(AddArgs),
    /// List technologies, optionally filtered.
    List(ListArgs),
    /// Show one technology.
    Get(IdArgs),
    /// Set the status of a technology.
    Status(StatusArgs),
    /// Advance a technology to its next status.
    Cycle(IdArgs),
    /// Replace the notes of a technology.
    Notes(NotesArgs),
    /// Set or clear the deadline of a technology.
    Deadline(DeadlineArgs),
    /// Apply one status to a selection of technologies.
    Bulk(BulkArgs),
    /// Apply one status to every technology.
    MarkAll(MarkAllArgs),
    /// Count technologies per status.
    Stats,
    /// Replace the collection with the contents of an export file.
    Import(ImportArgs),
    /// Write the collection to a dated export file.
    Export(ExportArgs),
    /// Copy the collection into the backup slot.
    Save,
    /// Restore the collection from the backup slot.
    Load,
    /// Restore the built-in starter collection.
    Reset,
    /// Browse the demo catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Import a learning roadmap from the demo API.
    Roadmap {
        #[command(subcommand)]
        action: RoadmapCommands,
    },
    /// Study plans.
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// Print the JSON Schema of a document type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive match on title, description, or status.
    #[arg(long)]
    pub search: Option<String>,
    /// Only technologies with this status.
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    pub id: TechnologyId,
}

#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    pub id: TechnologyId,
    /// not-started, in-progress, or completed
    pub status: String,
}

#[derive(Clone, Debug, Args)]
pub struct NotesArgs {
    pub id: TechnologyId,
    pub text: String,
}

#[derive(Clone, Debug, Args)]
pub struct DeadlineArgs {
    pub id: TechnologyId,
    /// Deadline as YYYY-MM-DD; must be after today.
    #[arg(required_unless_present = "clear")]
    pub date: Option<NaiveDate>,
    /// Remove the deadline.
    #[arg(long, conflicts_with = "date")]
    pub clear: bool,
}

#[derive(Clone, Debug, Args)]
pub struct BulkArgs {
    /// Status to apply to the selection.
    #[arg(long)]
    pub status: String,
    /// Select a technology by id (repeatable).
    #[arg(long)]
    pub id: Vec<TechnologyId>,
    /// Filter that scopes --all-visible.
    #[arg(long, requires = "all_visible")]
    pub search: Option<String>,
    /// Also select every technology matching --search.
    #[arg(long)]
    pub all_visible: bool,
}

#[derive(Clone, Debug, Args)]
pub struct MarkAllArgs {
    pub status: String,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Export file or bare JSON array of technologies.
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Target directory (defaults to the current directory).
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document type; `list` prints the available names.
    pub name: String,
}
