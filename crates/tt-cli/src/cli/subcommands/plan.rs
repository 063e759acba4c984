use chrono::NaiveDate;
use clap::Subcommand;
use tt_core::ids::TechnologyId;

/// Study plan commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// Create a study plan. Missing fields are reported together.
    Create {
        #[arg(long)]
        technology: Option<TechnologyId>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        deadline: Option<NaiveDate>,
        /// Weekly hours, 1 to 60.
        #[arg(long)]
        hours: Option<u32>,
        #[arg(long)]
        goal: Option<String>,
    },
    /// List plans by deadline.
    List,
    /// Flip a plan between scheduled and completed.
    Toggle { id: String },
    /// Delete a plan.
    Delete { id: String },
}
