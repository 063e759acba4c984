mod catalog;
mod plan;
mod roadmap;

pub use catalog::CatalogCommands;
pub use plan::PlanCommands;
pub use roadmap::RoadmapCommands;
