//! Entity structs for all techtrack domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field names follow the export file format,
//! so they are camelCase on the wire where they span several words.

mod export;
mod plan;
mod report;
mod technology;

pub use export::ExportDocument;
pub use plan::StudyPlan;
pub use report::{InvalidEntry, ValidationReport};
pub use technology::Technology;
