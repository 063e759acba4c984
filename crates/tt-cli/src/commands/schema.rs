use std::collections::BTreeMap;

use anyhow::bail;
use schemars::schema_for;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty))?);
    };
}

/// Schemas of every document techtrack reads or writes, by name.
fn registry() -> anyhow::Result<BTreeMap<&'static str, Value>> {
    let mut schemas = BTreeMap::new();

    register!(schemas, "technology", tt_core::entities::Technology);
    register!(schemas, "export_document", tt_core::entities::ExportDocument);
    register!(schemas, "validation_report", tt_core::entities::ValidationReport);
    register!(schemas, "study_plan", tt_core::entities::StudyPlan);

    register!(schemas, "import_summary", tt_core::responses::ImportSummary);
    register!(schemas, "backup_load", tt_core::responses::BackupLoadResponse);
    register!(schemas, "bulk_update", tt_core::responses::BulkUpdateResponse);
    register!(schemas, "stats", tt_core::responses::StatsResponse);
    register!(schemas, "export", tt_core::responses::ExportResponse);

    Ok(schemas)
}

/// Handle `techtrack schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut schemas = registry()?;
    if args.name == "list" {
        return output(&schemas.keys().collect::<Vec<_>>(), flags.format);
    }

    let Some(schema) = schemas.remove(args.name.as_str()) else {
        bail!(
            "unknown schema '{}'; available: {}",
            args.name,
            schemas.keys().copied().collect::<Vec<_>>().join(", ")
        );
    };
    // Schemas are documents, not tables.
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
