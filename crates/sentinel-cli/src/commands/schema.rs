use schemars::schema_for;
use sentinel_core::entities::{Device, InspectionDetail, InspectionTask};
use sentinel_core::outcome::AnalysisResult;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};

/// Handle `sentinel schema`.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Device => schema_for!(Device),
        SchemaType::Task => schema_for!(InspectionTask),
        SchemaType::Detail => schema_for!(InspectionDetail),
        SchemaType::Analysis => schema_for!(AnalysisResult),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
