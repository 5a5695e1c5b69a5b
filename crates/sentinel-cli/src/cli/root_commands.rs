use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{DeviceCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Device inventory.
    Device {
        #[command(subcommand)]
        action: DeviceCommands,
    },
    /// List analysis models offered by the Ollama server.
    Models,
    /// Run a batch inspection across the whole inventory.
    Inspect(InspectArgs),
    /// Inspection history.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Dump JSON schema for a persisted type.
    Schema(SchemaArgs),
}

/// Arguments for `sentinel inspect`.
#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// Model to analyze with (defaults to the first listed model).
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Device,
    Task,
    Detail,
    Analysis,
}

/// Arguments for `sentinel schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
