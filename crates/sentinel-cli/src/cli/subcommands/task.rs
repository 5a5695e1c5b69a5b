use std::path::PathBuf;

use clap::Subcommand;

/// Inspection history commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks, newest first (honors `--limit`).
    List,
    /// Get a task and all of its detail rows.
    Get { id: i64 },
    /// Render a task as a Markdown report.
    Report {
        id: i64,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
