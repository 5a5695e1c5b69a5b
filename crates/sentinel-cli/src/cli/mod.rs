use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sentinel` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sentinel",
    version,
    about = "NetSentinel - batch AI health inspection for network switches"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above the project and user config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{DeviceCommands, TaskCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "sentinel", "--format", "json", "--limit", "10", "--verbose", "models",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Models));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sentinel", "task", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Task {
                action: TaskCommands::List
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sentinel", "--format", "xml", "models"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn device_add_defaults_port_and_platform() {
        let cli = Cli::try_parse_from([
            "sentinel", "device", "add", "--hostname", "SW1", "--ip", "10.0.0.1", "--username",
            "admin", "--password", "secret",
        ])
        .expect("cli should parse");

        let Commands::Device {
            action: DeviceCommands::Add(args),
        } = cli.command
        else {
            panic!("expected device add");
        };
        assert_eq!(args.port, None);
        assert_eq!(args.platform, None);
    }

    #[test]
    fn inspect_model_is_optional() {
        let cli = Cli::try_parse_from(["sentinel", "inspect"]).expect("cli should parse");
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert!(args.model.is_none());

        let cli = Cli::try_parse_from(["sentinel", "inspect", "--model", "qwen2.5:14b"])
            .expect("cli should parse");
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.model.as_deref(), Some("qwen2.5:14b"));
    }

    #[test]
    fn task_report_takes_output_path() {
        let cli = Cli::try_parse_from(["sentinel", "task", "report", "7", "--output", "r.md"])
            .expect("cli should parse");
        let Commands::Task {
            action: TaskCommands::Report { id, output },
        } = cli.command
        else {
            panic!("expected task report");
        };
        assert_eq!(id, 7);
        assert_eq!(output.as_deref(), Some(std::path::Path::new("r.md")));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["sentinel", "--config", "/tmp/ns.toml", "models"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(
            flags.config.as_deref(),
            Some(std::path::Path::new("/tmp/ns.toml"))
        );
    }
}
