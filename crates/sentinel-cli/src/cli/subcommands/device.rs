use clap::{Args, Subcommand};

/// Device inventory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DeviceCommands {
    /// Add a device.
    Add(AddDeviceArgs),
    /// List devices (credentials omitted).
    List,
    /// Remove a device by ID.
    Remove { id: i64 },
}

#[derive(Clone, Debug, Args)]
pub struct AddDeviceArgs {
    #[arg(long)]
    pub hostname: String,
    #[arg(long)]
    pub ip: String,
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
    /// SSH port (defaults to `ssh.default_port` from config).
    #[arg(long)]
    pub port: Option<u16>,
    /// Platform identifier (defaults to `ssh.platform` from config).
    #[arg(long)]
    pub platform: Option<String>,
}
