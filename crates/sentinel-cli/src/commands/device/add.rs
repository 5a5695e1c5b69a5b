use anyhow::Context;
use sentinel_core::entities::NewDevice;
use sentinel_core::responses::DeviceListing;
use sentinel_ssh::PlatformProfile;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AddDeviceArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &AddDeviceArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let platform = args
        .platform
        .clone()
        .unwrap_or_else(|| ctx.config.ssh.platform.clone());
    PlatformProfile::for_platform(&platform)?;

    let new = NewDevice {
        port: args.port.unwrap_or(ctx.config.ssh.default_port),
        platform,
        ..NewDevice::new(&args.hostname, &args.ip, &args.username, &args.password)
    };
    let device = ctx
        .service
        .add_device(&new)
        .await
        .with_context(|| format!("failed to add device {}", args.hostname))?;

    output(&DeviceListing::from(&device), flags.format)
}
