use sentinel_core::responses::DeviceListing;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let devices = ctx.service.list_devices().await?;
    let listings: Vec<DeviceListing> = devices.iter().map(DeviceListing::from).collect();
    output(&listings, flags.format)
}
