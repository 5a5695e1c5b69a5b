mod add;
mod list;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DeviceCommands;
use crate::context::AppContext;

/// Handle `sentinel device`.
pub async fn handle(action: &DeviceCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        DeviceCommands::Add(args) => add::run(args, ctx, flags).await,
        DeviceCommands::List => list::run(ctx, flags).await,
        DeviceCommands::Remove { id } => remove::run(*id, ctx, flags).await,
    }
}
