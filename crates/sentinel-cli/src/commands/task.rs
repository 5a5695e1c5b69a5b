mod get;
mod list;
mod report;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `sentinel task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::List => list::run(ctx, flags).await,
        TaskCommands::Get { id } => get::run(*id, ctx, flags).await,
        TaskCommands::Report { id, output } => report::run(*id, output.as_deref(), ctx, flags).await,
    }
}
