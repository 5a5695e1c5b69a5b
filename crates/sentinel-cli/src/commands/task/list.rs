use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

const DEFAULT_LIMIT: u32 = 20;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tasks = ctx
        .service
        .list_tasks(flags.limit.unwrap_or(DEFAULT_LIMIT))
        .await?;
    output(&tasks, flags.format)
}
