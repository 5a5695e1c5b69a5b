use std::path::Path;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::report::render_markdown;
use crate::ui;

pub async fn run(
    id: i64,
    output: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (task, details) = ctx.service.load_task(id).await?;
    let markdown = render_markdown(&task, &details);

    let Some(path) = output else {
        print!("{markdown}");
        return Ok(());
    };
    tokio::fs::write(path, markdown)
        .await
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    ui::notice(flags, &format!("report for task {id} written to {}", path.display()));
    Ok(())
}
