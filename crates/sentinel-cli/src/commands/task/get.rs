use sentinel_core::entities::InspectionDetail;
use sentinel_core::responses::TaskDetailResponse;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render};

/// Row shape for `--format table`; logs and AI JSON are too wide for a cell.
#[derive(Serialize)]
struct DetailRow<'a> {
    id: i64,
    device_name: &'a str,
    device_ip: &'a str,
    status: &'static str,
    score: u32,
}

impl<'a> From<&'a InspectionDetail> for DetailRow<'a> {
    fn from(detail: &'a InspectionDetail) -> Self {
        Self {
            id: detail.id,
            device_name: &detail.device_name,
            device_ip: &detail.device_ip,
            status: detail.status.as_str(),
            score: detail.score,
        }
    }
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (task, details) = ctx.service.load_task(id).await?;

    if flags.format == OutputFormat::Table {
        let rows: Vec<DetailRow<'_>> = details.iter().map(DetailRow::from).collect();
        println!("{}\n", render(&task, OutputFormat::Table)?);
        println!("{}", render(&rows, OutputFormat::Table)?);
        return Ok(());
    }
    output(&TaskDetailResponse { task, details }, flags.format)
}
