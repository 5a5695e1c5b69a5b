//! Markdown rendering of a persisted inspection task.

use std::fmt::Write as _;

use sentinel_core::entities::{InspectionDetail, InspectionTask};
use sentinel_core::enums::{AnalysisStatus, DetailStatus, DeviceStatus};

/// Render a downloadable report: header, AI analysis, then every device's
/// raw log.
#[must_use]
pub fn render_markdown(task: &InspectionTask, details: &[InspectionDetail]) -> String {
    let mut out = String::from("# NetSentinel Inspection Report\n\n");
    let _ = writeln!(
        out,
        "**Inspection time**: {} | **AI model**: {}",
        task.task_time.format("%Y-%m-%d %H:%M:%S UTC"),
        task.model_used
    );
    // Batch mode never scores devices.
    let _ = writeln!(
        out,
        "**Total devices**: {} | **Devices at risk**: N/A | **Average health score**: N/A\n\n---\n",
        task.total_devices
    );

    if let Some(report_row) = details.iter().find(|d| d.is_report()) {
        out.push_str("## AI Analysis\n\n");
        out.push_str(&analysis_section(report_row));
        out.push_str("\n\n---\n\n");
    }

    out.push_str("# Raw Inspection Logs\n\n");
    for detail in details.iter().filter(|d| !d.is_report()) {
        let marker = if detail.status == DetailStatus::Device(DeviceStatus::Success) {
            "✅"
        } else {
            "❌"
        };
        let _ = writeln!(
            out,
            "## {marker} {} ({}) - Status: {}",
            detail.device_name,
            detail.device_ip,
            detail.status.as_str()
        );
        let _ = writeln!(out, "### Raw log\n```text\n{}\n```\n", detail.raw_log);
    }
    out
}

fn analysis_section(report_row: &InspectionDetail) -> String {
    match report_row.analysis() {
        Some(analysis) => match (analysis.status, analysis.report_text) {
            (AnalysisStatus::ReportGenerated, Some(text)) => text,
            (status, _) => format!("**Status**: {status}\n\n{}", analysis.summary),
        },
        None => "Report data could not be decoded.".to_string(),
    }
}
