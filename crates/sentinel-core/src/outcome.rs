//! Ephemeral per-run outcome types.
//!
//! `CollectionOutcome` is produced once per device by the session layer and
//! `AnalysisResult` once per run by the analysis client (or synthesized by the
//! orchestrator when there is nothing to analyze). Neither is mutated after
//! creation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{FAILED_SCORE, REPORT_SCORE_PLACEHOLDER};
use crate::entities::Device;
use crate::enums::{AnalysisStatus, DeviceStatus};

/// Result of running the command battery against one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CollectionOutcome {
    Success { transcript: String },
    Failure { reason: String },
}

impl CollectionOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Transcript on success, `None` on failure.
    #[must_use]
    pub fn transcript(&self) -> Option<&str> {
        match self {
            Self::Success { transcript } => Some(transcript),
            Self::Failure { .. } => None,
        }
    }

    /// Text stored as the device row's raw log: transcript or failure reason.
    #[must_use]
    pub fn raw_log(&self) -> &str {
        match self {
            Self::Success { transcript } => transcript,
            Self::Failure { reason } => reason,
        }
    }

    #[must_use]
    pub const fn device_status(&self) -> DeviceStatus {
        match self {
            Self::Success { .. } => DeviceStatus::Success,
            Self::Failure { .. } => DeviceStatus::ConnectionError,
        }
    }
}

/// A device paired with the outcome of its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceOutcome {
    pub device: Device,
    pub outcome: CollectionOutcome,
}

impl DeviceOutcome {
    #[must_use]
    pub const fn new(device: Device, outcome: CollectionOutcome) -> Self {
        Self { device, outcome }
    }
}

/// Classified outcome of the single analysis call of a batch run.
///
/// Only `ReportGenerated` carries report text; constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    pub status: AnalysisStatus,
    pub summary: String,
    pub report_text: Option<String>,
}

impl AnalysisResult {
    #[must_use]
    pub fn report_generated(report: impl Into<String>) -> Self {
        Self {
            status: AnalysisStatus::ReportGenerated,
            summary: "AI analysis report generated (Markdown)".into(),
            report_text: Some(report.into()),
        }
    }

    #[must_use]
    pub fn empty_response() -> Self {
        Self::failed(AnalysisStatus::EmptyResponse, "model returned an empty response")
    }

    #[must_use]
    pub fn api_error(status: u16, body: &str) -> Self {
        Self::failed(
            AnalysisStatus::ApiError,
            format!("inference API error: {status} - {body}"),
        )
    }

    #[must_use]
    pub fn connection_error(detail: &str) -> Self {
        Self::failed(
            AnalysisStatus::ConnectionError,
            format!("cannot reach inference service: {detail}"),
        )
    }

    #[must_use]
    pub fn timeout(limit_secs: u64) -> Self {
        Self::failed(
            AnalysisStatus::Timeout,
            format!("model inference timed out (> {limit_secs}s)"),
        )
    }

    #[must_use]
    pub fn exception(detail: &str) -> Self {
        Self::failed(
            AnalysisStatus::Exception,
            format!("unexpected analysis failure: {detail}"),
        )
    }

    /// Local result used when no device produced a transcript.
    #[must_use]
    pub fn skipped() -> Self {
        Self::failed(
            AnalysisStatus::Skipped,
            "all devices failed to connect; no report generated",
        )
    }

    fn failed(status: AnalysisStatus, summary: impl Into<String>) -> Self {
        Self {
            status,
            summary: summary.into(),
            report_text: None,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Placeholder score persisted on the report row and as the task's
    /// `avg_score`. Distinguishes "report" from "no report" only.
    #[must_use]
    pub const fn placeholder_score(&self) -> u32 {
        if self.status.is_success() {
            REPORT_SCORE_PLACEHOLDER
        } else {
            FAILED_SCORE
        }
    }
}
