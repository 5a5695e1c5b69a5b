//! Status enums for inspection records.
//!
//! All enums use `snake_case` serialization. The string forms double as the
//! values stored in the `inspection_details.status` column, and the device and
//! analysis vocabularies are kept disjoint so a stored status identifies its
//! row kind on its own.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DeviceStatus
// ---------------------------------------------------------------------------

/// Status of a per-device detail row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Success,
    ConnectionError,
}

impl DeviceStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ConnectionError => "connection_error",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnalysisStatus
// ---------------------------------------------------------------------------

/// Outcome class of the single analysis call of a batch run.
///
/// ```text
/// transcript blank ─────────────────────────────► skipped
/// transcript present ─► request ─► 2xx, text ───► report_generated
///                                ─► 2xx, blank ─► empty_response
///                                ─► non-2xx ────► api_error
///                                ─► no route ───► conn_error
///                                ─► too slow ───► timeout
///                                ─► other ──────► exception
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    ReportGenerated,
    EmptyResponse,
    ApiError,
    #[serde(rename = "conn_error")]
    ConnectionError,
    Timeout,
    Exception,
    /// Synthesized locally when no device produced a transcript.
    Skipped,
}

impl AnalysisStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReportGenerated => "report_generated",
            Self::EmptyResponse => "empty_response",
            Self::ApiError => "api_error",
            Self::ConnectionError => "conn_error",
            Self::Timeout => "timeout",
            Self::Exception => "exception",
            Self::Skipped => "skipped",
        }
    }

    /// Whether this status carries a usable report.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::ReportGenerated)
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DetailStatus
// ---------------------------------------------------------------------------

/// Status stored on an `inspection_details` row: a device status for device
/// rows, the analysis status for the reserved report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DetailStatus {
    Device(DeviceStatus),
    Analysis(AnalysisStatus),
}

impl DetailStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Device(status) => status.as_str(),
            Self::Analysis(status) => status.as_str(),
        }
    }
}

impl fmt::Display for DetailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DeviceStatus> for DetailStatus {
    fn from(status: DeviceStatus) -> Self {
        Self::Device(status)
    }
}

impl From<AnalysisStatus> for DetailStatus {
    fn from(status: AnalysisStatus) -> Self {
        Self::Analysis(status)
    }
}
