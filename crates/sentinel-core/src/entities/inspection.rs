use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::REPORT_DEVICE_NAME;
use crate::enums::DetailStatus;
use crate::outcome::AnalysisResult;

/// One batch run across the inventory.
///
/// `risk_count` and `avg_score` are display placeholders: batch mode never
/// computes a per-device score (see `crate::constants`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InspectionTask {
    pub id: i64,
    pub task_time: DateTime<Utc>,
    pub total_devices: u32,
    pub risk_count: u32,
    pub avg_score: u32,
    pub model_used: String,
}

/// One persisted row of a batch run: a device outcome or the reserved
/// analysis report row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InspectionDetail {
    pub id: i64,
    pub task_id: i64,
    pub device_name: String,
    pub device_ip: String,
    pub raw_log: String,
    /// Serialized `AnalysisResult` on the report row, `{}` on device rows.
    pub ai_json: serde_json::Value,
    pub score: u32,
    pub status: DetailStatus,
}

impl InspectionDetail {
    /// Whether this is the reserved analysis report row.
    #[must_use]
    pub fn is_report(&self) -> bool {
        self.device_name == REPORT_DEVICE_NAME
    }

    /// Decode the analysis result stored on the report row.
    ///
    /// Returns `None` for device rows or if the stored JSON does not decode.
    #[must_use]
    pub fn analysis(&self) -> Option<AnalysisResult> {
        if !self.is_report() {
            return None;
        }
        serde_json::from_value(self.ai_json.clone()).ok()
    }
}
