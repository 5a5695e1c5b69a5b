//! CLI response types returned as JSON by `sentinel` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Device, InspectionDetail, InspectionTask};
use crate::enums::AnalysisStatus;

/// Inventory entry as shown by `sentinel device list` (credentials omitted).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeviceListing {
    pub id: i64,
    pub hostname: String,
    pub ip: String,
    pub username: String,
    pub port: u16,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Device> for DeviceListing {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id,
            hostname: device.hostname.clone(),
            ip: device.ip.clone(),
            username: device.username.clone(),
            port: device.port,
            platform: device.platform.clone(),
            created_at: device.created_at,
        }
    }
}

/// Response from `sentinel models`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModelListResponse {
    pub online: bool,
    pub models: Vec<String>,
}

/// Response from `sentinel inspect`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InspectionRunResponse {
    pub task_id: i64,
    pub model: String,
    pub total_devices: u32,
    pub succeeded: u32,
    pub failed: u32,
    pub analysis_status: AnalysisStatus,
    pub analysis_summary: String,
}

/// Response from `sentinel task get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TaskDetailResponse {
    pub task: InspectionTask,
    pub details: Vec<InspectionDetail>,
}
