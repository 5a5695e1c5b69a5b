//! Batch inspection settings.

use serde::{Deserialize, Serialize};

/// Concurrent device sessions per run.
const fn default_workers() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InspectionConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Diagnostic commands, in order. Empty selects the built-in Huawei battery.
    #[serde(default)]
    pub commands: Vec<String>,
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            commands: Vec::new(),
        }
    }
}
