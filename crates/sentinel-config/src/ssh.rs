//! SSH session configuration shared by every device in a run.

use serde::{Deserialize, Serialize};

fn default_platform() -> String {
    "huawei".to_string()
}

/// Per-device connect and command budget, in seconds.
const fn default_connect_timeout_secs() -> u64 {
    30
}

/// Multiplier applied to inter-command delays and read timeouts.
const fn default_delay_factor() -> u32 {
    2
}

const fn default_port() -> u16 {
    22
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SshConfig {
    /// Platform used for inventory entries added without an explicit one.
    #[serde(default = "default_platform")]
    pub platform: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_delay_factor")]
    pub delay_factor: u32,

    #[serde(default = "default_port")]
    pub default_port: u16,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            connect_timeout_secs: default_connect_timeout_secs(),
            delay_factor: default_delay_factor(),
            default_port: default_port(),
        }
    }
}
