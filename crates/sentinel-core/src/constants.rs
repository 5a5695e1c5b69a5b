//! Reserved names and placeholder values.
//!
//! Batch mode produces one holistic report for the whole fleet, so no real
//! per-device score or risk count is ever computed. The numeric constants below
//! fill the persisted `score`, `avg_score`, and `risk_count` columns and carry
//! no meaning beyond "report generated" versus "not generated".

/// Device name of the reserved detail row holding the analysis report.
///
/// Inventory additions reject this hostname, so it never collides with a
/// real device row.
pub const REPORT_DEVICE_NAME: &str = "AI_FULL_REPORT";

/// Device IP recorded on the reserved report row.
pub const REPORT_DEVICE_IP: &str = "0.0.0.0";

/// Score recorded when the analysis produced a report. Not a health score.
pub const REPORT_SCORE_PLACEHOLDER: u32 = 100;

/// Score recorded for device rows and for analysis runs without a report.
pub const FAILED_SCORE: u32 = 0;

/// Risk count stored on every task: not computed in batch mode.
pub const RISK_COUNT_NOT_COMPUTED: u32 = 0;

/// `ai_json` value stored on per-device rows.
pub const EMPTY_AI_JSON: &str = "{}";

/// Default SSH port for new inventory entries.
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Default remote platform identifier for new inventory entries.
pub const DEFAULT_PLATFORM: &str = "huawei";
