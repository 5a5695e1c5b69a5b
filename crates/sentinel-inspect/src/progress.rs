//! Progress reporting hooks.

use std::fmt;

use sentinel_core::outcome::DeviceOutcome;

/// Pipeline stages of one batch run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionStage {
    Init,
    Collecting,
    AnalysisSkipped,
    Analyzing,
    Persisting,
    Done,
}

impl fmt::Display for InspectionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Init => "init",
            Self::Collecting => "collecting",
            Self::AnalysisSkipped => "analysis_skipped",
            Self::Analyzing => "analyzing",
            Self::Persisting => "persisting",
            Self::Done => "done",
        })
    }
}

/// Receives progress side effects. Never influences control flow.
pub trait ProgressSink: Send + Sync {
    /// Called once per device, as its outcome is aggregated.
    fn device_finished(&self, completed: usize, total: usize, outcome: &DeviceOutcome);

    fn stage_changed(&self, _stage: InspectionStage) {}
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn device_finished(&self, _completed: usize, _total: usize, _outcome: &DeviceOutcome) {}
}
