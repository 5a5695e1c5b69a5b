use indicatif::{ProgressBar, ProgressStyle};
use sentinel_core::outcome::DeviceOutcome;
use sentinel_inspect::{InspectionStage, ProgressSink};

use crate::ui;

/// Terminal progress for one batch run: a device counter during collection,
/// then a spinner-style message for analysis and saving.
pub struct RunProgress {
    bar: Option<ProgressBar>,
}

fn bar_template() -> &'static str {
    match ui::prefs().term_width {
        Some(cols) if cols >= 110 => "{bar:40.cyan/blue} {pos}/{len} {msg}",
        Some(cols) if cols >= 80 => "{wide_bar:.cyan/blue} {pos}/{len} {msg}",
        _ => "{wide_bar:.cyan/blue} {percent}% {msg}",
    }
}

impl RunProgress {
    #[must_use]
    pub fn new(total_devices: usize) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }
        let bar = ProgressBar::new(u64::try_from(total_devices).unwrap_or(u64::MAX));
        bar.set_style(
            ProgressStyle::with_template(bar_template())
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(format!("collecting from {total_devices} devices"));
        Self { bar: Some(bar) }
    }

    fn set_message(&self, message: String) {
        if let Some(bar) = &self.bar {
            bar.set_message(message);
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

impl ProgressSink for RunProgress {
    fn device_finished(&self, completed: usize, total: usize, outcome: &DeviceOutcome) {
        let marker = if outcome.outcome.is_success() { "ok" } else { "failed" };
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
        self.set_message(format!(
            "[{completed}/{total}] {marker}: {}",
            outcome.device.label()
        ));
    }

    fn stage_changed(&self, stage: InspectionStage) {
        match stage {
            InspectionStage::Analyzing => {
                if let Some(bar) = &self.bar {
                    bar.enable_steady_tick(std::time::Duration::from_millis(200));
                }
                self.set_message("analyzing combined transcript".to_string());
            }
            InspectionStage::AnalysisSkipped => {
                self.set_message("no device reachable; skipping analysis".to_string());
            }
            InspectionStage::Persisting => self.set_message("saving results".to_string()),
            InspectionStage::Done => {
                if let Some(bar) = &self.bar {
                    bar.finish_and_clear();
                }
            }
            InspectionStage::Init | InspectionStage::Collecting => {}
        }
    }
}
