//! The two-phase batch pipeline: collect, then analyze, then persist.

use std::sync::Arc;

use sentinel_analysis::Analyzer;
use sentinel_core::battery::CommandBattery;
use sentinel_core::entities::Device;
use sentinel_core::outcome::AnalysisResult;
use sentinel_core::responses::InspectionRunResponse;
use sentinel_db::service::SentinelService;
use sentinel_ssh::SessionConnector;

use crate::coordinator::{CollectionCoordinator, CollectionReport};
use crate::error::InspectError;
use crate::progress::{InspectionStage, ProgressSink};

/// Drives one batch run from inventory to a persisted task.
pub struct InspectionOrchestrator<'a, C, A> {
    coordinator: CollectionCoordinator<C>,
    analyzer: A,
    store: &'a SentinelService,
}

impl<'a, C: SessionConnector, A: Analyzer> InspectionOrchestrator<'a, C, A> {
    pub const fn new(
        coordinator: CollectionCoordinator<C>,
        analyzer: A,
        store: &'a SentinelService,
    ) -> Self {
        Self {
            coordinator,
            analyzer,
            store,
        }
    }

    /// Run the whole pipeline once.
    ///
    /// A run that gets past `Init` always produces a task id, even when every
    /// device failed and analysis was skipped.
    ///
    /// # Errors
    ///
    /// `InspectError::NoDevices` / `NoModel` before any work starts, or
    /// `InspectError::Persistence` if the batch cannot be written.
    pub async fn run(
        &self,
        devices: Vec<Device>,
        battery: CommandBattery,
        model: &str,
        progress: &dyn ProgressSink,
    ) -> Result<InspectionRunResponse, InspectError> {
        enter(InspectionStage::Init, progress);
        if devices.is_empty() {
            return Err(InspectError::NoDevices);
        }
        let model = model.trim();
        if model.is_empty() {
            return Err(InspectError::NoModel);
        }

        enter(InspectionStage::Collecting, progress);
        tracing::info!(
            devices = devices.len(),
            commands = battery.len(),
            workers = self.coordinator.workers(),
            "collecting"
        );
        let devices: Arc<[Device]> = devices.into();
        let report = self
            .coordinator
            .collect_all(devices, Arc::new(battery), progress)
            .await;

        let analysis = self.analyze(&report, model, progress).await;

        enter(InspectionStage::Persisting, progress);
        let task_id = self
            .store
            .save_batch(&report.outcomes, &analysis, model)
            .await?;

        enter(InspectionStage::Done, progress);
        Ok(summarize(task_id, model, &report, analysis))
    }

    async fn analyze(
        &self,
        report: &CollectionReport,
        model: &str,
        progress: &dyn ProgressSink,
    ) -> AnalysisResult {
        if !report.has_transcript() {
            enter(InspectionStage::AnalysisSkipped, progress);
            return AnalysisResult::skipped();
        }
        enter(InspectionStage::Analyzing, progress);
        self.analyzer
            .analyze(&report.combined_transcript, model)
            .await
    }
}

fn enter(stage: InspectionStage, progress: &dyn ProgressSink) {
    tracing::info!(%stage, "inspection stage");
    progress.stage_changed(stage);
}

fn summarize(
    task_id: i64,
    model: &str,
    report: &CollectionReport,
    analysis: AnalysisResult,
) -> InspectionRunResponse {
    let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
    InspectionRunResponse {
        task_id,
        model: model.to_string(),
        total_devices: count(report.outcomes.len()),
        succeeded: count(report.succeeded()),
        failed: count(report.failed()),
        analysis_status: analysis.status,
        analysis_summary: analysis.summary,
    }
}
