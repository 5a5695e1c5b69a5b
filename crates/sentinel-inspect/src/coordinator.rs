//! Bounded-concurrency collection across the inventory.

use std::collections::HashMap;
use std::sync::Arc;

use sentinel_core::battery::CommandBattery;
use sentinel_core::entities::Device;
use sentinel_core::outcome::{CollectionOutcome, DeviceOutcome};
use sentinel_ssh::{FAILURE_PREFIX, SessionConnector, SessionSettings, collect};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::progress::ProgressSink;

/// Everything the collection phase produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    /// One entry per input device, in arrival order.
    pub outcomes: Vec<DeviceOutcome>,
    /// Successful transcripts, each behind a device header. Empty when no
    /// device succeeded.
    pub combined_transcript: String,
}

impl CollectionReport {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether there is anything worth sending for analysis.
    #[must_use]
    pub fn has_transcript(&self) -> bool {
        !self.combined_transcript.trim().is_empty()
    }
}

/// Section appended to the combined transcript for one successful device.
#[must_use]
pub fn combined_section(device: &Device, transcript: &str) -> String {
    format!(
        "\n\n--- Device: {} ({}) ---\n\n{transcript}",
        device.hostname, device.ip
    )
}

/// Runs device sessions on a fixed-size worker pool.
pub struct CollectionCoordinator<C> {
    connector: Arc<C>,
    settings: SessionSettings,
    workers: usize,
}

impl<C: SessionConnector> CollectionCoordinator<C> {
    /// `workers` is clamped to at least one.
    pub fn new(connector: C, settings: SessionSettings, workers: usize) -> Self {
        Self {
            connector: Arc::new(connector),
            settings,
            workers: workers.max(1),
        }
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Collect from every device, at most `workers` sessions at a time.
    ///
    /// Always yields exactly one outcome per device; a worker that dies is
    /// recorded as a failure for its device.
    pub async fn collect_all(
        &self,
        devices: Arc<[Device]>,
        battery: Arc<CommandBattery>,
        progress: &dyn ProgressSink,
    ) -> CollectionReport {
        let total = devices.len();
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut set = JoinSet::new();
        let mut pending = HashMap::with_capacity(total);

        for idx in 0..total {
            let connector = Arc::clone(&self.connector);
            let devices = Arc::clone(&devices);
            let battery = Arc::clone(&battery);
            let semaphore = Arc::clone(&semaphore);
            let settings = self.settings;
            let handle = set.spawn(async move {
                let device = &devices[idx];
                let Ok(_permit) = semaphore.acquire().await else {
                    return CollectionOutcome::Failure {
                        reason: format!("{FAILURE_PREFIX}worker pool closed"),
                    };
                };
                tracing::debug!(device = %device.hostname, ip = %device.ip, "session start");
                collect(connector.as_ref(), device, &battery, &settings).await
            });
            pending.insert(handle.id(), idx);
        }

        let mut outcomes = Vec::with_capacity(total);
        let mut combined_transcript = String::new();
        while let Some(joined) = set.join_next_with_id().await {
            let (idx, outcome) = match joined {
                Ok((id, outcome)) => (pending.remove(&id), outcome),
                Err(error) => {
                    tracing::error!(%error, "collection worker failed");
                    (
                        pending.remove(&error.id()),
                        CollectionOutcome::Failure {
                            reason: format!("{FAILURE_PREFIX}worker failed: {error}"),
                        },
                    )
                }
            };
            let Some(idx) = idx else {
                continue;
            };
            let device = devices[idx].clone();
            if let Some(transcript) = outcome.transcript() {
                combined_transcript.push_str(&combined_section(&device, transcript));
            }
            let entry = DeviceOutcome::new(device, outcome);
            progress.device_finished(outcomes.len() + 1, total, &entry);
            outcomes.push(entry);
        }

        tracing::info!(
            total,
            succeeded = outcomes.iter().filter(|o| o.outcome.is_success()).count(),
            "collection finished"
        );
        CollectionReport {
            outcomes,
            combined_transcript,
        }
    }
}
