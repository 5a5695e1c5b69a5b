//! # sentinel-inspect
//!
//! The NetSentinel batch pipeline.
//!
//! - [`CollectionCoordinator`] runs one SSH session per device on a bounded
//!   worker pool and aggregates the outcomes through a single consumer.
//! - [`InspectionOrchestrator`] moves a run through
//!   `Init -> Collecting -> (AnalysisSkipped | Analyzing) -> Persisting -> Done`
//!   and owns the single task-level result.

mod coordinator;
mod error;
mod orchestrator;
mod progress;

pub use coordinator::{CollectionCoordinator, CollectionReport, combined_section};
pub use error::InspectError;
pub use orchestrator::InspectionOrchestrator;
pub use progress::{InspectionStage, NoProgress, ProgressSink};
