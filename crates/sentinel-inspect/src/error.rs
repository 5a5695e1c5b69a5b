//! Run-level error types.

use sentinel_db::error::DatabaseError;
use thiserror::Error;

/// Hard failures of a batch run. Device and analysis failures are recorded as
/// data and never surface here.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The inventory is empty.
    #[error("no devices in inventory; add one with `sentinel device add`")]
    NoDevices,

    /// No model was chosen, usually because the inference server is offline.
    #[error("no analysis model selected; is the Ollama server running?")]
    NoModel,

    /// The batch could not be written.
    #[error("failed to persist inspection batch: {0}")]
    Persistence(#[from] DatabaseError),
}
