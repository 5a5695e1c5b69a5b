//! Repository modules adding methods to `SentinelService` via `impl` blocks.

pub mod device;
pub mod inspection;
