//! Entity structs for inventory devices and persisted inspection records.

mod device;
mod inspection;

pub use device::{Device, NewDevice};
pub use inspection::{InspectionDetail, InspectionTask};
