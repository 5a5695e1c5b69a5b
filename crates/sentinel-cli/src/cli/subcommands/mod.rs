mod device;
mod task;

pub use device::{AddDeviceArgs, DeviceCommands};
pub use task::TaskCommands;
