pub mod device;
pub mod dispatch;
pub mod inspect;
pub mod models;
pub mod schema;
pub mod task;
