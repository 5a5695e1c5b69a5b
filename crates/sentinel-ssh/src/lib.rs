//! # sentinel-ssh
//!
//! Remote command sessions against network devices.
//!
//! [`collect`] runs an ordered command battery over one session and folds
//! every connect, authentication, and command error into a
//! `CollectionOutcome`. The transport sits behind [`SessionConnector`] so the
//! coordinator and its tests do not depend on a live SSH server;
//! [`SshConnector`] is the russh-backed implementation.

mod error;
mod platform;
mod session;
mod shell;

pub use error::SessionError;
pub use platform::{CISCO_IOS, GENERIC, HUAWEI, PlatformProfile};
pub use session::{
    CommandSession, FAILURE_PREFIX, SessionConnector, SessionParams, SessionSettings, collect,
    transcript_header,
};
pub use shell::{ShellSession, SshConnector};
