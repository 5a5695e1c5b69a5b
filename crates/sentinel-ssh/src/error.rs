//! Session error types.
//!
//! Every variant is folded into `CollectionOutcome::Failure` by
//! [`crate::collect`]; none of them escapes a device session.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// TCP connect or SSH handshake failed.
    #[error("connect to {host}:{port} failed: {reason}")]
    Connect {
        host: String,
        port: u16,
        reason: String,
    },

    /// The device rejected the supplied credentials.
    #[error("authentication rejected for user '{username}'")]
    Auth { username: String },

    /// A stage did not finish within its budget.
    #[error("{stage} timed out after {secs}s")]
    Timeout { stage: String, secs: u64 },

    /// A command could not be sent or its output could not be read.
    #[error("command '{command}' failed: {reason}")]
    Command { command: String, reason: String },

    /// The remote side closed the shell channel.
    #[error("remote closed the session")]
    ChannelClosed,

    /// No prompt/paging profile is known for the platform identifier.
    #[error("unsupported platform '{0}'")]
    UnsupportedPlatform(String),

    /// Underlying SSH protocol error.
    #[error("ssh: {0}")]
    Ssh(#[from] russh::Error),
}
