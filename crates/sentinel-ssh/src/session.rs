//! The device session contract and the battery runner built on it.

use std::future::Future;
use std::time::Duration;

use sentinel_config::SshConfig;
use sentinel_core::battery::CommandBattery;
use sentinel_core::entities::Device;
use sentinel_core::outcome::CollectionOutcome;

use crate::error::SessionError;

/// Prefix of every failure reason recorded for a device.
pub const FAILURE_PREFIX: &str = "SSH Connect Error: ";

/// Timing knobs shared by every session of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Budget for TCP connect, handshake, authentication, and shell setup.
    pub connect_timeout: Duration,
    /// Budget for each individual command's output.
    pub command_timeout: Duration,
    /// Multiplier for the pause between commands.
    pub delay_factor: u32,
}

impl SessionSettings {
    #[must_use]
    pub const fn from_config(config: &SshConfig) -> Self {
        let budget = Duration::from_secs(config.connect_timeout_secs);
        Self {
            connect_timeout: budget,
            command_timeout: budget,
            delay_factor: config.delay_factor,
        }
    }

    /// Pause inserted before each command.
    #[must_use]
    pub fn inter_command_delay(&self) -> Duration {
        Duration::from_millis(100) * self.delay_factor
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&SshConfig::default())
    }
}

/// Everything needed to open one session to one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    pub platform: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub connect_timeout: Duration,
}

impl SessionParams {
    #[must_use]
    pub fn for_device(device: &Device, settings: &SessionSettings) -> Self {
        Self {
            platform: device.platform.clone(),
            host: device.ip.clone(),
            port: device.port,
            username: device.username.clone(),
            password: device.password.clone(),
            connect_timeout: settings.connect_timeout,
        }
    }
}

/// Opens command sessions. Implemented over SSH by [`crate::SshConnector`].
pub trait SessionConnector: Send + Sync + 'static {
    type Session: CommandSession + 'static;

    fn connect(
        &self,
        params: &SessionParams,
    ) -> impl Future<Output = Result<Self::Session, SessionError>> + Send;
}

/// An open command-line session on one device.
pub trait CommandSession: Send {
    /// Send one command and return its textual output verbatim.
    fn send_command(
        &mut self,
        command: &str,
    ) -> impl Future<Output = Result<String, SessionError>> + Send;

    /// Close the session. Must be safe to call after a failed command.
    fn close(self) -> impl Future<Output = ()> + Send;
}

/// Header line opening a device transcript.
#[must_use]
pub fn transcript_header(device: &Device) -> String {
    format!("=== Device: {} ({}) ===\n", device.hostname, device.ip)
}

/// Run the whole battery against one device.
///
/// Never fails: connect, authentication, and command errors (including
/// timeouts) become `CollectionOutcome::Failure`. Once a session is open it is
/// closed on every path, including a failure part-way through the battery.
pub async fn collect<C: SessionConnector>(
    connector: &C,
    device: &Device,
    battery: &CommandBattery,
    settings: &SessionSettings,
) -> CollectionOutcome {
    let params = SessionParams::for_device(device, settings);

    let connected = tokio::time::timeout(settings.connect_timeout, connector.connect(&params))
        .await
        .unwrap_or_else(|_| {
            Err(SessionError::Timeout {
                stage: "connect".into(),
                secs: settings.connect_timeout.as_secs(),
            })
        });
    let mut session = match connected {
        Ok(session) => session,
        Err(error) => return failure(device, &error),
    };

    let result = run_battery(&mut session, device, battery, settings).await;
    session.close().await;

    match result {
        Ok(transcript) => {
            tracing::debug!(device = %device.hostname, bytes = transcript.len(), "battery complete");
            CollectionOutcome::Success { transcript }
        }
        Err(error) => failure(device, &error),
    }
}

async fn run_battery<S: CommandSession>(
    session: &mut S,
    device: &Device,
    battery: &CommandBattery,
    settings: &SessionSettings,
) -> Result<String, SessionError> {
    let mut transcript = transcript_header(device);
    let delay = settings.inter_command_delay();

    for command in battery.iter() {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let output = tokio::time::timeout(settings.command_timeout, session.send_command(command))
            .await
            .map_err(|_| SessionError::Timeout {
                stage: format!("command '{command}'"),
                secs: settings.command_timeout.as_secs(),
            })??;
        transcript.push_str(&format!("\n[Command: {command}]\n{output}\n"));
    }
    Ok(transcript)
}

fn failure(device: &Device, error: &SessionError) -> CollectionOutcome {
    tracing::warn!(device = %device.hostname, ip = %device.ip, %error, "device collection failed");
    CollectionOutcome::Failure {
        reason: format!("{FAILURE_PREFIX}{error}"),
    }
}
