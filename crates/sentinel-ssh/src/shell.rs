//! Interactive SSH shell sessions over russh.

use std::sync::Arc;

use russh::client::{self, Handle, Msg};
use russh::keys::ssh_key::PublicKey;
use russh::{Channel, ChannelMsg, Disconnect};

use crate::error::SessionError;
use crate::platform::PlatformProfile;
use crate::session::{CommandSession, SessionConnector, SessionParams};

/// Inventory devices are trusted by address; host keys are not pinned.
struct AcceptAnyHostKey;

impl client::Handler for AcceptAnyHostKey {
    type Error = russh::Error;

    async fn check_server_key(&mut self, _server_public_key: &PublicKey) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

/// Opens password-authenticated interactive shells.
#[derive(Debug, Clone, Default)]
pub struct SshConnector;

impl SshConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn client_config(params: &SessionParams) -> Arc<client::Config> {
        Arc::new(client::Config {
            inactivity_timeout: Some(params.connect_timeout),
            ..client::Config::default()
        })
    }

    async fn open(params: &SessionParams) -> Result<ShellSession, SessionError> {
        let profile = PlatformProfile::for_platform(&params.platform)?;

        let mut handle = client::connect(
            Self::client_config(params),
            (params.host.as_str(), params.port),
            AcceptAnyHostKey,
        )
        .await
        .map_err(|e| SessionError::Connect {
            host: params.host.clone(),
            port: params.port,
            reason: e.to_string(),
        })?;

        let auth = handle
            .authenticate_password(params.username.clone(), params.password.clone())
            .await?;
        if !auth.success() {
            return Err(SessionError::Auth {
                username: params.username.clone(),
            });
        }

        let channel = handle.channel_open_session().await?;
        channel
            .request_pty(false, "vt100", 200, 24, 0, 0, &[])
            .await?;
        channel.request_shell(false).await?;

        let mut session = ShellSession {
            handle,
            channel,
            profile,
        };
        // Login banner up to the first prompt.
        session.read_until_prompt().await?;

        if let Some(disable_paging) = profile.disable_paging {
            session.send_command(disable_paging).await?;
        }
        tracing::debug!(host = %params.host, platform = profile.name, "shell ready");
        Ok(session)
    }
}

impl SessionConnector for SshConnector {
    type Session = ShellSession;

    async fn connect(&self, params: &SessionParams) -> Result<ShellSession, SessionError> {
        Self::open(params).await
    }
}

/// One interactive shell channel on a device.
pub struct ShellSession {
    handle: Handle<AcceptAnyHostKey>,
    channel: Channel<Msg>,
    profile: PlatformProfile,
}

impl ShellSession {
    /// Multi-byte characters may be split across data messages, so output is
    /// kept as bytes and decoded once the prompt has arrived.
    async fn read_until_prompt(&mut self) -> Result<String, SessionError> {
        let mut buffer = Vec::new();
        loop {
            match self.channel.wait().await {
                Some(ChannelMsg::Data { data } | ChannelMsg::ExtendedData { data, .. }) => {
                    buffer.extend_from_slice(&data);
                    if self.profile.ends_with_prompt(&buffer) {
                        return Ok(String::from_utf8_lossy(&buffer).into_owned());
                    }
                }
                Some(ChannelMsg::Eof | ChannelMsg::Close) | None => {
                    return Err(SessionError::ChannelClosed);
                }
                Some(_) => {}
            }
        }
    }
}

impl CommandSession for ShellSession {
    async fn send_command(&mut self, command: &str) -> Result<String, SessionError> {
        let line = format!("{command}\n");
        self.channel
            .data(line.as_bytes())
            .await
            .map_err(|e| SessionError::Command {
                command: command.to_string(),
                reason: e.to_string(),
            })?;
        let raw = self.read_until_prompt().await?;
        Ok(self.profile.clean_output(&raw, command))
    }

    async fn close(self) {
        if let Err(error) = self.channel.eof().await {
            tracing::debug!(%error, "eof on closing channel");
        }
        if let Err(error) = self.channel.close().await {
            tracing::debug!(%error, "closing channel");
        }
        if let Err(error) = self
            .handle
            .disconnect(Disconnect::ByApplication, "", "en")
            .await
        {
            tracing::debug!(%error, "disconnect");
        }
    }
}
