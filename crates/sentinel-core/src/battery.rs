//! The ordered diagnostic command battery run against every device.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Health checks for Huawei VRP switches, in transcript order.
pub const HUAWEI_COMMANDS: [&str; 14] = [
    "display version",
    "display device",
    "display cpu-usage",
    "display memory-usage",
    "display interface brief",
    "display transceiver diagnosis interface",
    "display fan",
    "display power",
    "display temperature all",
    "display health",
    "display alarm active",
    "display logbuffer",
    "display trapbuffer",
    "display current-configuration | include sysname",
];

/// Ordered, fixed list of diagnostic commands shared by every device in a run.
///
/// The analysis prompt relies on section ordering, so the battery never
/// reorders or deduplicates what it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBattery {
    commands: Vec<String>,
}

impl CommandBattery {
    /// Build a battery from an explicit command list.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the list is empty or contains a
    /// blank command.
    pub fn new<I, S>(commands: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let commands: Vec<String> = commands.into_iter().map(Into::into).collect();
        if commands.is_empty() {
            return Err(CoreError::Validation(
                "command battery must contain at least one command".into(),
            ));
        }
        if let Some(idx) = commands.iter().position(|c| c.trim().is_empty()) {
            return Err(CoreError::Validation(format!(
                "command #{} in battery is blank",
                idx + 1
            )));
        }
        Ok(Self { commands })
    }

    /// The default Huawei health-check battery.
    #[must_use]
    pub fn huawei() -> Self {
        Self {
            commands: HUAWEI_COMMANDS.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Configured commands, or the Huawei battery when none are configured.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a configured command is blank.
    pub fn from_config(commands: &[String]) -> Result<Self, CoreError> {
        if commands.is_empty() {
            Ok(Self::huawei())
        } else {
            Self::new(commands.iter().cloned())
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandBattery {
    fn default() -> Self {
        Self::huawei()
    }
}
