//! Per-platform prompt recognition and paging control.

use crate::error::SessionError;

/// How to drive the interactive shell of one device family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    pub name: &'static str,
    /// Sent once after login so long outputs are not paginated.
    pub disable_paging: Option<&'static str>,
    prompt: PromptStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptStyle {
    /// `<host>` in user view, `[host]` / `[~host]` in system view.
    Bracketed,
    /// `host>` or `host#`.
    Suffixed,
    /// Any line ending in one of `# > $ ]`.
    Generic,
}

pub const HUAWEI: PlatformProfile = PlatformProfile {
    name: "huawei",
    disable_paging: Some("screen-length 0 temporary"),
    prompt: PromptStyle::Bracketed,
};

pub const CISCO_IOS: PlatformProfile = PlatformProfile {
    name: "cisco_ios",
    disable_paging: Some("terminal length 0"),
    prompt: PromptStyle::Suffixed,
};

pub const GENERIC: PlatformProfile = PlatformProfile {
    name: "generic",
    disable_paging: None,
    prompt: PromptStyle::Generic,
};

impl PlatformProfile {
    /// Resolve a platform identifier as stored on a device.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnsupportedPlatform` for unknown identifiers.
    pub fn for_platform(platform: &str) -> Result<Self, SessionError> {
        match platform.trim().to_ascii_lowercase().as_str() {
            "huawei" | "huawei_vrp" | "huawei_vrpv8" => Ok(HUAWEI),
            "cisco_ios" | "cisco_xe" => Ok(CISCO_IOS),
            "generic" | "linux" => Ok(GENERIC),
            _ => Err(SessionError::UnsupportedPlatform(platform.to_string())),
        }
    }

    /// Whether `line` (already trimmed of trailing whitespace) is a CLI prompt.
    #[must_use]
    pub fn is_prompt(&self, line: &str) -> bool {
        if line.is_empty() || line.chars().any(char::is_whitespace) {
            return false;
        }
        match self.prompt {
            PromptStyle::Bracketed => {
                (line.starts_with('<') && line.ends_with('>'))
                    || (line.starts_with('[') && line.ends_with(']'))
            }
            PromptStyle::Suffixed => line.ends_with('#') || line.ends_with('>'),
            PromptStyle::Generic => line.ends_with(['#', '>', '$', ']']),
        }
    }

    /// Whether the raw shell output received so far ends at a prompt.
    ///
    /// A last line that is not yet valid UTF-8 is still streaming and never
    /// counts as a prompt.
    #[must_use]
    pub fn ends_with_prompt(&self, buffer: &[u8]) -> bool {
        let end = buffer
            .iter()
            .rposition(|&b| !matches!(b, b' ' | b'\r' | b'\n'))
            .map_or(0, |i| i + 1);
        let tail = &buffer[..end];
        let start = tail.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
        std::str::from_utf8(&tail[start..])
            .is_ok_and(|line| self.is_prompt(line.trim_matches('\r')))
    }

    /// Strip the echoed command line and the trailing prompt from raw output.
    #[must_use]
    pub fn clean_output(&self, raw: &str, command: &str) -> String {
        let normalized = raw.replace("\r\n", "\n").replace('\r', "");
        let mut lines: Vec<&str> = normalized.lines().collect();

        if lines.first().is_some_and(|first| first.trim_end().ends_with(command.trim())) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|last| last.trim().is_empty()) {
            lines.pop();
        }
        if lines.last().is_some_and(|last| self.is_prompt(last.trim_end())) {
            lines.pop();
        }
        lines.join("\n")
    }
}
