use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PLATFORM, DEFAULT_SSH_PORT, REPORT_DEVICE_NAME};
use crate::errors::CoreError;

/// An inventory entry: one network device reachable over SSH.
///
/// Treated as an immutable value for the duration of an inspection run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Device {
    pub id: i64,
    pub hostname: String,
    pub ip: String,
    pub username: String,
    pub password: String,
    pub port: u16,
    /// Remote platform identifier (e.g. `huawei`).
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

impl Device {
    /// `hostname (ip)`, the label used in transcript headers and logs.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.hostname, self.ip)
    }
}

/// Fields supplied when adding a device to the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewDevice {
    pub hostname: String,
    pub ip: String,
    pub username: String,
    pub password: String,
    pub port: u16,
    pub platform: String,
}

impl NewDevice {
    #[must_use]
    pub fn new(
        hostname: impl Into<String>,
        ip: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            ip: ip.into(),
            username: username.into(),
            password: password.into(),
            port: DEFAULT_SSH_PORT,
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }

    /// Check required fields before insertion.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a required field is blank, the port
    /// is zero, or the hostname is the reserved report-row name.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("hostname", &self.hostname),
            ("ip", &self.ip),
            ("username", &self.username),
            ("password", &self.password),
            ("platform", &self.platform),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("device {field} is required")));
            }
        }
        if self.port == 0 {
            return Err(CoreError::Validation("device port must be non-zero".into()));
        }
        if self.hostname == REPORT_DEVICE_NAME {
            return Err(CoreError::Validation(format!(
                "hostname '{REPORT_DEVICE_NAME}' is reserved"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> NewDevice {
        NewDevice::new("SW1", "192.168.1.1", "admin", "secret")
    }

    #[test]
    fn defaults_port_and_platform() {
        let dev = sample();
        assert_eq!(dev.port, 22);
        assert_eq!(dev.platform, "huawei");
        assert!(dev.validate().is_ok());
    }

    #[rstest]
    #[case::hostname(NewDevice { hostname: String::new(), ..sample() }, "hostname")]
    #[case::ip(NewDevice { ip: " ".into(), ..sample() }, "ip")]
    #[case::username(NewDevice { username: String::new(), ..sample() }, "username")]
    #[case::password(NewDevice { password: String::new(), ..sample() }, "password")]
    #[case::port(NewDevice { port: 0, ..sample() }, "port")]
    #[case::reserved(NewDevice { hostname: REPORT_DEVICE_NAME.into(), ..sample() }, "reserved")]
    fn validate_rejects(#[case] dev: NewDevice, #[case] needle: &str) {
        let err = dev.validate().unwrap_err();
        assert!(err.to_string().contains(needle), "{err}");
    }

    #[test]
    fn label_formats_hostname_and_ip() {
        let dev = Device {
            id: 1,
            hostname: "SW1".into(),
            ip: "10.0.0.1".into(),
            username: "admin".into(),
            password: "pw".into(),
            port: 22,
            platform: "huawei".into(),
            created_at: Utc::now(),
        };
        assert_eq!(dev.label(), "SW1 (10.0.0.1)");
    }
}
