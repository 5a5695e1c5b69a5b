//! # sentinel-config
//!
//! Layered configuration loading for NetSentinel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SENTINEL_*` prefix, `__` as separator)
//! 2. Project-level `.netsentinel/config.toml`
//! 3. User-level `~/.config/netsentinel/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `SENTINEL_OLLAMA__BASE_URL` -> `ollama.base_url`,
//! `SENTINEL_INSPECTION__WORKERS` -> `inspection.workers`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sentinel_config::SentinelConfig;
//!
//! let config = SentinelConfig::load_with_dotenv().expect("config");
//! println!("Ollama at {}", config.ollama.base_url);
//! ```

mod database;
mod error;
mod inspection;
mod ollama;
mod ssh;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use inspection::InspectionConfig;
pub use ollama::OllamaConfig;
pub use ssh::SshConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local configuration directory.
pub const PROJECT_DIR: &str = ".netsentinel";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SentinelConfig {
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub ssh: SshConfig,
    #[serde(default)]
    pub inspection: InspectionConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl SentinelConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit config file layered above the user/project files.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let config: Self = Self::figment_with_file(Some(path)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_file(None)
    }

    fn figment_with_file(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("SENTINEL_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("netsentinel").join("config.toml"))
    }

    /// Reject values that would stall or disable the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self.inspection.workers == 0 {
            return Err(invalid("inspection.workers", "must be at least 1"));
        }
        if self.ssh.connect_timeout_secs == 0 {
            return Err(invalid("ssh.connect_timeout_secs", "must be non-zero"));
        }
        if self.ssh.default_port == 0 {
            return Err(invalid("ssh.default_port", "must be non-zero"));
        }
        if self.ollama.timeout_secs == 0 {
            return Err(invalid("ollama.timeout_secs", "must be non-zero"));
        }
        if self.ollama.base_url.trim().is_empty() {
            return Err(invalid("ollama.base_url", "must not be empty"));
        }
        if self.inspection.commands.iter().any(|c| c.trim().is_empty()) {
            return Err(invalid("inspection.commands", "must not contain blank commands"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SentinelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.inspection.workers, 5);
        assert_eq!(config.ssh.connect_timeout_secs, 30);
        assert_eq!(config.ssh.delay_factor, 2);
        assert_eq!(config.database.path, "net_sentinel.db");
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = SentinelConfig::figment();
        let config: SentinelConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.ollama.timeout_secs, 300);
        assert!(config.inspection.commands.is_empty());
    }

    #[test]
    fn zero_workers_rejected() {
        let mut config = SentinelConfig::default();
        config.inspection.workers = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("inspection.workers"));
    }

    #[test]
    fn blank_base_url_rejected() {
        let mut config = SentinelConfig::default();
        config.ollama.base_url = "  ".into();
        assert!(config.validate().is_err());
    }
}
