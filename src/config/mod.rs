#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::resolver::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_log_level, validate_positive_number, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings after layering: explicit flags, then the config file, then defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            log_level: None,
        }
    }
}

impl Settings {
    pub fn merge(
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
        file: Option<TomlConfig>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let log_level = file.log_level().map(str::to_string);

        Self {
            base_url: base_url
                .or(file.service.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds: timeout_seconds.or(file.service.timeout_seconds),
            log_level,
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("service.base_url", &self.base_url)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("service.timeout_seconds", timeout, 1)?;
        }

        if let Some(level) = &self.log_level {
            validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}
