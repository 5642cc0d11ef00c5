#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::core::ConfigProvider;
use crate::domain::model::DEFAULT_SELECTION_THRESHOLD;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REDIRECT_DELAY_SECS: u64 = 3;

/// Resolved client settings: defaults, then the TOML file, then CLI/env.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    pub selection_threshold: f64,
    pub request_timeout_secs: u64,
    pub redirect_delay_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            selection_threshold: DEFAULT_SELECTION_THRESHOLD,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            redirect_delay_secs: DEFAULT_REDIRECT_DELAY_SECS,
        }
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn selection_threshold(&self) -> f64 {
        self.selection_threshold
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn redirect_delay_secs(&self) -> u64 {
        self.redirect_delay_secs
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_base_url)?;
        validate_range("selection.threshold", self.selection_threshold, 0.0, 4.0)?;
        validate_positive_number("api.timeout_seconds", self.request_timeout_secs, 1)?;
        Ok(())
    }
}
