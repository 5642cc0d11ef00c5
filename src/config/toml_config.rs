use crate::config::Settings;
use crate::utils::error::{Result, RosterError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deployment file, e.g.
///
/// ```toml
/// [api]
/// base_url = "https://roster.example.com/api"
/// timeout_seconds = 20
///
/// [selection]
/// threshold = 3.1
///
/// [import]
/// redirect_delay_seconds = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiSection,
    pub selection: Option<SelectionSection>,
    pub import: Option<ImportSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSection {
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSection {
    pub redirect_delay_seconds: u64,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overwrites the settings this file specifies.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(base_url) = &self.api.base_url {
            settings.api_base_url = base_url.clone();
        }
        if let Some(timeout) = self.api.timeout_seconds {
            settings.request_timeout_secs = timeout;
        }
        if let Some(selection) = &self.selection {
            settings.selection_threshold = selection.threshold;
        }
        if let Some(import) = &self.import {
            settings.redirect_delay_secs = import.redirect_delay_seconds;
        }
    }
}
