use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    /// A backend call failed. `message` is already normalized for display;
    /// `status` is 0 when no response was received.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Server,
    Client,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a failed backend call, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api { status: 0, .. } => ErrorCategory::Network,
            Self::Api { status, .. } if *status >= 500 => ErrorCategory::Server,
            Self::Api { .. } | Self::ValidationError(_) => ErrorCategory::Client,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Client => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Server => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Setting '{}' must be provided", field),
            Self::ValidationError(message) => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the API server is running and the API URL is correct",
            ErrorCategory::Server => "The server failed to process the request; try again later",
            ErrorCategory::Client => "Check the request input and try again",
            ErrorCategory::Configuration => "Fix the configuration file or command line options",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_categories() {
        assert_eq!(RosterError::api(0, "down").category(), ErrorCategory::Network);
        assert_eq!(RosterError::api(503, "busy").category(), ErrorCategory::Server);
        assert_eq!(RosterError::api(404, "gone").category(), ErrorCategory::Client);
        assert_eq!(RosterError::api(404, "gone").status(), Some(404));
    }

    #[test]
    fn test_api_error_displays_normalized_message() {
        let err = RosterError::api(500, "Server Error: 500 - Internal Server Error");
        assert_eq!(err.to_string(), "Server Error: 500 - Internal Server Error");
        assert_eq!(err.user_friendly_message(), err.to_string());
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = RosterError::ConfigError {
            message: "TOML parsing error".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_every_variant_has_a_category() {
        let missing = RosterError::MissingConfigError {
            field: "api_url".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.severity(), ErrorSeverity::High);
        assert_eq!(missing.user_friendly_message(), "Setting 'api_url' must be provided");

        let invalid = RosterError::ValidationError("No student with id 9".to_string());
        assert_eq!(invalid.category(), ErrorCategory::Client);
        assert_eq!(invalid.user_friendly_message(), "No student with id 9");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let serialization: RosterError = json_err.into();
        assert_eq!(serialization.category(), ErrorCategory::System);
        assert_eq!(serialization.status(), None);
    }
}
