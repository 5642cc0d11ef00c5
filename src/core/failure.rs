//! Failure descriptions and the messages shown for them.
//!
//! Nothing here knows about the HTTP client: the gateway builds a
//! [`FailureDescription`] from whatever its transport reports and these
//! functions turn it into text.

use crate::utils::error::RosterError;

pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to server. Please check your internet connection.";

/// Body of a failed response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
}

impl ErrorBody {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ErrorBody::Empty;
        }
        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(trimmed.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FailureDescription {
    /// No response was received (unreachable host, timeout, bad request).
    Client { detail: String },
    /// The server answered with a non-success status.
    Server {
        status: u16,
        reason: String,
        body: ErrorBody,
    },
}

impl FailureDescription {
    pub fn status(&self) -> u16 {
        match self {
            FailureDescription::Client { .. } => 0,
            FailureDescription::Server { status, .. } => *status,
        }
    }

    pub fn into_error(self) -> RosterError {
        let message = normalize_failure(&self);
        RosterError::api(self.status(), message)
    }
}

pub fn normalize_failure(failure: &FailureDescription) -> String {
    match failure {
        FailureDescription::Client { detail } => format!("Client Error: {}", detail),
        FailureDescription::Server {
            status,
            reason,
            body,
        } => {
            let from_body = match body {
                ErrorBody::Json(value) => structured_message(value),
                ErrorBody::Text(text) => Some(text.clone()),
                ErrorBody::Empty => None,
            };
            from_body.unwrap_or_else(|| format!("Server Error: {} - {}", status, reason))
        }
    }
}

fn structured_message(value: &serde_json::Value) -> Option<String> {
    if let Some(text) = value.as_str() {
        return non_empty(text);
    }
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()).and_then(non_empty))
}

fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Message for a failed list load.
pub fn load_failure_message(error: &RosterError) -> String {
    match error.status() {
        Some(0) => CONNECTIVITY_MESSAGE.to_string(),
        Some(status) if status >= 500 => "Server error. Please try again later.".to_string(),
        _ => format!("Failed to load students: {}", error),
    }
}

/// Message for a failed spreadsheet upload.
pub fn import_failure_message(error: &RosterError) -> String {
    match error.status() {
        Some(0) => CONNECTIVITY_MESSAGE.to_string(),
        Some(400) => "Invalid file format or data. Please check your Excel file.".to_string(),
        Some(500) => "Server error occurred while processing the file.".to_string(),
        _ => {
            let detail = error.to_string();
            if detail.is_empty() {
                "Failed to import students: Unknown error".to_string()
            } else {
                format!("Failed to import students: {}", detail)
            }
        }
    }
}
