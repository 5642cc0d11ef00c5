use crate::core::failure::{ErrorBody, FailureDescription};
use crate::domain::model::{
    ConnectionTestResult, ImportFile, ImportResult, NotificationResult, Student,
};
use crate::domain::ports::{ConfigProvider, StudentGateway};
use crate::utils::error::{Result, RosterError};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// `StudentGateway` over the REST API rooted at `<base>/Students`.
#[derive(Debug, Clone)]
pub struct HttpStudentGateway {
    client: Client,
    students_url: String,
}

impl HttpStudentGateway {
    pub fn new(api_base_url: &str) -> Self {
        Self::with_client(Client::new(), api_base_url)
    }

    pub fn with_client(client: Client, api_base_url: &str) -> Self {
        Self {
            client,
            students_url: format!("{}/Students", api_base_url.trim_end_matches('/')),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .map_err(|e| RosterError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self::with_client(client, config.api_base_url()))
    }

    pub fn students_url(&self) -> &str {
        &self.students_url
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.students_url, suffix)
    }

    /// Sends the request and returns the status and body of a 2xx response.
    /// Anything else comes back as a normalized `RosterError::Api`.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<(StatusCode, String)> {
        let response = request
            .send()
            .await
            .map_err(|e| client_failure(&e, url).into_error())?;

        let status = response.status();
        tracing::debug!("📡 {} -> {}", url, status);

        let body = response
            .text()
            .await
            .map_err(|e| client_failure(&e, url).into_error())?;

        if !status.is_success() {
            let failure = FailureDescription::Server {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
                body: ErrorBody::parse(&body),
            };
            let error = failure.into_error();
            tracing::warn!("API call to {} failed: {}", url, error);
            return Err(error);
        }

        Ok((status, body))
    }
}

fn client_failure(error: &reqwest::Error, url: &str) -> FailureDescription {
    let detail = if error.is_connect() {
        format!("Unable to connect to server at {}", url)
    } else if error.is_timeout() {
        format!("Request to {} timed out", url)
    } else {
        error.to_string()
    };
    tracing::error!("❌ Request to {} did not complete: {}", url, error);
    FailureDescription::Client { detail }
}

fn decode_json<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        RosterError::api(
            status.as_u16(),
            format!("Client Error: unexpected response from server: {}", e),
        )
    })
}

/// Decodes either the structured JSON object or a plain-text body. Anything
/// that is not a JSON object is handed to `from_text` and counts as success.
fn decode_flexible<T, F>(status: StatusCode, body: &str, from_text: F) -> Result<T>
where
    T: DeserializeOwned,
    F: FnOnce(Option<String>) -> T,
{
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(from_text(None));
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(_)) => decode_json(status, trimmed),
        Ok(serde_json::Value::String(text)) => Ok(from_text(Some(text))),
        _ => Ok(from_text(Some(trimmed.to_string()))),
    }
}

#[async_trait]
impl StudentGateway for HttpStudentGateway {
    async fn list_all(&self) -> Result<Vec<Student>> {
        let url = self.url("");
        tracing::debug!("📡 GET {}", url);
        let (status, body) = self.send(self.client.get(&url), &url).await?;
        decode_json(status, &body)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("/{}", id));
        tracing::debug!("📡 DELETE {}", url);
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }

    async fn list_selected(&self) -> Result<Vec<Student>> {
        let url = self.url("/selected");
        tracing::debug!("📡 GET {}", url);
        let (status, body) = self.send(self.client.get(&url), &url).await?;
        decode_json(status, &body)
    }

    async fn import(&self, file: &ImportFile) -> Result<ImportResult> {
        let url = self.url("/import");
        tracing::debug!(
            "📡 POST {} ({}, {} bytes)",
            url,
            file.file_name,
            file.bytes.len()
        );

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| client_failure(&e, &url).into_error())?;
        let form = Form::new().part("file", part);

        let (status, body) = self
            .send(self.client.post(&url).multipart(form), &url)
            .await?;
        decode_flexible(status, &body, |message| ImportResult {
            success: true,
            message,
        })
    }

    async fn notify_selected(&self) -> Result<NotificationResult> {
        let url = self.url("/notify-selected");
        tracing::debug!("📡 POST {}", url);
        let (status, body) = self.send(self.client.post(&url), &url).await?;
        decode_json(status, &body)
    }

    async fn test_connection(&self) -> Result<ConnectionTestResult> {
        let url = self.url("/test");
        tracing::debug!("📡 POST {}", url);
        let (status, body) = self.send(self.client.post(&url), &url).await?;
        decode_flexible(status, &body, |message| ConnectionTestResult {
            success: true,
            message: message.unwrap_or_default(),
        })
    }
}
