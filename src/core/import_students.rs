use crate::config::DEFAULT_REDIRECT_DELAY_SECS;
use crate::core::failure::import_failure_message;
use crate::domain::model::{ImportFile, Route};
use crate::domain::ports::{Navigator, StudentGateway};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const INVALID_FILE_MESSAGE: &str = "Please select a valid Excel file (.xlsx or .xls)";
pub const NO_FILE_MESSAGE: &str = "Please select a file";
pub const DEFAULT_IMPORT_SUCCESS: &str = "Students imported successfully!";
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(DEFAULT_REDIRECT_DELAY_SECS);

/// Accepts only the two Excel MIME types.
pub fn check_spreadsheet(file: &ImportFile) -> Result<(), &'static str> {
    if file.is_spreadsheet() {
        Ok(())
    } else {
        Err(INVALID_FILE_MESSAGE)
    }
}

pub struct ImportViewModel<G: StudentGateway, N: Navigator + Clone + 'static> {
    gateway: G,
    navigator: N,
    redirect_delay: Duration,
    pending_file: Option<ImportFile>,
    loading: bool,
    error: String,
    success: String,
    redirect: Option<JoinHandle<()>>,
}

impl<G: StudentGateway, N: Navigator + Clone + 'static> ImportViewModel<G, N> {
    pub fn new(gateway: G, navigator: N) -> Self {
        Self::with_redirect_delay(gateway, navigator, DEFAULT_REDIRECT_DELAY)
    }

    pub fn with_redirect_delay(gateway: G, navigator: N, redirect_delay: Duration) -> Self {
        Self {
            gateway,
            navigator,
            redirect_delay,
            pending_file: None,
            loading: false,
            error: String::new(),
            success: String::new(),
            redirect: None,
        }
    }

    pub fn select_file(&mut self, file: ImportFile) {
        match check_spreadsheet(&file) {
            Ok(()) => {
                tracing::debug!("Selected {} for import", file.file_name);
                self.pending_file = Some(file);
                self.error.clear();
                self.success.clear();
            }
            Err(message) => {
                tracing::warn!("Rejected {} ({})", file.file_name, file.content_type);
                self.error = message.to_string();
                self.pending_file = None;
            }
        }
    }

    /// Uploads the pending file. On success the list screen is opened after
    /// the redirect delay.
    pub async fn submit(&mut self) {
        let Some(file) = self.pending_file.clone() else {
            self.error = NO_FILE_MESSAGE.to_string();
            return;
        };

        self.loading = true;
        self.error.clear();
        self.success.clear();

        let outcome = self.gateway.import(&file).await;
        self.loading = false;

        match outcome {
            Ok(result) if result.success => {
                tracing::info!("📥 Imported {}", file.file_name);
                self.success = result
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_IMPORT_SUCCESS.to_string());
                self.pending_file = None;
                self.schedule_redirect();
            }
            Ok(result) => {
                tracing::warn!("Import of {} rejected by server", file.file_name);
                self.error = result
                    .message
                    .unwrap_or_else(|| "Failed to import students: Unknown error".to_string());
            }
            Err(e) => {
                tracing::error!("❌ Import of {} failed: {}", file.file_name, e);
                self.error = import_failure_message(&e);
            }
        }
    }

    fn schedule_redirect(&mut self) {
        if let Some(previous) = self.redirect.take() {
            previous.abort();
        }
        let navigator = self.navigator.clone();
        let delay = self.redirect_delay;
        self.redirect = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(Route::Students);
        }));
    }

    pub fn cancel(&mut self) {
        self.pending_file = None;
        if let Some(redirect) = self.redirect.take() {
            redirect.abort();
        }
        self.navigator.navigate(Route::Students);
    }

    /// Hands the scheduled redirect to the caller, e.g. to wait for it.
    pub fn take_redirect(&mut self) -> Option<JoinHandle<()>> {
        self.redirect.take()
    }

    pub fn has_scheduled_redirect(&self) -> bool {
        self.redirect.is_some()
    }

    pub fn pending_file(&self) -> Option<&ImportFile> {
        self.pending_file.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn success(&self) -> &str {
        &self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{XLSX_MIME, XLS_MIME};

    #[test]
    fn test_check_spreadsheet_allow_list() {
        assert!(check_spreadsheet(&ImportFile::new("a.xlsx", XLSX_MIME, vec![])).is_ok());
        assert!(check_spreadsheet(&ImportFile::new("a.xls", XLS_MIME, vec![])).is_ok());
        assert_eq!(
            check_spreadsheet(&ImportFile::new("a.pdf", "application/pdf", vec![])),
            Err(INVALID_FILE_MESSAGE)
        );
        assert!(check_spreadsheet(&ImportFile::new("a.csv", "text/csv", vec![])).is_err());
    }

    #[test]
    fn test_default_delay_matches_default_settings() {
        use crate::config::Settings;
        use crate::domain::ports::ConfigProvider;

        assert_eq!(DEFAULT_REDIRECT_DELAY, Settings::default().redirect_delay());
    }
}
