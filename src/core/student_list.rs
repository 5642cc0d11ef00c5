use crate::core::display::StudentDisplay;
use crate::core::failure::{import_failure_message, load_failure_message};
use crate::core::import_students::{check_spreadsheet, DEFAULT_IMPORT_SUCCESS, NO_FILE_MESSAGE};
use crate::domain::model::{ImportFile, NotificationResult, Student};
use crate::domain::ports::{Prompt, StudentGateway};

pub const CONFIRM_DELETE: &str =
    "Are you sure you want to delete this student? This action cannot be undone.";
pub const CONFIRM_VIEW_SELECTED: &str =
    "Load the students whose final score meets the selection threshold?";
pub const CONFIRM_IMPORT: &str =
    "Import students from the selected file? Existing records with matching emails will be updated.";
pub const CONFIRM_NOTIFY: &str =
    "Send notification emails to all selected students? Emails cannot be recalled once sent.";
pub const CONFIRM_TEST: &str = "Send a test request to the API server?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// State behind the main roster screen.
///
/// Every operation ends with its loading flag cleared. Failures land in
/// [`error`](Self::error) and never escape as `Err`.
pub struct StudentListViewModel<G: StudentGateway, P: Prompt> {
    gateway: G,
    prompt: P,
    display: StudentDisplay,
    phase: LoadPhase,
    students: Vec<Student>,
    error: String,
    selected_students: Vec<Student>,
    selected_loading: bool,
    pending_file: Option<ImportFile>,
    import_loading: bool,
    notification_loading: bool,
    last_notification: Option<NotificationResult>,
    test_loading: bool,
}

impl<G: StudentGateway, P: Prompt> StudentListViewModel<G, P> {
    pub fn new(gateway: G, prompt: P, display: StudentDisplay) -> Self {
        Self {
            gateway,
            prompt,
            display,
            phase: LoadPhase::Idle,
            students: Vec::new(),
            error: String::new(),
            selected_students: Vec::new(),
            selected_loading: false,
            pending_file: None,
            import_loading: false,
            notification_loading: false,
            last_notification: None,
            test_loading: false,
        }
    }

    pub async fn init(&mut self) {
        self.load_students().await;
    }

    pub async fn load_students(&mut self) {
        self.phase = LoadPhase::Loading;
        self.error.clear();

        match self.gateway.list_all().await {
            Ok(students) => {
                tracing::debug!("Loaded {} students", students.len());
                self.students = students;
                self.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                tracing::error!("❌ Failed to load students: {}", e);
                self.error = load_failure_message(&e);
                self.phase = LoadPhase::Errored;
            }
        }
    }

    pub async fn delete_student(&mut self, student: &Student) {
        if !self.prompt.confirm(CONFIRM_DELETE) {
            tracing::debug!("Delete of student {} declined", student.id);
            return;
        }

        match self.gateway.delete(student.id).await {
            Ok(()) => {
                tracing::info!("🗑️ Deleted student {} ({})", student.id, student.full_name());
                self.load_students().await;
            }
            Err(e) => {
                tracing::error!("❌ Failed to delete student {}: {}", student.id, e);
                self.error = format!("Failed to delete student: {}", e);
            }
        }
    }

    pub async fn view_selected(&mut self) {
        if !self.prompt.confirm(CONFIRM_VIEW_SELECTED) {
            return;
        }

        self.selected_loading = true;
        self.error.clear();
        match self.gateway.list_selected().await {
            Ok(students) => {
                tracing::debug!("Loaded {} selected students", students.len());
                self.selected_students = students;
            }
            Err(e) => {
                tracing::error!("❌ Failed to load selected students: {}", e);
                self.error = format!("Failed to load selected students: {}", e);
            }
        }
        self.selected_loading = false;
    }

    /// Stages a spreadsheet for [`import_students`](Self::import_students).
    pub fn select_file(&mut self, file: ImportFile) {
        match check_spreadsheet(&file) {
            Ok(()) => {
                self.pending_file = Some(file);
                self.error.clear();
            }
            Err(message) => {
                tracing::warn!("Rejected {} ({})", file.file_name, file.content_type);
                self.pending_file = None;
                self.error = message.to_string();
            }
        }
    }

    pub async fn import_students(&mut self) {
        let Some(file) = self.pending_file.clone() else {
            self.error = NO_FILE_MESSAGE.to_string();
            return;
        };
        if !self.prompt.confirm(CONFIRM_IMPORT) {
            return;
        }

        self.import_loading = true;
        self.error.clear();
        let outcome = self.gateway.import(&file).await;
        self.import_loading = false;

        match outcome {
            Ok(result) if result.success => {
                tracing::info!("📥 Imported students from {}", file.file_name);
                self.pending_file = None;
                let message = result
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_IMPORT_SUCCESS.to_string());
                self.prompt.alert(&message);
                self.load_students().await;
            }
            Ok(result) => {
                tracing::warn!("Import of {} rejected by server", file.file_name);
                self.error = result
                    .message
                    .unwrap_or_else(|| "Failed to import students".to_string());
            }
            Err(e) => {
                tracing::error!("❌ Import of {} failed: {}", file.file_name, e);
                self.error = import_failure_message(&e);
            }
        }
    }

    pub async fn notify_selected(&mut self) {
        if !self.prompt.confirm(CONFIRM_NOTIFY) {
            return;
        }

        self.notification_loading = true;
        self.error.clear();
        match self.gateway.notify_selected().await {
            Ok(result) => {
                if result.success {
                    let message = match (&result.message, result.selected_count) {
                        (Some(message), _) => message.clone(),
                        (None, Some(count)) => {
                            format!("Notification emails sent to {} selected students", count)
                        }
                        (None, None) => "Notification emails sent".to_string(),
                    };
                    tracing::info!("📧 {}", message);
                    self.prompt.alert(&message);
                } else {
                    self.error = result
                        .message
                        .clone()
                        .unwrap_or_else(|| "Failed to send notifications".to_string());
                }
                self.last_notification = Some(result);
            }
            Err(e) => {
                tracing::error!("❌ Notification request failed: {}", e);
                self.error = format!("Failed to send notifications: {}", e);
            }
        }
        self.notification_loading = false;
    }

    pub async fn test_api_connection(&mut self) {
        if !self.prompt.confirm(CONFIRM_TEST) {
            return;
        }

        self.test_loading = true;
        self.error.clear();
        match self.gateway.test_connection().await {
            Ok(result) if result.success => {
                self.prompt
                    .alert(&format!("API Connection Successful: {}", result.message));
            }
            Ok(result) => {
                let message = format!("API Connection Failed: {}", result.message);
                self.prompt.alert(&message);
                self.error = message;
            }
            Err(e) => {
                tracing::error!("❌ API test failed: {}", e);
                let message = format!("API Connection Failed: {}", e);
                self.prompt.alert(&message);
                self.error = message;
            }
        }
        self.test_loading = false;
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn selected_students(&self) -> &[Student] {
        &self.selected_students
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    pub fn pending_file(&self) -> Option<&ImportFile> {
        self.pending_file.as_ref()
    }

    pub fn is_selected_loading(&self) -> bool {
        self.selected_loading
    }

    pub fn is_import_loading(&self) -> bool {
        self.import_loading
    }

    pub fn is_notification_loading(&self) -> bool {
        self.notification_loading
    }

    pub fn is_test_loading(&self) -> bool {
        self.test_loading
    }

    pub fn last_notification(&self) -> Option<&NotificationResult> {
        self.last_notification.as_ref()
    }

    pub fn display(&self) -> &StudentDisplay {
        &self.display
    }

    pub fn selected_count(&self) -> usize {
        self.display.selected_count(&self.students)
    }

    pub fn total_count(&self) -> usize {
        self.display.total_count(&self.students)
    }
}
