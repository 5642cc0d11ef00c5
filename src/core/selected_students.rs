use crate::core::display::StudentDisplay;
use crate::domain::model::Student;
use crate::domain::ports::StudentGateway;

/// Read-only screen over the server-filtered "selected" collection.
pub struct SelectedStudentsViewModel<G: StudentGateway> {
    gateway: G,
    display: StudentDisplay,
    students: Vec<Student>,
    loading: bool,
    error: String,
    initialized: bool,
}

impl<G: StudentGateway> SelectedStudentsViewModel<G> {
    pub fn new(gateway: G, display: StudentDisplay) -> Self {
        Self {
            gateway,
            display,
            students: Vec::new(),
            loading: false,
            error: String::new(),
            initialized: false,
        }
    }

    /// Loads the collection the first time it is called; later calls do nothing.
    pub async fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.reload().await;
    }

    pub async fn reload(&mut self) {
        self.loading = true;
        self.error.clear();

        match self.gateway.list_selected().await {
            Ok(students) => {
                let off_policy = students
                    .iter()
                    .filter(|s| !self.display.is_selected(s.final_score))
                    .count();
                if off_policy > 0 {
                    tracing::warn!(
                        "{} selected students are below the local threshold {}",
                        off_policy,
                        self.display.policy().threshold
                    );
                }
                self.students = students;
            }
            Err(e) => {
                tracing::error!("❌ Failed to load selected students: {}", e);
                self.error = format!("Failed to load selected students: {}", e);
            }
        }
        self.loading = false;
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn display(&self) -> &StudentDisplay {
        &self.display
    }

    pub fn total_count(&self) -> usize {
        self.display.total_count(&self.students)
    }
}
