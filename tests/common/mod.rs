#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex as StdMutex};
use student_roster::domain::model::{
    CollegeInfo, ConnectionTestResult, GraduationDetails, ImportFile, ImportResult,
    NotificationResult, Route, Student, XLSX_MIME,
};
use student_roster::domain::ports::{Navigator, Prompt, StudentGateway};
use student_roster::{Result, RosterError};
use tokio::sync::Mutex;

pub fn student(id: i64, first_name: &str, final_score: f64) -> Student {
    Student {
        id,
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        college_info: CollegeInfo {
            college_name: "Engineering".to_string(),
            department: "Computer Science".to_string(),
            major: "Software".to_string(),
        },
        graduation_details: GraduationDetails {
            graduation_date: "2024-06-15T00:00:00".to_string(),
            cgpa: 3.2,
        },
        codility_scores: vec![],
        midterm_score: 3.0,
        gc_score: 3.0,
        final_score,
    }
}

pub fn roster() -> Vec<Student> {
    vec![
        student(1, "Alice", 3.6),
        student(2, "Bob", 3.1),
        student(3, "Carol", 3.09),
        student(4, "Dan", 2.4),
    ]
}

pub fn xlsx_file() -> ImportFile {
    ImportFile::new("students.xlsx", XLSX_MIME, b"PK\x03\x04".to_vec())
}

/// Failure to return from a mocked call: (status, normalized message).
pub type Failure = (u16, String);

fn fail<T>(failure: &Failure) -> Result<T> {
    Err(RosterError::api(failure.0, failure.1.clone()))
}

#[derive(Default)]
pub struct MockState {
    pub students: Vec<Student>,
    pub list_error: Option<Failure>,
    pub delete_error: Option<Failure>,
    pub selected_error: Option<Failure>,
    pub import_outcome: Option<std::result::Result<ImportResult, Failure>>,
    pub notify_outcome: Option<std::result::Result<NotificationResult, Failure>>,
    pub test_outcome: Option<std::result::Result<ConnectionTestResult, Failure>>,
    pub list_calls: usize,
    pub selected_calls: usize,
    pub deleted_ids: Vec<i64>,
    pub imported_files: Vec<String>,
    pub notify_calls: usize,
    pub test_calls: usize,
    pub threshold: f64,
}

/// In-memory backend that filters `selected` the way the server does.
#[derive(Clone)]
pub struct MockGateway {
    pub state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                students,
                threshold: 3.1,
                ..MockState::default()
            })),
        }
    }

    pub async fn list_calls(&self) -> usize {
        self.state.lock().await.list_calls
    }
}

#[async_trait]
impl StudentGateway for MockGateway {
    async fn list_all(&self) -> Result<Vec<Student>> {
        let mut state = self.state.lock().await;
        state.list_calls += 1;
        if let Some(failure) = &state.list_error {
            return fail(failure);
        }
        Ok(state.students.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut state = self.state.lock().await;
        state.deleted_ids.push(id);
        if let Some(failure) = &state.delete_error {
            return fail(failure);
        }
        state.students.retain(|s| s.id != id);
        Ok(())
    }

    async fn list_selected(&self) -> Result<Vec<Student>> {
        let mut state = self.state.lock().await;
        state.selected_calls += 1;
        if let Some(failure) = &state.selected_error {
            return fail(failure);
        }
        let threshold = state.threshold;
        Ok(state
            .students
            .iter()
            .filter(|s| s.final_score >= threshold)
            .cloned()
            .collect())
    }

    async fn import(&self, file: &ImportFile) -> Result<ImportResult> {
        let mut state = self.state.lock().await;
        state.imported_files.push(file.file_name.clone());
        match &state.import_outcome {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(failure)) => fail(failure),
            None => Ok(ImportResult {
                success: true,
                message: None,
            }),
        }
    }

    async fn notify_selected(&self) -> Result<NotificationResult> {
        let mut state = self.state.lock().await;
        state.notify_calls += 1;
        match &state.notify_outcome {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(failure)) => fail(failure),
            None => Ok(NotificationResult {
                success: true,
                message: None,
                details: None,
                selected_count: None,
            }),
        }
    }

    async fn test_connection(&self) -> Result<ConnectionTestResult> {
        let mut state = self.state.lock().await;
        state.test_calls += 1;
        match &state.test_outcome {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(failure)) => fail(failure),
            None => Ok(ConnectionTestResult {
                success: true,
                message: "pong".to_string(),
            }),
        }
    }
}

/// Answers every confirmation with a fixed reply and records what was shown.
#[derive(Clone)]
pub struct ScriptedPrompt {
    answer: bool,
    pub confirmations: Arc<StdMutex<Vec<String>>>,
    pub alerts: Arc<StdMutex<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirmations: Arc::new(StdMutex::new(Vec::new())),
            alerts: Arc::new(StdMutex::new(Vec::new())),
        }
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub routes: Arc<StdMutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}
