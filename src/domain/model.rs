use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub college_info: CollegeInfo,
    pub graduation_details: GraduationDetails,
    #[serde(default)]
    pub codility_scores: Vec<CodilityScore>,
    pub midterm_score: f64,
    pub gc_score: f64,
    pub final_score: f64,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeInfo {
    pub college_name: String,
    pub department: String,
    pub major: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraduationDetails {
    /// ISO-8601 date or date-time as sent by the backend.
    pub graduation_date: String,
    pub cgpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodilityScore {
    pub test_name: String,
    pub score: f64,
}

pub const DEFAULT_SELECTION_THRESHOLD: f64 = 3.1;

/// The single source of the "selected" cut-off. The backend filters
/// `/Students/selected` with the same value, so both sides must be
/// configured together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPolicy {
    pub threshold: f64,
}

impl SelectionPolicy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn is_selected(&self, final_score: f64) -> bool {
        final_score >= self.threshold
    }

    pub fn selected_count(&self, students: &[Student]) -> usize {
        students
            .iter()
            .filter(|s| self.is_selected(s.final_score))
            .count()
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTION_THRESHOLD)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub selected_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTestResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLS_MIME: &str = "application/vnd.ms-excel";
pub const ALLOWED_IMPORT_TYPES: [&str; 2] = [XLSX_MIME, XLS_MIME];

/// A spreadsheet picked for upload, held in memory until submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImportFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> crate::utils::error::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let content_type = content_type_for(path).to_string();
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn is_spreadsheet(&self) -> bool {
        ALLOWED_IMPORT_TYPES.contains(&self.content_type.as_str())
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("xlsx") => XLSX_MIME,
        Some("xls") => XLS_MIME,
        Some("csv") => "text/csv",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Students,
    SelectedStudents,
    ImportStudents,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Students => "/students",
            Route::SelectedStudents => "/students/selected",
            Route::ImportStudents => "/students/import",
        }
    }

    /// Resolves a path to a route; the empty path redirects to the list.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" | "/students" => Some(Route::Students),
            "/students/selected" => Some(Route::SelectedStudents),
            "/students/import" => Some(Route::ImportStudents),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
