use crate::domain::model::{SelectionPolicy, Student};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const SELECTED_TEXT: &str = "SELECTED";
pub const NOT_SELECTED_TEXT: &str = "Not Selected";

/// Presentation helpers shared by the list and selected-subset screens.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentDisplay {
    policy: SelectionPolicy,
}

impl StudentDisplay {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn is_selected(&self, final_score: f64) -> bool {
        self.policy.is_selected(final_score)
    }

    pub fn status_text(&self, final_score: f64) -> &'static str {
        if self.is_selected(final_score) {
            SELECTED_TEXT
        } else {
            NOT_SELECTED_TEXT
        }
    }

    pub fn badge_class(&self, final_score: f64) -> &'static str {
        if self.is_selected(final_score) {
            "badge-selected"
        } else {
            "badge-not-selected"
        }
    }

    pub fn selected_count(&self, students: &[Student]) -> usize {
        self.policy.selected_count(students)
    }

    pub fn total_count(&self, students: &[Student]) -> usize {
        students.len()
    }
}

pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Short `M/D/YYYY` date. Input that does not parse is returned unchanged.
pub fn format_date(iso: &str) -> String {
    let trimmed = iso.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}
