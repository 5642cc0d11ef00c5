use crate::domain::model::{
    ConnectionTestResult, ImportFile, ImportResult, NotificationResult, Route, SelectionPolicy,
    Student,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Backend operations. Implementations return `RosterError::Api` with an
/// already-normalized message for every failure.
#[async_trait]
pub trait StudentGateway: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Student>>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn list_selected(&self) -> Result<Vec<Student>>;
    async fn import(&self, file: &ImportFile) -> Result<ImportResult>;
    async fn notify_selected(&self) -> Result<NotificationResult>;
    async fn test_connection(&self) -> Result<ConnectionTestResult>;
}

/// Blocking user dialogs: yes/no confirmations and dismissible alerts.
pub trait Prompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn selection_threshold(&self) -> f64;
    fn request_timeout_secs(&self) -> u64;
    fn redirect_delay_secs(&self) -> u64;

    fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy::new(self.selection_threshold())
    }

    fn redirect_delay(&self) -> Duration {
        Duration::from_secs(self.redirect_delay_secs())
    }
}
