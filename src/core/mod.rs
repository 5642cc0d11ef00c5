pub mod display;
pub mod failure;
pub mod import_students;
pub mod selected_students;
pub mod student_list;

pub use crate::domain::model::{ImportFile, Route, SelectionPolicy, Student};
pub use crate::domain::ports::{ConfigProvider, Navigator, Prompt, StudentGateway};
pub use crate::utils::error::Result;
