pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::console::{ConsoleNavigator, ConsolePrompt};
pub use adapters::http::HttpStudentGateway;
pub use config::Settings;
pub use core::{
    display::StudentDisplay, import_students::ImportViewModel,
    selected_students::SelectedStudentsViewModel, student_list::StudentListViewModel,
};
pub use utils::error::{Result, RosterError};
