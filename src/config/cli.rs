use crate::adapters::render::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster")]
#[command(about = "Manage the student roster through the backend API")]
pub struct CliConfig {
    /// Base API URL; `/Students` is appended
    #[arg(long, env = "ROSTER_API_URL")]
    pub api_url: Option<String>,

    /// TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Final score at or above which a student counts as selected
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(short, long, help = "Answer yes to every confirmation")]
    pub yes: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every student
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Delete a student by id
    Delete { id: i64 },
    /// List students whose final score meets the threshold
    Selected {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Import students from an .xlsx or .xls file
    Import { path: PathBuf },
    /// Email every selected student
    Notify,
    /// Check that the API answers
    Test,
}

impl CliConfig {
    /// Defaults, overridden by the config file, overridden by flags and env.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading settings from {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }
        if let Some(api_url) = &self.api_url {
            settings.api_base_url = api_url.clone();
        }
        if let Some(threshold) = self.threshold {
            settings.selection_threshold = threshold;
        }
        if let Some(timeout) = self.timeout {
            settings.request_timeout_secs = timeout;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_subcommands() {
        let config = CliConfig::try_parse_from(["roster", "--yes", "delete", "42"]).unwrap();
        assert!(config.yes);
        assert!(matches!(config.command, Command::Delete { id: 42 }));

        let config = CliConfig::try_parse_from(["roster", "list", "--format", "csv"]).unwrap();
        assert!(matches!(
            config.command,
            Command::List {
                format: OutputFormat::Csv
            }
        ));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://from-file/api\"\ntimeout_seconds = 9\n\n[selection]\nthreshold = 3.5"
        )
        .unwrap();

        let config = CliConfig {
            api_url: Some("http://from-flag/api".to_string()),
            config: Some(file.path().to_path_buf()),
            threshold: None,
            timeout: None,
            yes: false,
            verbose: false,
            json_logs: false,
            command: Command::Test,
        };

        let settings = config.resolve().unwrap();
        assert_eq!(settings.api_base_url, "http://from-flag/api");
        assert_eq!(settings.request_timeout_secs, 9);
        assert_eq!(settings.selection_threshold, 3.5);
    }
}
