use clap::Parser;
use student_roster::adapters::render::{write_students, OutputFormat};
use student_roster::core::{ConfigProvider, Route};
use student_roster::domain::model::ImportFile;
use student_roster::utils::error::{ErrorSeverity, Result, RosterError};
use student_roster::utils::{logger, validation::Validate};
use student_roster::{
    CliConfig, Command, ConsoleNavigator, ConsolePrompt, HttpStudentGateway, ImportViewModel,
    SelectedStudentsViewModel, Settings, StudentDisplay, StudentListViewModel,
};

type ListScreen = StudentListViewModel<HttpStudentGateway, ConsolePrompt>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::info!("Using API at {}", settings.api_base_url);

    if let Err(e) = run(cli, settings).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(cli: CliConfig, settings: Settings) -> Result<()> {
    let gateway = HttpStudentGateway::from_config(&settings)?;
    let display = StudentDisplay::new(settings.selection_policy());
    let prompt = ConsolePrompt::new(cli.yes);
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::List { format } => {
            let mut screen = StudentListViewModel::new(gateway, prompt, display);
            screen.init().await;
            exit_on_error(screen.error());
            write_students(&mut stdout, screen.students(), &display, format)?;
        }
        Command::Delete { id } => {
            let mut screen = StudentListViewModel::new(gateway, prompt, display);
            screen.init().await;
            exit_on_error(screen.error());

            let student = screen
                .students()
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or_else(|| RosterError::ValidationError(format!("No student with id {}", id)))?;
            screen.delete_student(&student).await;
            exit_on_error(screen.error());
            render_list(&screen, OutputFormat::Table)?;
        }
        Command::Selected { format } => {
            let mut screen = SelectedStudentsViewModel::new(gateway, display);
            screen.init().await;
            exit_on_error(screen.error());
            write_students(&mut stdout, screen.students(), &display, format)?;
        }
        Command::Import { path } => {
            let file = ImportFile::from_path(&path)?;
            let navigator = ConsoleNavigator::new();
            let mut screen = ImportViewModel::with_redirect_delay(
                gateway.clone(),
                navigator.clone(),
                settings.redirect_delay(),
            );

            screen.select_file(file);
            exit_on_error(screen.error());
            screen.submit().await;
            exit_on_error(screen.error());
            println!("✅ {}", screen.success());

            if let Some(redirect) = screen.take_redirect() {
                if let Err(e) = redirect.await {
                    tracing::warn!("Redirect did not complete: {}", e);
                }
            }
            if navigator.last_route() == Some(Route::Students) {
                let mut list = StudentListViewModel::new(gateway, prompt, display);
                list.init().await;
                exit_on_error(list.error());
                render_list(&list, OutputFormat::Table)?;
            }
        }
        Command::Notify => {
            let mut screen = StudentListViewModel::new(gateway, prompt, display);
            screen.notify_selected().await;
            exit_on_error(screen.error());
            if let Some(details) = screen.last_notification().and_then(|r| r.details.as_ref()) {
                println!("{}", serde_json::to_string_pretty(details)?);
            }
        }
        Command::Test => {
            let mut screen = StudentListViewModel::new(gateway, prompt, display);
            screen.test_api_connection().await;
            exit_on_error(screen.error());
        }
    }

    Ok(())
}

fn render_list(screen: &ListScreen, format: OutputFormat) -> Result<()> {
    write_students(
        &mut std::io::stdout(),
        screen.students(),
        screen.display(),
        format,
    )
}

fn exit_on_error(error: &str) {
    if !error.is_empty() {
        eprintln!("❌ {}", error);
        std::process::exit(1);
    }
}
