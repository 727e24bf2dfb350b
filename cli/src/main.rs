//! CLI entrypoint for EquaçãoPro
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use equacao_domain::Model;
use equacao_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, GeminiGateway, GeminiSettings,
    PulldownMarkdownRenderer,
};
use equacao_presentation::{Cli, ConsoleFormatter, TuiApp, TuiConfig};
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // === Configuration ===
    if cli.show_config {
        let config = load_config(&cli)?;
        let sources = ConfigLoader::config_sources(cli.config.as_ref());
        print!("{}", ConsoleFormatter::config_sources(&sources));
        let toml = config
            .redacted()
            .to_toml_string()
            .context("failed to serialize configuration")?;
        println!("{}", ConsoleFormatter::effective_config(&toml));
        return Ok(());
    }

    let config = load_config(&cli)?;
    if !cli.no_config
        && let Some(path) = ConfigLoader::missing_explicit_path(cli.config.as_ref())
    {
        eprintln!(
            "{}",
            ConsoleFormatter::warning(&format!(
                "config file {} not found, continuing without it",
                path.display()
            ))
        );
    }
    for issue in config.validate() {
        eprintln!("{}", ConsoleFormatter::warning(&issue.to_string()));
    }

    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, &config.logging);

    info!("Starting EquaçãoPro");

    // === Dependency Injection ===
    let mut settings = GeminiSettings::from(&config.gemini);
    if let Some(model) = cli.model.as_deref() {
        settings = settings.with_model(Model::from_id(model));
    }
    let gateway = Arc::new(GeminiGateway::new(settings)?);
    let renderer = Arc::new(PulldownMarkdownRenderer::new());
    info!("Using model {}", gateway.model());

    let tui_config = TuiConfig {
        tick_rate_ms: config.tui.tick_rate_ms,
        show_hints: config.tui.show_hints,
    };

    let mut app = TuiApp::new(gateway.clone(), renderer, tui_config)
        .with_model_name(gateway.model().to_string());
    app.run().await.context("terminal UI failed")?;

    info!("EquaçãoPro exited");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow!("failed to load configuration: {}", e))
}

/// Log to a daily rolling file; the terminal belongs to the UI.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> WorkerGuard {
    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let writer = match open_log_file(logging) {
        Ok(appender) => Box::new(appender) as Box<dyn Write + Send>,
        Err(e) => {
            eprintln!(
                "{}",
                ConsoleFormatter::warning(&format!("{:#}; logging is disabled", e))
            );
            Box::new(std::io::sink())
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(writer);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    guard
}

fn open_log_file(logging: &FileLoggingConfig) -> Result<RollingFileAppender> {
    let directory = logging.resolved_directory();
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&logging.file_prefix)
        .build(&directory)
        .with_context(|| format!("failed to open log file in {}", directory.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging_in(directory: &std::path::Path) -> FileLoggingConfig {
        FileLoggingConfig {
            directory: Some(directory.to_string_lossy().into_owned()),
            ..FileLoggingConfig::default()
        }
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let directory = root.path().join("nested").join("logs");

        assert!(open_log_file(&logging_in(&directory)).is_ok());
        assert!(directory.is_dir());
    }

    #[test]
    fn test_open_log_file_reports_unwritable_directory() {
        // A regular file where the directory should be
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let directory = blocker.path().join("logs");

        let err = open_log_file(&logging_in(&directory)).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to create log directory"));
    }
}
