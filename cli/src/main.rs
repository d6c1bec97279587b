//! CLI entrypoint for matrix-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use matrix_application::{ComputeUseCase, EngineParams, HandleMessageUseCase, MAX_PRECISION};
use matrix_domain::{ConfigIssue, OperationKind, OutputFormat};
use matrix_infrastructure::{
    ConfigLoader, FileConfig, InMemoryConversationRepository, JsonlConversationLogger,
};
use matrix_presentation::{ChatRepl, Cli, ConsoleFormatter, OneShotInput};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.quiet, config.logging.file.as_deref())?;

    info!("Starting matrix-chat");

    report_config_issues(&config.validate())?;
    let params = engine_params(&cli, &config)?;

    ConsoleFormatter::set_color(config.output.color && !cli.no_color);

    // One-shot mode
    if let Some(operation) = cli.operation() {
        let format = cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default();
        return run_once(&cli, operation, params, format);
    }

    // === Dependency Injection ===
    let repository = Arc::new(InMemoryConversationRepository::new(
        config.session.idle_timeout(),
    ));
    spawn_purge_task(Arc::clone(&repository));

    let mut handler = HandleMessageUseCase::new(repository, ComputeUseCase::new(params));
    if let Some(path) = config.logging.conversation_log.as_deref() {
        let path = expand_home(path);
        match JsonlConversationLogger::open(&path) {
            Ok(logger) => {
                info!("Conversation log: {}", path.display());
                handler = handler.with_conversation_logger(Arc::new(logger));
            }
            Err(e) => warn!("Could not open conversation log {}: {}", path.display(), e),
        }
    }

    let repl = ChatRepl::new(handler)
        .with_banner(config.repl.show_banner && !cli.quiet)
        .with_history_file(config.repl.history_file.as_deref().map(expand_home));

    repl.run().await?;
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool, file: Option<&str>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match (verbose, quiet) {
        (0, true) => EnvFilter::new("error"),
        (0, false) => EnvFilter::new("warn"),
        (1, _) => EnvFilter::new("info"),
        (2, _) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let Some(file) = file else {
        builder.with_writer(std::io::stderr).init();
        return Ok(None);
    };

    let path = expand_home(file);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        &dir, file_name,
    ));
    builder.with_writer(writer).with_ansi(false).init();
    Ok(Some(guard))
}

/// Log warnings and fail on errors
fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    let mut errors = Vec::new();
    for issue in issues {
        if issue.is_error() {
            errors.push(issue.message.as_str());
        } else {
            warn!("{}", issue.message);
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

/// Engine parameters from config, with command-line flags taking precedence
fn engine_params(cli: &Cli, config: &FileConfig) -> Result<EngineParams> {
    let mut params = config.engine_params();

    if let Some(precision) = cli.precision {
        if precision > MAX_PRECISION {
            warn!(
                "--precision {} is above {}, clamping",
                precision, MAX_PRECISION
            );
        }
        params = params.with_precision(precision);
    }

    if let Some(max_dimension) = cli.max_dimension {
        if max_dimension == 0 {
            bail!("--max-dimension must be at least 1");
        }
        params = params.with_max_dimension(max_dimension);
    }

    Ok(params)
}

fn run_once(
    cli: &Cli,
    operation: OperationKind,
    params: EngineParams,
    format: OutputFormat,
) -> Result<()> {
    let Some(first) = cli.first.as_deref() else {
        bail!("{} needs --first FILE (\"-\" reads stdin)", operation);
    };
    if is_stdin(first) && cli.second.as_deref().is_some_and(is_stdin) {
        bail!("Only one operand can be read from stdin");
    }

    let input = OneShotInput {
        first: read_operand(first)?,
        second: cli.second.as_deref().map(read_operand).transpose()?,
        exponent: cli.exponent.clone(),
    };
    let request = input.into_request(operation, &params.limits)?;
    let output = ComputeUseCase::new(params).execute(&request)?;

    let text = match format {
        OutputFormat::Plain => ConsoleFormatter::format_plain(&output),
        OutputFormat::Json => ConsoleFormatter::format_json(&output),
    };
    println!("{}", text);
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_operand(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read matrix from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read matrix from {}", path.display()))
}

/// Periodically drop idle conversations so abandoned ones don't accumulate
fn spawn_purge_task(repository: Arc<InMemoryConversationRepository>) {
    let Some(timeout) = repository.idle_timeout() else {
        return;
    };
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(timeout);
        loop {
            ticker.tick().await;
            if repository.purge_expired().await > 0 {
                debug!("{} conversation(s) still active", repository.len().await);
            }
        }
    });
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
