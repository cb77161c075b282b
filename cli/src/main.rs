//! CLI entrypoint for quotebook
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use quotebook_application::{
    AddQuoteInput, InMemoryStore, KeyValueStore, PersistenceGateway, QuoteDisplay, QuoteSession,
    SyncQuotesUseCase, messages,
};
use quotebook_domain::CategoryFilter;
use quotebook_infrastructure::{
    ConfigLoader, FileConfig, FileStorageConfig, HttpQuoteSource, JsonFileStore,
    storage::{session_id, session_store_path},
};
use quotebook_presentation::{Cli, Command, ConsoleDisplay, ConsoleFormatter, OutputConfig};
use std::io::BufRead;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Kept alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting quotebook");
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    if let Some(forced) = color_override(config.output.color) {
        colored::control::set_override(forced);
    }

    let output = OutputConfig {
        quiet: cli.quiet,
        echo_categories: matches!(
            cli.command,
            Some(Command::Select { .. }) | Some(Command::Watch { .. })
        ),
    };
    let display = ConsoleDisplay::new(output);

    // === Dependency Injection ===
    let persistence = build_persistence(&config.storage);
    let mut session = QuoteSession::open(persistence);

    match cli.command {
        None => {
            if session.restore_last_viewed(&display).is_none() {
                session.show_random(&display);
            }
        }
        Some(Command::Show { category }) => {
            let shown = match category {
                Some(c) => session.show_random_in(&CategoryFilter::parse(&c), &display),
                None => session.show_random(&display),
            };
            if shown.is_none() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Command::Last) => show_last(&session, &display),
        Some(Command::Add {
            text,
            category,
            author,
        }) => {
            let mut input = AddQuoteInput::new(text, category);
            if let Some(author) = author {
                input = input.with_author(author);
            }
            if session.add_quote(&input, &display).is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Command::List { category }) => {
            let filter = category.map(|c| CategoryFilter::parse(&c));
            let quotes = session.filtered(filter.as_ref());
            if quotes.is_empty() {
                display.show_message(messages::NO_QUOTES_FOR_CATEGORY);
            } else {
                print!("{}", ConsoleFormatter::format_list(&quotes));
            }
        }
        Some(Command::Categories) => {
            print!(
                "{}",
                ConsoleFormatter::format_categories(
                    &session.categories(),
                    session.selected_category()
                )
            );
        }
        Some(Command::Select { category }) => {
            session.select_category(CategoryFilter::parse(&category), &display);
        }
        Some(Command::Export { output }) => {
            return export_quotes(&session, &output, &display);
        }
        Some(Command::Import { path }) => {
            let Some(text) = read_import_file(&path, &display) else {
                return Ok(ExitCode::FAILURE);
            };
            if session.import_quotes(&text, &display).is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Command::Sync) => {
            let mut sync = build_sync(&config, None)?;
            let result = sync.execute(&mut session, &display).await;
            sync.wait_for_push().await;
            if result.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Command::Watch { interval }) => {
            let mut sync = build_sync(&config, interval)?;
            watch(&mut sync, &mut session, &display).await;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Only a disabled color setting is forced; otherwise colored follows the
/// terminal and `NO_COLOR`/`CLICOLOR`.
fn color_override(color_enabled: bool) -> Option<bool> {
    if color_enabled {
        None
    } else {
        Some(false)
    }
}

fn show_last(session: &QuoteSession, display: &dyn QuoteDisplay) {
    if session.restore_last_viewed(display).is_none() {
        display.show_message(messages::NO_LAST_VIEWED);
    }
}

fn read_import_file(path: &Path, display: &dyn QuoteDisplay) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            display.show_message(messages::READ_FAILED);
            None
        }
    }
}

fn init_logging(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(log_file) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let path = Path::new(log_file);
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", log_file))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Ok(Some(guard))
}

/// Durable store under the data directory and a per-session store under the
/// session directory. Either falls back to memory if its file cannot be opened.
fn build_persistence(storage: &FileStorageConfig) -> PersistenceGateway {
    let durable: Arc<dyn KeyValueStore> = match storage.durable_path() {
        Some(path) => open_or_memory(&path, "durable"),
        None => {
            warn!("No data directory available, quotes will not be saved");
            Arc::new(InMemoryStore::new())
        }
    };

    let id = session_id(storage.session_id.as_deref());
    let session_path = session_store_path(&storage.session_dir(), &id);
    debug!("Session '{}' stored at {}", id, session_path.display());
    let ephemeral = open_or_memory(&session_path, "session");

    PersistenceGateway::new(durable, ephemeral)
}

fn open_or_memory(path: &Path, label: &str) -> Arc<dyn KeyValueStore> {
    match JsonFileStore::open(path) {
        Ok(store) => {
            debug!("Using {} storage at {}", label, store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            warn!(
                "Could not open {} storage at {} ({}), using memory",
                label,
                path.display(),
                e
            );
            Arc::new(InMemoryStore::new())
        }
    }
}

fn build_sync(config: &FileConfig, interval_override: Option<u64>) -> Result<SyncQuotesUseCase> {
    let remote = HttpQuoteSource::new(config.sync.endpoint.clone(), config.sync.timeout())
        .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?
        .with_fetch_limit(config.sync.fetch_limit.max(1));

    let mut params = config.sync.to_sync_params();
    if let Some(secs) = interval_override {
        params = params.with_interval_secs(secs.max(1));
    }

    Ok(SyncQuotesUseCase::new(Arc::new(remote)).with_params(params))
}

fn export_quotes(
    session: &QuoteSession,
    path: &Path,
    display: &dyn QuoteDisplay,
) -> Result<ExitCode> {
    let json = match session.export_quotes() {
        Ok(json) => json,
        Err(e) => {
            warn!("Export failed: {}", e);
            display.show_message(e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(e) = std::fs::write(path, json) {
        warn!("Could not write {}: {}", path.display(), e);
        display.show_message(messages::EXPORT_FAILED);
        return Ok(ExitCode::FAILURE);
    }

    display.show_status(&format!(
        "Exported {} quotes to {}",
        session.store().len(),
        path.display()
    ));
    Ok(ExitCode::SUCCESS)
}

/// Periodic sync until Ctrl-C. Each line on stdin triggers an immediate sync.
async fn watch(
    sync: &mut SyncQuotesUseCase,
    session: &mut QuoteSession,
    display: &ConsoleDisplay,
) {
    let cancellation = CancellationToken::new();
    let (trigger_tx, trigger_rx) = mpsc::channel(1);

    // Blocking stdin reads stay on a plain thread so they never hold up shutdown
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            if line.is_err() || trigger_tx.is_closed() {
                break;
            }
            // A pending trigger already covers this one
            let _ = trigger_tx.try_send(());
        }
    });

    let ctrl_c = cancellation.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupted, stopping sync");
                ctrl_c.cancel();
            }
            Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
        }
    });

    sync.run_periodic(session, display, Some(trigger_rx), cancellation)
        .await;

    if let Some(report) = sync.last_report() {
        display.show_status(&messages::last_synced(report));
    }
}
