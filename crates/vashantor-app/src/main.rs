use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use vashantor_config::Config;
use vashantor_config::log::{LogConfig, LogFormat};
use vashantor_core::Pagination;
use vashantor_core::dataset::require_dialect;
use vashantor_core::render::render_text_page;
use vashantor_types::AppEvent;

pub mod controller;
pub mod events;
pub mod io;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::load_dataset::fetch_dataset;
use self::io::{Selection, spawn_stdin_reader};
use self::state::AppState;

/// Browse the Vashantor dialect translation test sets
#[derive(Parser, Debug)]
#[command(name = "vashantor", version)]
struct Args {
    /// JSON config file, defaults come from VASHANTOR_* env vars
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dialect to load on start
    #[arg(short, long)]
    dialect: Option<String>,

    /// Split to load, 250 records each
    #[arg(short, long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    split: Option<usize>,

    /// Directory or http(s) URL holding the dialect files
    #[arg(long)]
    base: Option<String>,

    /// Write every rendered page to this HTML file
    #[arg(long)]
    html_out: Option<PathBuf>,

    /// Print the first page of the selection and exit
    #[arg(long)]
    once: bool,

    /// Print the known dialects and exit
    #[arg(long)]
    list_dialects: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = build_config(&args)?;

    init_tracing(&config.log);
    match &args.config {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::debug!("Using environment config"),
    }

    if args.list_dialects {
        println!("{}", config.ui.dialects.join("\n"));
        return Ok(());
    }

    let source = vashantor_source::from_config(&config.source)
        .context("Failed to set up dataset source")?;
    let selection = Selection::new(
        args.dialect.clone(),
        args.split.unwrap_or(config.ui.default_split),
    );
    let state = Arc::new(AppState::new(config, Arc::from(source)));

    if args.once {
        return run_once(state, selection).await;
    }

    run(state, selection).await
}

/// Config file or env defaults, then command line overrides
fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };
    if let Some(base) = &args.base {
        config.source.base = base.clone();
    }
    if let Some(path) = &args.html_out {
        config.ui.html_out = Some(path.clone());
    }
    Ok(config)
}

fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Load one selection, print its first page and exit
async fn run_once(state: Arc<AppState>, selection: Selection) -> anyhow::Result<()> {
    let html_out = state.config.ui.html_out.as_deref();

    let loaded = match require_dialect(selection.dialect.as_deref()) {
        Ok(dialect) => fetch_dataset(state.source.as_ref(), dialect, selection.split).await,
        Err(e) => Err(e),
    };
    let dataset = match loaded {
        Ok(dataset) => dataset,
        Err(e) => {
            let message = e.user_message();
            if let Some(path) = html_out {
                ui::write_error_snapshot(path, &message).await;
            }
            anyhow::bail!(message);
        }
    };

    let page = Pagination::new(dataset.len()).view(&dataset.label(), &dataset.records);
    println!("{}", render_text_page(&page));

    if let Some(path) = html_out {
        ui::write_snapshot(path, &page).await;
    }

    Ok(())
}

/// Interactive session until `quit`, end of input or Ctrl+C
async fn run(state: Arc<AppState>, selection: Selection) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let initial_load = selection.dialect.is_some();
    let mut tasks = controller.spawn_tasks(selection.clone(), spawn_stdin_reader());

    if initial_load {
        controller
            .sender()
            .send(AppEvent::Load {
                dialect: selection.dialect,
                split: selection.split,
            })
            .await?;
    }

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task failed during shutdown: {e}");
        }
    }

    println!();
    Ok(())
}
