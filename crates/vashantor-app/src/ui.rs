use std::io::Write;
use std::path::{Path, PathBuf};

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use vashantor_core::render::{render_html_error, render_html_page, render_text_page};
use vashantor_types::{AppEvent, PageView};

pub const HELP: &str = "\
Commands:
  load [dialect] [split]   load a dialect file (defaults to the current selection)
  dialect <name>           select a dialect
  split <n>                select a split (250 records each)
  next | n                 next page
  prev | p                 previous page
  dialects                 list known dialects
  help                     show this help
  quit                     exit";

/// Terminal front end: prints everything the backend sends
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    html_out: Option<PathBuf>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            biased;
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => break,
        };

        match event {
            AppEvent::BackendReady => {
                tracing::debug!("[UI] Backend ready");
                println!("Type `help` for commands.");
            }
            AppEvent::Loading { label } => {
                println!("Loading {label}...");
            }
            AppEvent::ShowPage(page) => {
                tracing::debug!("[UI] Showing {} rows", page.rows.len());
                println!("{}", render_text_page(&page));
                if let Some(path) = &html_out {
                    write_snapshot(path, &page).await;
                }
            }
            AppEvent::ShowError(message) => {
                println!("{message}");
                // The previous page is no longer on screen
                if let Some(path) = &html_out {
                    write_error_snapshot(path, &message).await;
                }
            }
            AppEvent::ShowDialects(dialects) => {
                println!("Dialects: {}", dialects.join(", "));
            }
            AppEvent::Notice(message) => {
                println!("{message}");
            }
            _ => {}
        }
        print!("> ");
        let _ = std::io::stdout().flush();
    }

    tracing::info!("[UI] Stopping");
    Ok(())
}

pub async fn write_snapshot(path: &Path, page: &PageView) {
    write_html(path, render_html_page(page)).await;
}

pub async fn write_error_snapshot(path: &Path, message: &str) {
    write_html(path, render_html_error(message)).await;
}

async fn write_html(path: &Path, html: String) {
    match tokio::fs::write(path, html).await {
        Ok(()) => tracing::debug!("[UI] Wrote {}", path.display()),
        Err(e) => tracing::warn!("[UI] Failed to write {}: {}", path.display(), e),
    }
}
