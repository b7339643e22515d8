use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use vashantor_core::ViewState;
use vashantor_types::AppEvent;

use crate::state::AppState;

pub mod change_page;
pub mod load_dataset;

use change_page::handle_page_change;
use load_dataset::{LoadCompletion, handle_load, handle_load_finished};

/// App's main loop, sole owner of the view state
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (done_tx, done_rx) = kanal::bounded_async::<LoadCompletion>(16);
    let mut view = ViewState::new();

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => {
                let Ok(event) = event else {
                    tracing::info!("[EVENT_LOOP] Input channel closed");
                    break;
                };

                tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
                if !handle_events(
                    state.clone(),
                    &mut view,
                    &app_to_ui_tx,
                    &done_tx,
                    event,
                )
                .await?
                {
                    break;
                }
            }
            completion = done_rx.recv() => {
                handle_load_finished(&mut view, completion?, &app_to_ui_tx).await?;
            }
        }
    }

    Ok(())
}

/// Returns `false` when the app should stop
async fn handle_events(
    state: Arc<AppState>,
    view: &mut ViewState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    done_tx: &AsyncSender<LoadCompletion>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::Load { dialect, split } => {
            handle_load(state, view, dialect, split, app_to_ui_tx, done_tx).await?;
        }
        AppEvent::ChangePage(direction) => {
            handle_page_change(view, direction, app_to_ui_tx).await?;
        }
        AppEvent::ListDialects => {
            let dialects = state.config.ui.dialects.clone();
            app_to_ui_tx.send(AppEvent::ShowDialects(dialects)).await?;
        }
        AppEvent::Quit => {
            tracing::info!("Quit requested");
            return Ok(false);
        }
        AppEvent::Loading { .. }
        | AppEvent::ShowPage(_)
        | AppEvent::ShowError(_)
        | AppEvent::ShowDialects(_)
        | AppEvent::Notice(_)
        | AppEvent::BackendReady => {
            // UI-only events
            tracing::warn!("Ignoring UI-only event in backend");
        }
    }

    Ok(true)
}
