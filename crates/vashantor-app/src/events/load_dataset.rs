use std::sync::Arc;

use kanal::AsyncSender;
use vashantor_core::dataset::require_dialect;
use vashantor_core::{Dataset, LoadError, ViewState};
use vashantor_source::DatasetSource;
use vashantor_types::AppEvent;

use crate::state::AppState;

/// Result of a fetch task, tagged with the request that started it
#[derive(Debug)]
pub struct LoadCompletion {
    pub generation: u64,
    pub result: Result<Dataset, LoadError>,
}

/// Fetch, parse and slice one dialect file
pub async fn fetch_dataset(
    source: &dyn DatasetSource,
    dialect: &str,
    split: usize,
) -> Result<Dataset, LoadError> {
    tracing::info!("Loading {} (split {})", source.location(dialect), split);
    let text = source.fetch(dialect).await?;
    let dataset = Dataset::from_text(dialect, split, &text)?;

    if dataset.skipped > 0 {
        tracing::debug!("{} malformed rows dropped", dataset.skipped);
    }
    tracing::info!("Loaded {} records for {}", dataset.len(), dataset.label());
    Ok(dataset)
}

pub async fn handle_load(
    state: Arc<AppState>,
    view: &mut ViewState,
    dialect: Option<String>,
    split: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    done_tx: &AsyncSender<LoadCompletion>,
) -> anyhow::Result<()> {
    let dialect = match require_dialect(dialect.as_deref()) {
        Ok(name) => name.to_string(),
        Err(e) => {
            tracing::warn!("Load requested without a dialect");
            app_to_ui_tx.send(AppEvent::ShowError(e.user_message())).await?;
            return Ok(());
        }
    };

    let generation = view.begin_load();
    tracing::debug!("Load #{} started for {}", generation, dialect);

    app_to_ui_tx
        .send(AppEvent::Loading {
            label: format!("{dialect} (Split {split})"),
        })
        .await?;

    let source = state.source.clone();
    let done_tx = done_tx.clone();
    tokio::spawn(async move {
        let result = fetch_dataset(source.as_ref(), &dialect, split).await;
        if let Err(e) = done_tx.send(LoadCompletion { generation, result }).await {
            tracing::error!("Failed to report load #{}: {}", generation, e);
        }
    });

    Ok(())
}

pub async fn handle_load_finished(
    view: &mut ViewState,
    completion: LoadCompletion,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let LoadCompletion { generation, result } = completion;

    match result {
        Ok(dataset) => match view.with_dataset(generation, dataset) {
            Some(next) => {
                *view = next;
                if let Some(page) = view.page_view() {
                    app_to_ui_tx.send(AppEvent::ShowPage(page)).await?;
                }
            }
            None => tracing::debug!("Discarding superseded load #{}", generation),
        },
        Err(e) => {
            if view.fail_load(generation) {
                tracing::error!("Load #{} failed: {}", generation, e);
                app_to_ui_tx.send(AppEvent::ShowError(e.user_message())).await?;
            } else {
                tracing::debug!("Ignoring failure of superseded load #{}: {}", generation, e);
            }
        }
    }

    Ok(())
}
