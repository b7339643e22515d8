use kanal::AsyncSender;
use vashantor_core::ViewState;
use vashantor_types::{AppEvent, Direction};

pub async fn handle_page_change(
    view: &mut ViewState,
    direction: Direction,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !view.change_page(direction) {
        tracing::debug!("Page change {:?} ignored", direction);
        return Ok(());
    }

    if let Some(page) = view.page_view() {
        tracing::debug!("Showing page {} of {}", page.current_page, page.total_pages);
        app_to_ui_tx.send(AppEvent::ShowPage(page)).await?;
    }

    Ok(())
}
