use std::time::Duration;

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use vashantor_core::Pagination;
use vashantor_types::{AppEvent, Record};

use crate::ui::ui_loop;

fn page_event() -> AppEvent {
    let records: Vec<Record> = (1..=7)
        .map(|i| Record::new(format!("standard {i}"), format!("Sylhet {i}"), "Sylhet"))
        .collect();
    AppEvent::ShowPage(Pagination::new(records.len()).view("Sylhet (Split 1)", &records))
}

/// Feeds `events` through the UI loop and waits for it to finish
async fn run_ui(events: Vec<AppEvent>, html_out: &std::path::Path) {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let handle = tokio::spawn(ui_loop(
        rx,
        Some(html_out.to_path_buf()),
        CancellationToken::new(),
    ));

    for event in events {
        tx.send(event).await.unwrap();
    }
    drop(tx);

    let result = timeout(Duration::from_secs(2), handle)
        .await
        .expect("ui loop did not stop")
        .expect("ui loop panicked");
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_page_is_written_to_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");

    run_ui(vec![page_event()], &path).await;

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Sylhet (Split 1)"));
    assert!(html.contains("Showing 1-5 of 7"));
}

#[tokio::test]
async fn test_error_replaces_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");

    run_ui(
        vec![
            page_event(),
            AppEvent::ShowError("Error loading data: Failed to load file: 404".to_string()),
        ],
        &path,
    )
    .await;

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Error loading data: Failed to load file: 404"));
    assert!(!html.contains("Sylhet 1"));
    assert!(!html.contains("Showing 1-5 of 7"));
}

#[tokio::test]
async fn test_new_page_replaces_error_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");

    run_ui(
        vec![
            AppEvent::ShowError("Please select a dialect".to_string()),
            page_event(),
        ],
        &path,
    )
    .await;

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(!html.contains("error-message"));
    assert!(html.contains("Showing 1-5 of 7"));
}
