// TUI Tests - Testing App state transitions and rendering

use crate::fetcher::{MockBehavior, MockFetcher};
use crate::item::Item;
use crate::processor::{ItemProcessor, ItemState};
use crate::tui::types::LOAD_FAILED_MESSAGE;
use crate::tui::ui::ui;
use crate::tui::{App, ListRow, Screen};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Helper to create an App over a mock on the current runtime
fn create_test_app(mock: MockFetcher) -> (App, Arc<MockFetcher>) {
    let mock = Arc::new(mock);
    let app = App::new(ItemProcessor::new(mock.clone()), Handle::current());
    (app, mock)
}

/// Start a load and drive it to completion
async fn load(app: &mut App) {
    app.start_load();
    wait_for_load(app).await;
}

async fn wait_for_load(app: &mut App) {
    for _ in 0..1000 {
        if app.poll_load() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("load did not complete");
}

/// Render the app into an off-screen buffer and return its text
fn render_to_string(app: &App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("Failed to create terminal");
    terminal.draw(|f| ui(f, app)).expect("Failed to draw");

    let buffer = terminal.backend().buffer();
    buffer.content.iter().map(|cell| cell.symbol()).collect()
}

fn grouped_items() -> Vec<Item> {
    vec![
        Item::new(1, 1, Some("Apple")),
        Item::new(2, 2, Some("Banana")),
        Item::new(3, 1, Some("Cherry")),
        Item::new(4, 2, Some("Date")),
    ]
}

#[test]
fn test_screen_after_load() {
    assert_eq!(
        Screen::after_load(&ItemState::default()),
        Screen::Error(LOAD_FAILED_MESSAGE.to_string())
    );
    assert_eq!(
        Screen::after_load(&ItemState::from_items(vec![Item::new(1, 1, None)])),
        Screen::Empty
    );
    assert_eq!(
        Screen::after_load(&ItemState::from_items(grouped_items())),
        Screen::List
    );
}

#[test]
fn test_list_row_labels() {
    assert_eq!(ListRow::Header(3).label(), "List ID: 3");
    assert_eq!(ListRow::Item("Apple".to_string()).label(), "Apple");
}

#[tokio::test]
async fn test_app_starts_loading() {
    let (mut app, _) = create_test_app(MockFetcher::sample());
    assert_eq!(app.current_screen, Screen::Loading);
    assert!(!app.is_loading());
    assert!(!app.poll_load());

    app.start_load();
    assert!(app.is_loading());
    assert_eq!(app.current_screen, Screen::Loading);
}

#[tokio::test]
async fn test_successful_load_shows_list() {
    let (mut app, mock) = create_test_app(MockFetcher::with_items(grouped_items()));

    load(&mut app).await;

    assert_eq!(app.current_screen, Screen::List);
    assert!(!app.is_loading());
    assert_eq!(mock.call_count(), 1);
    assert_eq!(
        app.rows(),
        vec![
            ListRow::Header(1),
            ListRow::Item("Apple".to_string()),
            ListRow::Item("Cherry".to_string()),
            ListRow::Header(2),
            ListRow::Item("Banana".to_string()),
            ListRow::Item("Date".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_failed_load_shows_error() {
    let (mut app, _) = create_test_app(MockFetcher::failing());

    load(&mut app).await;

    assert_eq!(app.current_screen, Screen::Error(LOAD_FAILED_MESSAGE.to_string()));
    assert!(app.rows().is_empty());
}

#[tokio::test]
async fn test_empty_payload_is_reported_as_failure() {
    let (mut app, _) = create_test_app(MockFetcher::empty());

    load(&mut app).await;

    assert_eq!(app.current_screen, Screen::Error(LOAD_FAILED_MESSAGE.to_string()));
}

#[tokio::test]
async fn test_all_names_filtered_shows_empty() {
    let (mut app, _) = create_test_app(MockFetcher::with_items(vec![
        Item::new(1, 1, Some("")),
        Item::new(2, 2, None),
    ]));

    load(&mut app).await;

    assert_eq!(app.current_screen, Screen::Empty);
    assert_eq!(app.state.all_items.len(), 2);
}

#[tokio::test]
async fn test_retry_after_error() {
    let (mut app, mock) = create_test_app(MockFetcher::failing());

    load(&mut app).await;
    assert!(matches!(app.current_screen, Screen::Error(_)));

    mock.set_behavior(MockBehavior::Items(grouped_items())).await;
    app.retry();
    assert_eq!(app.current_screen, Screen::Loading);
    wait_for_load(&mut app).await;

    assert_eq!(app.current_screen, Screen::List);
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_start_load_is_ignored_while_in_flight() {
    let (mut app, mock) = create_test_app(MockFetcher::sample());

    app.start_load();
    app.start_load();
    app.retry();
    wait_for_load(&mut app).await;

    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_selection_stays_in_bounds() {
    let (mut app, _) = create_test_app(MockFetcher::with_items(grouped_items()));
    load(&mut app).await;

    app.previous();
    assert_eq!(app.selected_index, 0);

    for _ in 0..20 {
        app.next();
    }
    assert_eq!(app.selected_index, app.rows().len() - 1);

    app.previous();
    assert_eq!(app.selected_index, app.rows().len() - 2);
}

#[tokio::test]
async fn test_render_list_screen() {
    let (mut app, _) = create_test_app(MockFetcher::with_items(grouped_items()));
    load(&mut app).await;

    let text = render_to_string(&app);

    assert!(text.contains("Items List"));
    assert!(text.contains("List ID: 1"));
    assert!(text.contains("List ID: 2"));
    assert!(text.contains("Cherry"));
}

#[tokio::test]
async fn test_render_error_and_empty_screens() {
    let (mut app, mock) = create_test_app(MockFetcher::failing());
    load(&mut app).await;

    let text = render_to_string(&app);
    assert!(text.contains("Error: Failed to load items"));
    assert!(text.contains("r: Retry"));

    mock.set_behavior(MockBehavior::Items(vec![Item::new(1, 1, Some(""))])).await;
    app.retry();
    wait_for_load(&mut app).await;

    let text = render_to_string(&app);
    assert!(text.contains("No items available"));
}

#[tokio::test]
async fn test_render_loading_screen() {
    let (mut app, _) = create_test_app(MockFetcher::sample());
    app.start_load();

    let text = render_to_string(&app);
    assert!(text.contains("Loading items..."));
}
