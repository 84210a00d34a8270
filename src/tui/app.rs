//! Main TUI application state and logic

use crate::processor::{ItemProcessor, ItemState};
use crate::tui::types::{ListRow, Screen};
use tokio::runtime::Handle;
use tokio::sync::{oneshot, watch};

/// Application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Index of the highlighted row in the list
    pub selected_index: usize,
    /// Should quit
    pub should_quit: bool,
    /// State observed at the end of the last load
    pub state: ItemState,
    /// Processor owning the fetch capability
    processor: ItemProcessor,
    /// Subscription to published state
    state_rx: watch::Receiver<ItemState>,
    /// Completion signal of the in-flight load
    load_done: Option<oneshot::Receiver<()>>,
    /// Runtime the loads are spawned on
    runtime: Handle,
}

impl App {
    /// Create new application
    ///
    /// Nothing is fetched until [`App::start_load`] is called.
    pub fn new(processor: ItemProcessor, runtime: Handle) -> Self {
        let state_rx = processor.subscribe();
        Self {
            current_screen: Screen::Loading,
            selected_index: 0,
            should_quit: false,
            state: ItemState::default(),
            processor,
            state_rx,
            load_done: None,
            runtime,
        }
    }

    /// Start loading items in the background
    ///
    /// Ignored while a load is already in flight.
    pub fn start_load(&mut self) {
        if self.load_done.is_some() {
            return;
        }

        self.current_screen = Screen::Loading;

        let (done_tx, done_rx) = oneshot::channel();
        let processor = self.processor.clone();
        self.runtime.spawn(async move {
            processor
                .load_items(move || {
                    let _ = done_tx.send(());
                })
                .await;
        });

        self.load_done = Some(done_rx);
    }

    /// True while a load is in flight
    pub fn is_loading(&self) -> bool {
        self.load_done.is_some()
    }

    /// Poll for load completion and pick the next screen
    ///
    /// Returns true if the load completed this call.
    pub fn poll_load(&mut self) -> bool {
        let Some(done_rx) = self.load_done.as_mut() else {
            return false;
        };

        match done_rx.try_recv() {
            Err(oneshot::error::TryRecvError::Empty) => false,
            // A dropped sender means the load task died; show whatever was published
            Ok(()) | Err(oneshot::error::TryRecvError::Closed) => {
                self.load_done = None;
                self.state = self.state_rx.borrow_and_update().clone();
                self.current_screen = Screen::after_load(&self.state);
                self.selected_index = 0;
                true
            }
        }
    }

    /// Load again from a settled screen
    pub fn retry(&mut self) {
        if self.current_screen != Screen::Loading {
            self.start_load();
        }
    }

    /// Flatten groups into section headers and item names
    pub fn rows(&self) -> Vec<ListRow> {
        self.state
            .groups
            .iter()
            .flat_map(|group| {
                std::iter::once(ListRow::Header(group.list_id)).chain(
                    group
                        .items
                        .iter()
                        .map(|item| ListRow::Item(item.display_name().to_string())),
                )
            })
            .collect()
    }

    /// Move selection down
    pub fn next(&mut self) {
        let len = self.rows().len();
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}
