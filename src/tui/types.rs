//! Core types for TUI screens

use crate::processor::ItemState;

/// Message shown when a load produced no items at all
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load items";

/// Application screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// A load is in flight
    Loading,
    /// The last load yielded nothing; offers a retry
    Error(String),
    /// Items arrived but none had a usable name
    Empty,
    /// Grouped item list
    List,
}

impl Screen {
    /// Screen to show once a load has completed
    ///
    /// A failed fetch and a successful fetch of zero items both leave
    /// `all_items` empty and are reported the same way.
    pub fn after_load(state: &ItemState) -> Self {
        if state.all_items.is_empty() {
            Self::Error(LOAD_FAILED_MESSAGE.to_string())
        } else if state.is_empty() {
            Self::Empty
        } else {
            Self::List
        }
    }
}

/// One rendered line of the grouped list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// Section header for a group
    Header(i64),
    /// Item name inside a group
    Item(String),
}

impl ListRow {
    /// Text to display for this row
    pub fn label(&self) -> String {
        match self {
            Self::Header(list_id) => format!("List ID: {}", list_id),
            Self::Item(name) => name.clone(),
        }
    }
}
