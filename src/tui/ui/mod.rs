//! UI rendering module - screen-specific rendering functions
//!
//! Each screen has its own file; shared pieces live in `helpers`.

mod helpers;
mod item_list;
mod status;

use ratatui::Frame;
use crate::tui::types::Screen;
use crate::tui::app::App;

// Re-export render functions
pub use item_list::render_item_list;
pub use status::{render_empty, render_error, render_loading};

// Re-export helper functions
pub use helpers::{centered_message, screen_chunks};

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Loading => render_loading(f, app),
        Screen::Error(message) => render_error(f, message),
        Screen::Empty => render_empty(f),
        Screen::List => render_item_list(f, app),
    }
}
