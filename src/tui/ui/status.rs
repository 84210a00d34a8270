//! Loading, error and empty screen rendering

use ratatui::{style::Color, Frame};
use crate::tui::app::App;
use super::helpers::{centered_message, help_bar, screen_chunks, title_bar, TITLE};

/// Renders the loading screen
pub fn render_loading(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.size());

    f.render_widget(title_bar(TITLE), chunks[0]);

    let text = if app.is_loading() {
        "Loading items..."
    } else {
        "Waiting to load items..."
    };
    f.render_widget(centered_message(text.to_string(), Color::Yellow), chunks[1]);
    f.render_widget(help_bar("q: Quit"), chunks[2]);
}

/// Renders the error screen with a retry hint
pub fn render_error(f: &mut Frame, message: &str) {
    let chunks = screen_chunks(f.size());

    f.render_widget(title_bar(TITLE), chunks[0]);
    f.render_widget(
        centered_message(format!("Error: {}", message), Color::Red),
        chunks[1],
    );
    f.render_widget(help_bar("r: Retry | q: Quit"), chunks[2]);
}

/// Renders the screen shown when no item has a usable name
pub fn render_empty(f: &mut Frame) {
    let chunks = screen_chunks(f.size());

    f.render_widget(title_bar(TITLE), chunks[0]);
    f.render_widget(
        centered_message("No items available".to_string(), Color::DarkGray),
        chunks[1],
    );
    f.render_widget(help_bar("r: Reload | q: Quit"), chunks[2]);
}
