//! Grouped item list rendering

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use crate::tui::app::App;
use crate::tui::types::ListRow;
use super::helpers::{help_bar, screen_chunks, title_bar, TITLE};

/// Renders the grouped list, keeping the selected row in view
pub fn render_item_list(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.size());

    let title = format!(
        "{} ({} items in {} lists)",
        TITLE,
        app.state.visible_count(),
        app.state.groups.len()
    );
    f.render_widget(title_bar(&title), chunks[0]);

    let rows = app.rows();

    // Two rows of the body go to the border
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let offset = if visible > 0 && app.selected_index >= visible {
        app.selected_index + 1 - visible
    } else {
        0
    };

    let list_items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(i, row)| {
            let style = match row {
                ListRow::Header(_) => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                ListRow::Item(_) => Style::default().fg(Color::White),
            };
            let style = if i == app.selected_index {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            let indent = match row {
                ListRow::Header(_) => "",
                ListRow::Item(_) => "  ",
            };
            ListItem::new(Line::from(vec![Span::styled(
                format!("{}{}", indent, row.label()),
                style,
            )]))
        })
        .collect();

    let list = List::new(list_items).block(Block::default().borders(Borders::ALL).title("Items"));
    f.render_widget(list, chunks[1]);

    f.render_widget(help_bar("↑↓/jk: Scroll | r: Reload | q: Quit"), chunks[2]);
}
