//! Messages widget displaying recent notifications.

use client_frontend_core::{MessageEntry, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

/// Render the message log panel.
///
/// `messages` are newest first; they are drawn bottom-to-top so the newest
/// sits at the bottom. Padding keeps the panel height stable.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    messages: &[MessageEntry],
    visible_lines: usize,
    theme: &T,
) {
    let mut items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(entry.text.as_str()).style(theme.style_message(entry.level)))
        .collect();

    while items.len() < visible_lines {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
