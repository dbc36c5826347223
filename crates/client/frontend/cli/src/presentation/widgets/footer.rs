//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::state::{AppMode, AppState};

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, theme: &RatatuiTheme) {
    let bindings: &[(&str, &str)] = match app_state.mode {
        AppMode::Normal => &[
            ("↑↓/jk", "Select"),
            ("←/h/-", "Decrement"),
            ("→/l/+", "Increment"),
            ("c", "Copy Stats"),
            ("r", "Reset All"),
            ("q", "Quit"),
        ],
        AppMode::ConfirmReset => &[("y", "Confirm reset"), ("any other key", "Cancel")],
    };

    let mut spans = Vec::with_capacity(bindings.len() * 3);
    for (index, (key, description)) in bindings.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(format!("[{key}]"), theme.key_hint()));
        spans.push(Span::raw(format!(" {description}")));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
