//! Header widget displaying the title and storage location.

use client_frontend_core::StatsViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel.
pub fn render(frame: &mut Frame, area: Rect, view_model: &StatsViewModel) {
    let text = vec![Line::from(vec![
        Span::styled(
            "Player Stats",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Saved to: "),
        Span::styled(&view_model.location, Style::default().fg(Color::DarkGray)),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Volleyball"));

    frame.render_widget(paragraph, area);
}
