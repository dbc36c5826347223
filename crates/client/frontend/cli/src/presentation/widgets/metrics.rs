//! Percentage tiles.

use client_frontend_core::{MetricTile, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

/// Render one bordered tile per metric, side by side in equal widths.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    tiles: &[MetricTile],
    theme: &T,
) {
    if tiles.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, tiles.len() as u32); tiles.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (tile, cell) in tiles.iter().zip(cells.iter()) {
        let paragraph = Paragraph::new(tile.display.as_str())
            .style(theme.style_metric(tile.metric, tile.value))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(tile.label));

        frame.render_widget(paragraph, *cell);
    }
}
