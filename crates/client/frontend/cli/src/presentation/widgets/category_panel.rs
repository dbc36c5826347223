//! Category panel listing counters with decrement/increment affordances.

use client_frontend_core::{CategoryPanel, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use stats_core::StatField;

/// Width reserved for the counter label column.
const LABEL_WIDTH: usize = 20;

/// Render a single category panel.
///
/// Each row reads `Label   [-]  value  [+]`. The row for `selected` is
/// emphasized and the panel containing it gets a highlighted border.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    panel: &CategoryPanel,
    selected: StatField,
    theme: &T,
) {
    let lines: Vec<Line> = panel
        .rows
        .iter()
        .map(|row| {
            let is_selected = row.field == selected;
            let marker = if is_selected { "> " } else { "  " };
            Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{:<width$}", row.label, width = LABEL_WIDTH)),
                Span::styled("[-] ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{:>5}", row.value),
                    theme.style_counter(row.value, is_selected),
                ),
                Span::styled(" [+]", Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let mut block = Block::default().borders(Borders::ALL).title(panel.title);
    if selected.category() == panel.category {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
