//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{MessageLevel, MetricBand, PresentationMapper};
use ratatui::style::{Color, Modifier, Style};
use stats_core::Metric;

/// Ratatui-specific theme implementing PresentationMapper.
///
/// This provides consistent color schemes and styling rules for the CLI.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_counter(&self, value: u32, selected: bool) -> Self::Style {
        let color = if value == 0 {
            Color::DarkGray
        } else {
            Color::White
        };

        let style = Style::default().fg(color);
        if selected {
            self.emphasize_selected(style)
        } else {
            style
        }
    }

    fn style_metric(&self, _metric: Metric, value: f64) -> Self::Style {
        let color = match MetricBand::of(value) {
            MetricBand::Empty => Color::DarkGray,
            MetricBand::Negative => Color::LightRed,
            MetricBand::Positive => Color::LightGreen,
            MetricBand::Overflow => Color::Magenta,
        };

        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn emphasize_selected(&self, base_style: Self::Style) -> Self::Style {
        base_style
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}

impl RatatuiTheme {
    /// Create a new RatatuiTheme instance.
    pub fn new() -> Self {
        Self
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }
}

impl Default for RatatuiTheme {
    fn default() -> Self {
        Self::new()
    }
}
