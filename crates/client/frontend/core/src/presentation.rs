//! Framework-agnostic presentation mapping traits.
//!
//! Each frontend (TUI, GUI, Web) implements [`PresentationMapper`] with its own
//! styling system while sharing the same view model.

use stats_core::Metric;

use crate::message::MessageLevel;

/// Framework-agnostic presentation mapper for stats views.
///
/// # Example
///
/// ```ignore
/// impl PresentationMapper for RatatuiTheme {
///     type Style = ratatui::style::Style;
///
///     fn style_counter(&self, value: u32, selected: bool) -> Self::Style {
///         let style = Style::default().fg(if value == 0 { Color::DarkGray } else { Color::White });
///         if selected { self.emphasize_selected(style) } else { style }
///     }
///     // ...
/// }
/// ```
pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Style for a counter value.
    fn style_counter(&self, value: u32, selected: bool) -> Self::Style;

    /// Style for a percentage tile value.
    ///
    /// Percentages are unclamped, so `value` may be negative or exceed 100.
    fn style_metric(&self, metric: Metric, value: f64) -> Self::Style;

    /// Style for a message log entry.
    fn style_message(&self, level: MessageLevel) -> Self::Style;

    /// Emphasis applied to the selected row.
    fn emphasize_selected(&self, base_style: Self::Style) -> Self::Style;
}

/// Coarse band of a percentage, for frontends that color by range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricBand {
    /// No attempts recorded or exactly zero.
    Empty,
    /// Below zero: more errors than successes.
    Negative,
    Positive,
    /// Above 100: inconsistent counters.
    Overflow,
}

impl MetricBand {
    pub fn of(value: f64) -> Self {
        if value == 0.0 {
            MetricBand::Empty
        } else if value < 0.0 {
            MetricBand::Negative
        } else if value > 100.0 {
            MetricBand::Overflow
        } else {
            MetricBand::Positive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_band() {
        assert_eq!(MetricBand::of(0.0), MetricBand::Empty);
        assert_eq!(MetricBand::of(-5.0), MetricBand::Negative);
        assert_eq!(MetricBand::of(40.0), MetricBand::Positive);
        assert_eq!(MetricBand::of(100.0), MetricBand::Positive);
        assert_eq!(MetricBand::of(110.0), MetricBand::Overflow);
    }
}
