//! Presentation-ready snapshot of the store.
//!
//! The view model is rebuilt from the store after every mutation. It carries
//! labels and formatted values so render code never touches the reducer or
//! metric formulas directly.

use stats_core::{Category, Metric, MetricsSnapshot, PlayerStats, StatField};
use stats_runtime::StatStore;

use crate::format;

/// Everything a frontend needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsViewModel {
    pub metrics: Vec<MetricTile>,
    pub panels: Vec<CategoryPanel>,
    /// Where the record is persisted, shown in the header.
    pub location: String,
}

/// One percentage tile.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricTile {
    pub metric: Metric,
    pub label: &'static str,
    pub value: f64,
    /// `value` rounded to one decimal with a `%` suffix.
    pub display: String,
}

/// One category panel with its counters in declared order.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPanel {
    pub category: Category,
    pub title: &'static str,
    pub rows: Vec<CounterRow>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterRow {
    pub field: StatField,
    pub label: &'static str,
    pub value: u32,
}

impl StatsViewModel {
    pub fn from_store(store: &StatStore) -> Self {
        Self::from_stats(store.stats(), store.location())
    }

    pub fn from_stats(stats: &PlayerStats, location: impl Into<String>) -> Self {
        let snapshot = MetricsSnapshot::from_stats(stats);
        let metrics = snapshot
            .iter()
            .map(|(metric, value)| MetricTile {
                metric,
                label: metric.label(),
                value,
                display: format::percentage(value),
            })
            .collect();

        let panels = Category::ALL
            .iter()
            .map(|&category| CategoryPanel {
                category,
                title: category.name(),
                rows: category
                    .fields()
                    .iter()
                    .map(|&field| CounterRow {
                        field,
                        label: field.label(),
                        value: stats.get(field),
                    })
                    .collect(),
            })
            .collect();

        Self {
            metrics,
            panels,
            location: location.into(),
        }
    }

    /// Panel containing `field`.
    pub fn panel_for(&self, field: StatField) -> Option<&CategoryPanel> {
        self.panels
            .iter()
            .find(|panel| panel.category == field.category())
    }

    pub fn row(&self, field: StatField) -> Option<&CounterRow> {
        self.panel_for(field)?
            .rows
            .iter()
            .find(|row| row.field == field)
    }
}
