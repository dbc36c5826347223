//! Print the current record and metrics.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use client_frontend_core::StatsViewModel;
use stats_runtime::StatStore;

/// Print every counter grouped by category, followed by the percentages
#[derive(Parser, Debug)]
pub struct Show {}

impl Show {
    pub fn execute(self, store: &StatStore, out: &mut dyn Write) -> Result<()> {
        let view = StatsViewModel::from_store(store);

        for panel in &view.panels {
            writeln!(out, "{}", panel.title)?;
            for row in &panel.rows {
                writeln!(out, "  {:<20}{:>6}", row.label, row.value)?;
            }
        }

        writeln!(out)?;
        for tile in &view.metrics {
            writeln!(out, "{:<14}{:>8}", tile.label, tile.display)?;
        }

        writeln!(out)?;
        writeln!(out, "Saved to: {}", view.location)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::StatField;
    use stats_runtime::InMemoryStatsRepo;

    #[test]
    fn test_show_lists_counters_and_metrics() {
        let mut store = StatStore::open(InMemoryStatsRepo::new("show"));
        store.update_stat(StatField::Blocks, 3);
        store.update_stat(StatField::BlockAttempts, 10);

        let mut out = Vec::new();
        Show {}.execute(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Attacking\n"));
        assert!(text.contains("Block Attempts"));
        assert!(text.contains("30.0%"));
        assert!(text.contains("Saved to: memory:show"));
    }
}
