//! Replace the record with a previously exported block.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stats_runtime::StatStore;

/// Load counters from a file produced by `export`
#[derive(Parser, Debug)]
pub struct Import {
    /// Tab-separated export block to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl Import {
    pub fn execute(self, store: &mut StatStore, out: &mut dyn Write) -> Result<()> {
        let raw = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        let stats = stats_core::from_tsv(&raw)
            .with_context(|| format!("Invalid export block in {}", self.file.display()))?;

        store.replace_stats(stats);
        writeln!(out, "Imported stats from {}", self.file.display())?;
        Ok(())
    }
}
