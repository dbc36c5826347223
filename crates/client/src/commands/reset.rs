//! Reset every counter to zero.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use stats_runtime::StatStore;

/// Reset all counters to zero
#[derive(Parser, Debug)]
pub struct Reset {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Reset {
    pub fn execute(
        self,
        store: &mut StatStore,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<()> {
        if !self.yes {
            write!(out, "Reset every counter to zero? [y/N] ")?;
            out.flush()?;

            let mut answer = String::new();
            input.read_line(&mut answer)?;
            if !matches!(answer.trim(), "y" | "Y" | "yes") {
                writeln!(out, "Cancelled")?;
                return Ok(());
            }
        }

        store.reset_stats();
        writeln!(out, "All stats reset to zero")?;
        Ok(())
    }
}
