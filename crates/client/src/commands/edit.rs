//! Single-counter edits.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use stats_core::StatField;
use stats_runtime::StatStore;

use super::parse_field;

/// Set a counter to an exact value
#[derive(Parser, Debug)]
pub struct Set {
    /// Counter identifier, e.g. `attackAttempts`
    #[arg(value_name = "STAT", value_parser = parse_field)]
    pub field: StatField,

    /// New non-negative value
    #[arg(value_name = "VALUE")]
    pub value: u32,
}

/// Add one to a counter
#[derive(Parser, Debug)]
pub struct Inc {
    /// Counter identifier, e.g. `kills`
    #[arg(value_name = "STAT", value_parser = parse_field)]
    pub field: StatField,
}

/// Subtract one from a counter (stays at zero)
#[derive(Parser, Debug)]
pub struct Dec {
    /// Counter identifier, e.g. `serviceErrors`
    #[arg(value_name = "STAT", value_parser = parse_field)]
    pub field: StatField,
}

impl Set {
    pub fn execute(self, store: &mut StatStore, out: &mut dyn Write) -> Result<()> {
        store.update_stat(self.field, self.value);
        report(store, self.field, out)
    }
}

impl Inc {
    pub fn execute(self, store: &mut StatStore, out: &mut dyn Write) -> Result<()> {
        store.increment_stat(self.field);
        report(store, self.field, out)
    }
}

impl Dec {
    pub fn execute(self, store: &mut StatStore, out: &mut dyn Write) -> Result<()> {
        store.decrement_stat(self.field);
        report(store, self.field, out)
    }
}

fn report(store: &StatStore, field: StatField, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}: {}", field.label(), store.get(field))?;
    Ok(())
}
