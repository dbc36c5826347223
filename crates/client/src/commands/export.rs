//! Print or save the tab-separated export block.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stats_runtime::StatStore;

/// Print the spreadsheet export block (header line + values line)
#[derive(Parser, Debug)]
pub struct Export {
    /// Write the block to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Export {
    pub fn execute(self, store: &StatStore, out: &mut dyn Write) -> Result<()> {
        let block = store.export_tsv();

        match self.output {
            Some(path) => {
                std::fs::write(&path, &block)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!("Exported stats to {}", path.display());
            }
            None => writeln!(out, "{block}")?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::StatField;
    use stats_runtime::InMemoryStatsRepo;
    use tempfile::TempDir;

    fn store() -> StatStore {
        let mut store = StatStore::open(InMemoryStatsRepo::new("export"));
        store.update_stat(StatField::Kills, 7);
        store
    }

    #[test]
    fn test_export_to_stdout() {
        let mut out = Vec::new();
        Export { output: None }.execute(&store(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("kills\tattackErrors\t"));
        assert!(lines.next().unwrap().starts_with("7\t0\t"));
    }

    #[test]
    fn test_export_to_file_has_no_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.tsv");

        let mut out = Vec::new();
        Export {
            output: Some(path.clone()),
        }
        .execute(&store(), &mut out)
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, store().export_tsv());
        assert!(!written.ends_with('\n'));
        assert!(out.is_empty());
    }
}
