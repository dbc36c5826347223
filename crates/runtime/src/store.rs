//! The owned statistics store.
//!
//! [`StatStore`] pairs the in-memory [`PlayerStats`] record with a
//! [`StatsRepository`]. Every mutation runs in two steps:
//!
//! 1. the pure reducer from `stats-core` produces the next record
//! 2. the store writes that record to the repository
//!
//! A failed write is logged and remembered in
//! [`last_persist_error`](StatStore::last_persist_error) but never returned to
//! the caller and never rolls back the in-memory record.

use stats_core::{
    Metric, MetricsSnapshot, PlayerStats, StatCommand, StatField, export, metrics, reducer,
};

use crate::config::StoreConfig;
use crate::repository::{FileStatsRepository, InMemoryStatsRepo, RepositoryError, StatsRepository};

/// Owner of the single counter record and its durable copy.
///
/// There is no global instance: the composition root builds one store and
/// lends it (`&mut StatStore`) to whatever frontend drives it.
pub struct StatStore {
    stats: PlayerStats,
    repository: Box<dyn StatsRepository>,
    last_persist_error: Option<RepositoryError>,
}

impl StatStore {
    /// Open a store backed by `repository`, rehydrating the stored record.
    ///
    /// A missing record starts from zero. An unreadable record is logged and
    /// also starts from zero; it is overwritten by the next mutation.
    pub fn open(repository: impl StatsRepository + 'static) -> Self {
        Self::with_repository(Box::new(repository))
    }

    /// Same as [`open`](Self::open) for an already boxed repository.
    pub fn with_repository(repository: Box<dyn StatsRepository>) -> Self {
        let stats = match repository.load() {
            Ok(Some(stats)) => {
                tracing::info!("Restored stats from {}", repository.location());
                stats
            }
            Ok(None) => {
                tracing::info!(
                    "No stored stats at {}, starting from zero",
                    repository.location()
                );
                PlayerStats::ZERO
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable stats at {}: {}",
                    repository.location(),
                    e
                );
                PlayerStats::ZERO
            }
        };

        Self {
            stats,
            repository,
            last_persist_error: None,
        }
    }

    /// Build the repository described by `config` and open a store on it.
    pub fn from_config(config: &StoreConfig) -> Self {
        if config.enable_persistence {
            Self::open(FileStatsRepository::new(
                &config.data_dir,
                config.storage_key.clone(),
            ))
        } else {
            tracing::debug!("Persistence disabled, using in-memory repository");
            Self::open(InMemoryStatsRepo::new(config.storage_key.clone()))
        }
    }

    /// Current record.
    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Current value of one counter.
    pub fn get(&self, field: StatField) -> u32 {
        self.stats.get(field)
    }

    /// Where the record is persisted.
    pub fn location(&self) -> String {
        self.repository.location()
    }

    /// Error from the most recent write, cleared by the next successful one.
    pub fn last_persist_error(&self) -> Option<&RepositoryError> {
        self.last_persist_error.as_ref()
    }

    /// Apply `command` and persist the result.
    pub fn execute(&mut self, command: StatCommand) -> &PlayerStats {
        self.stats = reducer::step(&self.stats, &command);
        tracing::debug!(?command, "Applied stat command");
        self.persist();
        &self.stats
    }

    /// Set `field` to exactly `value`.
    pub fn update_stat(&mut self, field: StatField, value: u32) {
        self.execute(StatCommand::Set(field, value));
    }

    /// Add one to `field`.
    pub fn increment_stat(&mut self, field: StatField) {
        self.execute(StatCommand::Increment(field));
    }

    /// Subtract one from `field`, never going below zero.
    pub fn decrement_stat(&mut self, field: StatField) {
        self.execute(StatCommand::Decrement(field));
    }

    /// Replace the record with the all-zero record.
    pub fn reset_stats(&mut self) {
        self.execute(StatCommand::Reset);
    }

    /// Replace the whole record, e.g. with an imported one, and persist it.
    pub fn replace_stats(&mut self, stats: PlayerStats) {
        self.stats = stats;
        tracing::debug!("Replaced stats record");
        self.persist();
    }

    pub fn attack_percentage(&self) -> f64 {
        metrics::attack_percentage(&self.stats)
    }

    pub fn serve_percentage(&self) -> f64 {
        metrics::serve_percentage(&self.stats)
    }

    pub fn reception_percentage(&self) -> f64 {
        metrics::reception_percentage(&self.stats)
    }

    pub fn block_percentage(&self) -> f64 {
        metrics::block_percentage(&self.stats)
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        metric.compute(&self.stats)
    }

    /// All four derived percentages.
    pub fn metrics(&self) -> MetricsSnapshot {
        MetricsSnapshot::from_stats(&self.stats)
    }

    /// Tab-separated export block for the current record.
    pub fn export_tsv(&self) -> String {
        export::to_tsv(&self.stats)
    }

    fn persist(&mut self) {
        match self.repository.save(&self.stats) {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                tracing::warn!("Failed to persist stats to {}: {}", self.location(), e);
                self.last_persist_error = Some(e);
            }
        }
    }
}
