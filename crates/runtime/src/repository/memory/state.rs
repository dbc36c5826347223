//! In-memory StatsRepository implementation for tests and ephemeral runs.

use std::sync::RwLock;

use stats_core::PlayerStats;

use crate::repository::{RepositoryError, Result, StatsRepository, record};

/// In-memory implementation of StatsRepository.
///
/// Keeps the encoded JSON envelope rather than the struct, so a save/load cycle
/// exercises the same serialization path as the file repository.
pub struct InMemoryStatsRepo {
    key: String,
    slot: RwLock<Option<String>>,
}

impl InMemoryStatsRepo {
    /// Create a new empty in-memory repository.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot: RwLock::new(None),
        }
    }

    /// Create with a raw stored envelope, e.g. to simulate a corrupt record.
    pub fn with_raw(key: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot: RwLock::new(Some(raw.into())),
        }
    }

    /// Raw stored envelope, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }
}

impl Default for InMemoryStatsRepo {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_STORAGE_KEY)
    }
}

impl StatsRepository for InMemoryStatsRepo {
    fn load(&self) -> Result<Option<PlayerStats>> {
        let slot = self.slot.read().map_err(|_| RepositoryError::LockPoisoned)?;
        slot.as_deref().map(record::decode).transpose()
    }

    fn save(&self, stats: &PlayerStats) -> Result<()> {
        let raw = record::encode(stats)?;
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(raw);
        Ok(())
    }

    fn location(&self) -> String {
        format!("memory:{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::StatField;

    #[test]
    fn test_empty_repo_loads_none() {
        let repo = InMemoryStatsRepo::default();
        assert!(repo.load().unwrap().is_none());
        assert_eq!(repo.location(), "memory:volley-player-stats");
    }

    #[test]
    fn test_save_then_load() {
        let repo = InMemoryStatsRepo::new("test");
        let stats = PlayerStats::ZERO.with(StatField::Aces, 2);

        repo.save(&stats).unwrap();
        assert_eq!(repo.load().unwrap(), Some(stats));
        assert!(repo.raw().unwrap().contains("\"aces\":2"));

        repo.save(&PlayerStats::ZERO).unwrap();
        assert_eq!(repo.load().unwrap(), Some(PlayerStats::ZERO));
    }

    #[test]
    fn test_corrupt_raw_is_an_error() {
        let repo = InMemoryStatsRepo::with_raw("test", "garbage");
        assert!(repo.load().is_err());
    }
}
