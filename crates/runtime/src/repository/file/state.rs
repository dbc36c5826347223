//! File-based StatsRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stats_core::PlayerStats;

use crate::repository::{RepositoryError, Result, StatsRepository, record};

/// File-based implementation of StatsRepository.
///
/// Stores the record as `<base_dir>/<key>.json` in the JSON envelope described
/// in [`record`](crate::repository::record).
///
/// The directory is created lazily on first save, so constructing the
/// repository never touches the filesystem.
pub struct FileStatsRepository {
    base_dir: PathBuf,
    key: String,
}

impl FileStatsRepository {
    /// Create a repository storing `key` under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            key: key.into(),
        }
    }

    /// Path of the record file.
    pub fn record_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", self.key))
    }
}

impl StatsRepository for FileStatsRepository {
    fn load(&self) -> Result<Option<PlayerStats>> {
        let path = self.record_path();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepositoryError::Io(e)),
        };

        let stats = record::decode(&raw)?;

        tracing::debug!("Loaded stats from {}", path.display());

        Ok(Some(stats))
    }

    fn save(&self, stats: &PlayerStats) -> Result<()> {
        let path = self.record_path();
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.base_dir)?;

        let raw = record::encode(stats)?;

        // Write to temp file
        fs::write(&temp_path, raw)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved stats to {}", path.display());

        Ok(())
    }

    fn location(&self) -> String {
        self.record_path().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::StatField;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStatsRepository::new(temp_dir.path(), "volley-player-stats");

        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStatsRepository::new(temp_dir.path(), "volley-player-stats");
        let stats = PlayerStats::ZERO
            .with(StatField::Kills, 10)
            .with(StatField::Digs, 4);

        repo.save(&stats).unwrap();

        assert!(temp_dir.path().join("volley-player-stats.json").exists());
        assert!(!temp_dir.path().join("volley-player-stats.json.tmp").exists());
        assert_eq!(repo.load().unwrap(), Some(stats));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let repo = FileStatsRepository::new(&nested, "stats");

        repo.save(&PlayerStats::ZERO).unwrap();

        assert!(nested.join("stats.json").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStatsRepository::new(temp_dir.path(), "stats");
        fs::write(repo.record_path(), "{ not json").unwrap();

        assert!(matches!(repo.load(), Err(RepositoryError::Json(_))));
    }
}
