//! Repository contract for saving and loading the counter record.

use stats_core::PlayerStats;

use super::Result;

/// Durable storage for a single named [`PlayerStats`] record.
///
/// Each repository instance is bound to one fixed storage key at construction;
/// there is exactly one record per key and no history.
pub trait StatsRepository: Send + Sync {
    /// Load the stored record.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet. Corrupt or
    /// incompatible records are reported as errors; deciding to fall back is
    /// the caller's job.
    fn load(&self) -> Result<Option<PlayerStats>>;

    /// Replace the stored record with `stats`.
    fn save(&self, stats: &PlayerStats) -> Result<()>;

    /// Human-readable description of where the record lives.
    fn location(&self) -> String;
}
