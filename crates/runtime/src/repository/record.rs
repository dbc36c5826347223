//! On-disk envelope for the persisted record.
//!
//! # Layout
//!
//! ```json
//! { "state": { "stats": { "kills": 0, "attackErrors": 0, ... } }, "version": 0 }
//! ```
//!
//! Only the `stats` sub-record is stored. A record written with a different
//! `version` is rejected rather than migrated.

use serde::{Deserialize, Serialize};
use stats_core::PlayerStats;

use super::{RepositoryError, Result};

/// Schema version written into every envelope.
pub const SCHEMA_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedRecord {
    state: PersistedState,
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    stats: PlayerStats,
}

/// Serialize `stats` into the JSON envelope.
pub fn encode(stats: &PlayerStats) -> Result<String> {
    let record = PersistedRecord {
        state: PersistedState { stats: *stats },
        version: SCHEMA_VERSION,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Parse a JSON envelope back into the counter record.
pub fn decode(raw: &str) -> Result<PlayerStats> {
    let record: PersistedRecord = serde_json::from_str(raw)?;

    if record.version != SCHEMA_VERSION {
        return Err(RepositoryError::VersionMismatch {
            found: record.version,
            expected: SCHEMA_VERSION,
        });
    }

    Ok(record.state.stats)
}
