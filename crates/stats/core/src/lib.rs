//! Volleyball player statistics: the pure data model.
//!
//! `stats-core` owns the counter record and everything computable from it
//! without I/O:
//! - [`field`] names the fifteen counters and their display categories
//! - [`stats`] holds the [`PlayerStats`] record
//! - [`command`] and [`reducer`] describe and apply mutations (record in, record out)
//! - [`metrics`] derives the four percentages
//! - [`export`] renders and parses the tab-separated export block
//!
//! Persistence and presentation live in other crates and depend on the types
//! re-exported here.
pub mod command;
pub mod export;
pub mod field;
pub mod metrics;
pub mod reducer;
pub mod stats;

pub use command::StatCommand;
pub use export::{ExportError, from_tsv, to_tsv};
pub use field::{Category, StatField};
pub use metrics::{
    Metric, MetricsSnapshot, attack_percentage, block_percentage, reception_percentage,
    serve_percentage,
};
pub use stats::PlayerStats;
