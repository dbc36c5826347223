//! Repository layer for the persisted counter record.
//!
//! Repositories handle the one piece of data that must survive restarts:
//! the [`PlayerStats`](stats_core::PlayerStats) record, stored under a fixed key.
//!
//! - [`FileStatsRepository`] writes a JSON file in the platform data directory
//! - [`InMemoryStatsRepo`] keeps the encoded record in memory

mod error;
mod file;
mod memory;
pub mod record;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStatsRepository;
pub use memory::InMemoryStatsRepo;
pub use traits::StatsRepository;
