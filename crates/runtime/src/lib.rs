//! Runtime layer for the volleyball stats tracker.
//!
//! This crate owns the mutable side of the application: the [`StatStore`]
//! holding the live counter record, and the repositories that keep a durable
//! copy of it across restarts.
//!
//! Modules are organized by responsibility:
//! - [`store`] hosts the store and its persist-after-mutation orchestration
//! - [`repository`] provides the storage adapters (file and in-memory)
//! - [`config`] loads store settings from the environment
pub mod config;
pub mod repository;
pub mod store;

pub use config::{ConfigError, DEFAULT_STORAGE_KEY, StoreConfig, parse_bool};
pub use repository::{
    FileStatsRepository, InMemoryStatsRepo, RepositoryError, StatsRepository,
};
pub use store::StatStore;
