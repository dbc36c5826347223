//! Cross-frontend primitives for presenting player stats.
//!
//! Houses message logging, configuration, and view-model types that both the
//! terminal UI and any future graphical client can reuse.
pub mod config;
pub mod format;
pub mod frontend;
pub mod message;
pub mod presentation;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use presentation::{MetricBand, PresentationMapper};
pub use view_model::{CategoryPanel, CounterRow, MetricTile, StatsViewModel};
