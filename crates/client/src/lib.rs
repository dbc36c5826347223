//! Top-level client composing the stats store with a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ StatStore (counter record + persistence)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: Composition root, lifecycle management
//! - **StatStore**: Pure reducer plus persist-after-mutation
//! - **Frontend**: User interaction and rendering (borrows the store)
//!
//! One-shot command-line operations live in [`commands`] and work on the
//! store directly without a frontend.

mod builder;
pub mod commands;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use stats_runtime::StatStore;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives the store and the frontend
/// 2. Client::run() lends the store to the frontend (blocking until quit)
/// 3. The store is handed back so callers can inspect it after the session
pub struct Client {
    store: StatStore,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails (e.g. terminal setup).
    pub async fn run(self) -> Result<StatStore> {
        let Client {
            mut store,
            mut frontend,
        } = self;

        frontend.run(&mut store).await?;

        if let Some(e) = store.last_persist_error() {
            tracing::warn!("Last write to {} failed: {}", store.location(), e);
        }

        Ok(store)
    }
}
