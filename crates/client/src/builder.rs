//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use stats_runtime::StatStore;

/// Builder for constructing a Client with proper validation.
///
/// Both the store and the frontend are required; a missing one fails
/// `build()` instead of panicking later.
#[derive(Default)]
pub struct ClientBuilder {
    store: Option<StatStore>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store (required).
    ///
    /// Usually built with `StatStore::from_config`.
    pub fn store(mut self, store: StatStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let store = self
            .store
            .context("Store is required. Use .store() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { store, frontend })
    }
}
