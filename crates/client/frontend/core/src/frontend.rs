//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use stats_runtime::StatStore;

/// Frontend abstraction for UI layers.
///
/// Frontends borrow the store for the duration of their run:
/// - Read the current record and derived metrics
/// - Invoke store mutations in response to user input
///
/// Frontends do NOT own the store. The composition root builds it and hands it
/// over by mutable reference, so there is never more than one writer.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use stats_core::StatField;
/// use stats_runtime::StatStore;
/// use anyhow::Result;
///
/// struct TallyKills;
///
/// #[async_trait]
/// impl Frontend for TallyKills {
///     async fn run(&mut self, store: &mut StatStore) -> Result<()> {
///         store.increment_stat(StatField::Kills);
///         println!("{}", store.export_tsv());
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error (for example
    /// the terminal cannot be initialized). Store persistence failures are
    /// not fatal and never reach this method.
    async fn run(&mut self, store: &mut StatStore) -> Result<()>;
}
