//! Glue code tying the store and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, MessageLog};
use stats_runtime::StatStore;

/// Terminal frontend.
///
/// Holds only configuration; the store is lent to [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    async fn execute(&mut self, store: &mut StatStore) -> Result<()> {
        tracing::info!("CLI frontend starting (store: {})", store.location());

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Use ←/→ to change the selected counter.");

        let event_loop = EventLoop::new(
            store,
            messages,
            self.frontend_config.clone(),
            self.cli_config.clone(),
        );

        let (mut terminal, _guard) = terminal::init()?;

        let _messages = event_loop.run(&mut terminal).await?;

        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, store: &mut StatStore) -> Result<()> {
        self.execute(store).await
    }
}
