//! Event loop orchestrating user input, store mutations, and rendering.
//!
//! This module coordinates three main concerns:
//! - Keyboard input processing (selection, counter edits, copy, reset)
//! - Store mutations, each followed by a view model rebuild
//! - Rendering of the current view model

use anyhow::Result;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{self, Duration};

use crate::{config::CliConfig, input::InputHandler, state::AppState};
use client_frontend_core::{FrontendConfig, MessageLog, StatsViewModel};
use stats_runtime::StatStore;

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop driving one terminal session over a borrowed store.
///
/// The loop is the only caller of store mutations while it runs, so every
/// mutation completes (including its persistence write) before the next key
/// is read.
pub struct EventLoop<'a> {
    pub(crate) store: &'a mut StatStore,
    pub(crate) input: InputHandler,
    pub(crate) messages: MessageLog,
    pub(crate) app_state: AppState,
    /// Rebuilt from the store after every mutation.
    pub(crate) view_model: StatsViewModel,
    pub(crate) frontend_config: FrontendConfig,
    pub(crate) cli_config: CliConfig,
}

impl<'a> EventLoop<'a> {
    pub fn new(
        store: &'a mut StatStore,
        messages: MessageLog,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        let view_model = StatsViewModel::from_store(store);

        Self {
            store,
            input: InputHandler::new(),
            messages,
            app_state: AppState::new(),
            view_model,
            frontend_config,
            cli_config,
        }
    }

    pub async fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<MessageLog> {
        self.render(terminal)?;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Interrupted");
                    break;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(self.messages)
    }

    pub(crate) fn refresh_view_model(&mut self) {
        self.view_model = StatsViewModel::from_store(self.store);
    }
}
