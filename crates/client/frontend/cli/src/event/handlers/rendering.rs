//! Rendering handlers.

use anyhow::Result;
use ratatui::{Terminal, backend::Backend};

use super::super::EventLoop;
use crate::presentation::ui;

impl EventLoop<'_> {
    /// Render current state using the view model.
    pub(in crate::event) fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: &self.view_model,
            messages: &self.messages,
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
