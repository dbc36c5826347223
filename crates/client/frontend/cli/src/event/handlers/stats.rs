//! Store mutations and clipboard export triggered from the keyboard.

use client_frontend_core::format;

use super::super::EventLoop;
use crate::clipboard;

/// Shown after a successful copy.
const COPY_SUCCESS_MESSAGE: &str = "You can paste these values into a spreadsheet!";

impl EventLoop<'_> {
    pub(in crate::event) fn increment_selected(&mut self) {
        let field = self.app_state.selected_field();
        let before = self.store.get(field);
        self.store.increment_stat(field);
        self.after_edit(field, before);
    }

    pub(in crate::event) fn decrement_selected(&mut self) {
        let field = self.app_state.selected_field();
        let before = self.store.get(field);
        self.store.decrement_stat(field);
        self.after_edit(field, before);
    }

    /// "Reset All".
    pub(in crate::event) fn reset_all(&mut self) {
        self.store.reset_stats();
        self.refresh_view_model();
        tracing::info!("Stats reset");
        self.messages.push_warning("All stats reset to zero");
    }

    /// "Copy Stats".
    pub(in crate::event) fn copy_stats(&mut self) {
        let block = self.store.export_tsv();
        match clipboard::copy(&block) {
            Ok(()) => self.messages.push_success(COPY_SUCCESS_MESSAGE),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.messages.push_error("Could not copy stats to the clipboard");
            }
        }
    }

    fn after_edit(&mut self, field: stats_core::StatField, before: u32) {
        let after = self.store.get(field);
        self.refresh_view_model();

        if after != before {
            self.messages.push_text(format!(
                "{}: {} ({})",
                field.label(),
                after,
                format::delta(before, after)
            ));
        }
    }
}
