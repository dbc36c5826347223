//! Application state for mode management and selection.

use stats_core::StatField;

/// Top-level application mode determining input handling and overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browsing and editing counters.
    #[default]
    Normal,
    /// "Reset All" was requested and awaits confirmation.
    ConfirmReset,
}

/// Mutable UI state that is not part of the stats record.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Position of the selected counter in [`StatField::ALL`].
    selected: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_field(&self) -> StatField {
        StatField::ALL[self.selected % StatField::COUNT]
    }

    /// Move the selection by `delta`, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let count = StatField::COUNT as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(count) as usize;
    }

    pub fn request_reset(&mut self) {
        self.mode = AppMode::ConfirmReset;
    }

    pub fn exit_to_normal(&mut self) {
        self.mode = AppMode::Normal;
    }
}
