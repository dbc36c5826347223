//! Input handling (keyboard polling and dispatch).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::input::KeyAction;

impl EventLoop<'_> {
    /// Drain pending terminal events, then redraw once if anything changed.
    ///
    /// Returns `true` when the loop should exit.
    pub(in crate::event) fn handle_input_tick<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<bool> {
        let mut dirty = false;

        while term_event::poll(Duration::ZERO)? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_press(key) {
                        return Ok(true);
                    }
                    dirty = true;
                }
                TermEvent::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        if dirty {
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Map a key press to an action and apply it.
    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        let action = self.input.handle_key(key, self.app_state.mode);
        self.apply_action(action)
    }

    /// Apply `action` to the store and UI state without drawing.
    ///
    /// Returns `true` for [`KeyAction::Quit`].
    pub(in crate::event) fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::SelectNext => self.app_state.move_selection(1),
            KeyAction::SelectPrev => self.app_state.move_selection(-1),
            KeyAction::Increment => self.increment_selected(),
            KeyAction::Decrement => self.decrement_selected(),
            KeyAction::Copy => self.copy_stats(),
            KeyAction::RequestReset => {
                if self.frontend_config.messages.confirm_reset {
                    self.app_state.request_reset();
                } else {
                    self.reset_all();
                }
            }
            KeyAction::ConfirmReset => {
                self.app_state.exit_to_normal();
                self.reset_all();
            }
            KeyAction::Cancel => {
                self.app_state.exit_to_normal();
                self.messages.push_text("Reset cancelled");
            }
            KeyAction::None => {}
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{config::CliConfig, state::AppMode};
    use client_frontend_core::{FrontendConfig, MessageConfig, MessageLevel, MessageLog};
    use stats_core::{PlayerStats, StatField};
    use stats_runtime::{InMemoryStatsRepo, StatStore};

    fn seeded_store() -> StatStore {
        let mut store = StatStore::open(InMemoryStatsRepo::new("tui"));
        store.update_stat(StatField::Kills, 4);
        store.update_stat(StatField::Digs, 2);
        store
    }

    fn session(store: &mut StatStore, confirm_reset: bool) -> EventLoop<'_> {
        let frontend_config = FrontendConfig::new(MessageConfig {
            confirm_reset,
            ..MessageConfig::default()
        });
        EventLoop::new(store, MessageLog::new(8), frontend_config, CliConfig::default())
    }

    fn press(event_loop: &mut EventLoop<'_>, code: KeyCode) -> bool {
        event_loop.handle_key_press(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_increment_and_decrement_edit_selected_counter() {
        let mut store = seeded_store();
        let mut event_loop = session(&mut store, true);
        assert_eq!(event_loop.app_state.selected_field(), StatField::Kills);

        assert!(!press(&mut event_loop, KeyCode::Right));
        assert_eq!(event_loop.store.get(StatField::Kills), 5);
        assert_eq!(event_loop.view_model.row(StatField::Kills).unwrap().value, 5);
        assert_eq!(event_loop.messages.recent(1).next().unwrap().text, "Kills: 5 (+1)");

        press(&mut event_loop, KeyCode::Left);
        press(&mut event_loop, KeyCode::Left);
        assert_eq!(event_loop.store.get(StatField::Kills), 3);
        assert_eq!(event_loop.view_model.row(StatField::Kills).unwrap().value, 3);
        assert_eq!(event_loop.store.get(StatField::Digs), 2);
    }

    #[test]
    fn test_decrement_at_zero_is_silent() {
        let mut store = StatStore::open(InMemoryStatsRepo::new("tui"));
        let mut event_loop = session(&mut store, true);

        press(&mut event_loop, KeyCode::Left);

        assert_eq!(event_loop.store.get(StatField::Kills), 0);
        assert!(event_loop.messages.is_empty());
    }

    #[test]
    fn test_selection_moves_the_edited_counter() {
        let mut store = seeded_store();
        let mut event_loop = session(&mut store, true);

        press(&mut event_loop, KeyCode::Down);
        press(&mut event_loop, KeyCode::Char('+'));

        assert_eq!(event_loop.store.get(StatField::AttackErrors), 1);
        assert_eq!(event_loop.store.get(StatField::Kills), 4);
    }

    #[test]
    fn test_reset_waits_for_confirmation() {
        let mut store = seeded_store();
        let mut event_loop = session(&mut store, true);

        press(&mut event_loop, KeyCode::Char('r'));
        assert_eq!(event_loop.app_state.mode, AppMode::ConfirmReset);
        assert_eq!(event_loop.store.get(StatField::Kills), 4);

        press(&mut event_loop, KeyCode::Char('y'));
        assert_eq!(event_loop.app_state.mode, AppMode::Normal);
        assert!(event_loop.store.stats().is_zeroed());
        assert!(event_loop.store.last_persist_error().is_none());
        assert_eq!(event_loop.view_model.row(StatField::Kills).unwrap().value, 0);

        let last = event_loop.messages.recent(1).next().unwrap();
        assert_eq!(last.level, MessageLevel::Warning);
    }

    #[test]
    fn test_cancel_keeps_stats() {
        let mut store = seeded_store();
        let mut event_loop = session(&mut store, true);

        press(&mut event_loop, KeyCode::Char('r'));
        press(&mut event_loop, KeyCode::Char('n'));

        assert_eq!(event_loop.app_state.mode, AppMode::Normal);
        assert_eq!(event_loop.store.get(StatField::Kills), 4);
        assert_eq!(event_loop.store.get(StatField::Digs), 2);
        assert_eq!(event_loop.messages.recent(1).next().unwrap().text, "Reset cancelled");
    }

    #[test]
    fn test_reset_without_confirmation_is_immediate() {
        let mut store = seeded_store();
        let mut event_loop = session(&mut store, false);

        press(&mut event_loop, KeyCode::Char('r'));

        assert_eq!(event_loop.app_state.mode, AppMode::Normal);
        assert_eq!(*event_loop.store.stats(), PlayerStats::ZERO);
    }

    #[test]
    fn test_quit_keys_end_the_session() {
        let mut store = seeded_store();
        let mut event_loop = session(&mut store, true);

        assert!(press(&mut event_loop, KeyCode::Char('q')));
        assert!(event_loop.handle_key_press(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!event_loop.apply_action(KeyAction::None));
    }

    #[test]
    fn test_render_draws_counters_and_reset_dialog() {
        let mut store = seeded_store();
        let mut event_loop = session(&mut store, true);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        event_loop.render(&mut terminal).unwrap();
        assert!(screen(&terminal).contains("Kills"));
        assert!(!screen(&terminal).contains("Reset every counter to zero?"));

        event_loop.apply_action(KeyAction::RequestReset);
        event_loop.render(&mut terminal).unwrap();
        assert!(screen(&terminal).contains("Reset every counter to zero?"));
    }
}
