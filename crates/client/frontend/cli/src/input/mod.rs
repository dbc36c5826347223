//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the selection to the next counter.
    SelectNext,
    /// Move the selection to the previous counter.
    SelectPrev,
    /// Add one to the selected counter.
    Increment,
    /// Subtract one from the selected counter.
    Decrement,
    /// Copy the export block to the clipboard.
    Copy,
    /// Ask to reset every counter.
    RequestReset,
    /// Answer "yes" to the pending reset.
    ConfirmReset,
    /// Dismiss the pending reset.
    Cancel,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into UI commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: AppMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Normal => self.handle_normal(key),
            AppMode::ConfirmReset => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => KeyAction::ConfirmReset,
                _ => KeyAction::Cancel,
            },
        }
    }

    fn handle_normal(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Up => KeyAction::SelectPrev,
            KeyCode::Down | KeyCode::Tab => KeyAction::SelectNext,
            KeyCode::BackTab => KeyAction::SelectPrev,
            KeyCode::Right => KeyAction::Increment,
            KeyCode::Left => KeyAction::Decrement,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'k' => KeyAction::SelectPrev,
            'j' => KeyAction::SelectNext,
            'l' | '+' | '=' => KeyAction::Increment,
            'h' | '-' => KeyAction::Decrement,
            'c' => KeyAction::Copy,
            'r' => KeyAction::RequestReset,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_navigation_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Up, KeyCode::Char('k'), KeyCode::BackTab] {
            assert_eq!(handler.handle_key(key(code), AppMode::Normal), KeyAction::SelectPrev);
        }
        for code in [KeyCode::Down, KeyCode::Char('j'), KeyCode::Tab] {
            assert_eq!(handler.handle_key(key(code), AppMode::Normal), KeyAction::SelectNext);
        }
    }

    #[test]
    fn maps_counter_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Right,
            KeyCode::Char('l'),
            KeyCode::Char('+'),
            KeyCode::Char('='),
        ] {
            assert_eq!(handler.handle_key(key(code), AppMode::Normal), KeyAction::Increment);
        }
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('-')] {
            assert_eq!(handler.handle_key(key(code), AppMode::Normal), KeyAction::Decrement);
        }
    }

    #[test]
    fn maps_copy_reset_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('C')), AppMode::Normal),
            KeyAction::Copy
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), AppMode::Normal),
            KeyAction::RequestReset
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), AppMode::Normal),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), AppMode::Normal),
            KeyAction::Quit
        );
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let handler = InputHandler::new();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, AppMode::Normal), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl_c, AppMode::ConfirmReset), KeyAction::Quit);
    }

    #[test]
    fn confirmation_only_accepts_y() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('y')), AppMode::ConfirmReset),
            KeyAction::ConfirmReset
        );
        for code in [KeyCode::Char('n'), KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            assert_eq!(
                handler.handle_key(key(code), AppMode::ConfirmReset),
                KeyAction::Cancel
            );
        }
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), AppMode::Normal),
            KeyAction::None
        );
    }
}
