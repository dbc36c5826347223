//! Terminal setup/teardown helpers for the CLI UI.
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
///
/// The guard is armed as soon as raw mode is on, so a failure in any later
/// setup step still hands the terminal back in its original state.
pub fn init() -> Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard(());

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    Ok((terminal, guard))
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the terminal on drop, including early returns and panics.
pub struct TerminalGuard(());

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::warn!("Failed to restore terminal: {:#}", e);
        }
    }
}
