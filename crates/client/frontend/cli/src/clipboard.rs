//! System clipboard access through the terminal.
//!
//! Uses the OSC 52 escape sequence, so copying works over SSH and inside
//! multiplexers that forward it. Terminals without OSC 52 support silently
//! ignore the sequence; there is no way to detect that from here.
use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{clipboard::CopyToClipboard, execute};

/// Place `text` on the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, CopyToClipboard::to_clipboard_from(text))
        .context("Failed to write clipboard escape sequence")?;
    stdout.flush().context("Failed to flush terminal")?;
    tracing::debug!(bytes = text.len(), "Copied stats to clipboard");
    Ok(())
}
