//! Event handling for the CLI client.
//!
//! This module contains the event loop that coordinates user input, store
//! mutations, and UI updates.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
