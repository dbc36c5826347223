//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: Keyboard polling and key dispatch
//! - `stats`: Store mutations and clipboard export
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod input;
mod rendering;
mod stats;
