//! Terminal UI frontend for the volleyball stats tracker.
//!
//! This crate provides a terminal-based user interface over a [`StatStore`].
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Borrows the store for the duration of the session
//! - Does NOT own or construct the store
//! - Maps key presses to store mutations and redraws from a fresh view model
//!
//! [`StatStore`]: stats_runtime::StatStore

mod app;
mod clipboard;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
