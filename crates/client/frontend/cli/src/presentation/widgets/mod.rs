//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the view model and renders to a
//! terminal frame. Widgets follow these principles:
//! - Read-only access to the view model (immutable)
//! - No side effects or state mutations
//! - Styling goes through the PresentationMapper theme where applicable

pub mod category_panel;
pub mod confirm_reset;
pub mod footer;
pub mod header;
pub mod messages;
pub mod metrics;
