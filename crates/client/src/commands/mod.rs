//! One-shot command implementations.
//!
//! Each command is a separate module that implements its own CLI args and
//! execution logic against a borrowed [`StatStore`](stats_runtime::StatStore).
//! Output goes to the writer passed in, so commands can be tested without a
//! terminal.

mod edit;
mod export;
mod import;
mod reset;
mod show;

pub use edit::{Dec, Inc, Set};
pub use export::Export;
pub use import::Import;
pub use reset::Reset;
pub use show::Show;

use stats_core::StatField;

/// `value_parser` for counter names.
///
/// Accepts the camelCase identifiers used in exports (`attackErrors`), in
/// any ASCII case.
pub(crate) fn parse_field(raw: &str) -> Result<StatField, String> {
    raw.parse().map_err(|_| {
        let known: Vec<&str> = StatField::ALL.iter().map(|field| field.as_ref()).collect();
        format!("unknown stat {raw:?} (expected one of: {})", known.join(", "))
    })
}
