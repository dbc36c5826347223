//! Mutations a caller can request on a [`PlayerStats`](crate::PlayerStats) record.

use crate::field::StatField;

/// A single mutation of the counter record.
///
/// Commands are plain values so the boundary layer can log, persist, or replay
/// them; applying one is done by [`reducer::step`](crate::reducer::step).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatCommand {
    /// Overwrite `field` with an exact value.
    Set(StatField, u32),
    /// Add one to `field`.
    Increment(StatField),
    /// Subtract one from `field`, stopping at zero.
    Decrement(StatField),
    /// Replace the whole record with the all-zero record.
    Reset,
}
