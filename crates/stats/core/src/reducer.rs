//! Pure state transition for the counter record.

use crate::command::StatCommand;
use crate::stats::PlayerStats;

/// Applies `command` to `stats` and returns the resulting record.
///
/// Total over its domain: every command succeeds. Increment saturates at
/// `u32::MAX` and decrement floors at zero.
pub fn step(stats: &PlayerStats, command: &StatCommand) -> PlayerStats {
    let mut next = *stats;

    match *command {
        StatCommand::Set(field, value) => next.set(field, value),
        StatCommand::Increment(field) => next.set(field, stats.get(field).saturating_add(1)),
        StatCommand::Decrement(field) => next.set(field, stats.get(field).saturating_sub(1)),
        StatCommand::Reset => next = PlayerStats::ZERO,
    }

    next
}
