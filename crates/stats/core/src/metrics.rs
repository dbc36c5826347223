//! Derived percentages.
//!
//! Metrics are never stored; they are recomputed from the counter record on
//! every read. Each ratio returns exactly `0.0` when its denominator is zero
//! and is otherwise left unclamped, so inconsistent inputs (more errors than
//! attempts) can yield values below 0 or above 100.

use crate::stats::PlayerStats;

/// One of the four derived percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    Attack,
    Serve,
    Reception,
    Block,
}

impl Metric {
    /// Every metric in tile order.
    pub const ALL: [Metric; 4] = [Metric::Attack, Metric::Serve, Metric::Reception, Metric::Block];

    /// Tile caption.
    pub const fn label(self) -> &'static str {
        match self {
            Metric::Attack => "Attack %",
            Metric::Serve => "Serve %",
            Metric::Reception => "Reception %",
            Metric::Block => "Block %",
        }
    }

    pub fn compute(self, stats: &PlayerStats) -> f64 {
        match self {
            Metric::Attack => attack_percentage(stats),
            Metric::Serve => serve_percentage(stats),
            Metric::Reception => reception_percentage(stats),
            Metric::Block => block_percentage(stats),
        }
    }
}

/// `(kills - attack_errors) / attack_attempts * 100`.
pub fn attack_percentage(stats: &PlayerStats) -> f64 {
    ratio(
        f64::from(stats.kills) - f64::from(stats.attack_errors),
        stats.attack_attempts,
    )
}

/// `(serve_attempts - service_errors) / serve_attempts * 100` (in-play rate).
pub fn serve_percentage(stats: &PlayerStats) -> f64 {
    ratio(
        f64::from(stats.serve_attempts) - f64::from(stats.service_errors),
        stats.serve_attempts,
    )
}

/// `(reception_attempts - reception_errors) / reception_attempts * 100`.
pub fn reception_percentage(stats: &PlayerStats) -> f64 {
    ratio(
        f64::from(stats.reception_attempts) - f64::from(stats.reception_errors),
        stats.reception_attempts,
    )
}

/// `blocks / block_attempts * 100`.
pub fn block_percentage(stats: &PlayerStats) -> f64 {
    ratio(f64::from(stats.blocks), stats.block_attempts)
}

fn ratio(numerator: f64, attempts: u32) -> f64 {
    if attempts == 0 {
        return 0.0;
    }
    numerator / f64::from(attempts) * 100.0
}

/// All four metrics computed from the same record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub attack: f64,
    pub serve: f64,
    pub reception: f64,
    pub block: f64,
}

impl MetricsSnapshot {
    pub fn from_stats(stats: &PlayerStats) -> Self {
        Self {
            attack: attack_percentage(stats),
            serve: serve_percentage(stats),
            reception: reception_percentage(stats),
            block: block_percentage(stats),
        }
    }

    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Attack => self.attack,
            Metric::Serve => self.serve,
            Metric::Reception => self.reception,
            Metric::Block => self.block,
        }
    }

    /// `(metric, value)` pairs in tile order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.iter().map(move |&metric| (metric, self.get(metric)))
    }
}
