//! The per-player counter record.

use crate::command::StatCommand;
use crate::field::StatField;
use crate::reducer;

/// Flat record of the fifteen counters tracked for one player.
///
/// Counters are unsigned, so the non-negative invariant holds by construction.
/// No cross-field relation is enforced: `attack_errors > attack_attempts` is a
/// valid (if inconsistent) record.
///
/// With the `serde` feature the record serializes as a camelCase object whose
/// keys are exactly the [`StatField`] identifiers. Missing keys deserialize as
/// zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PlayerStats {
    // Attacking
    pub kills: u32,
    pub attack_errors: u32,
    pub attack_attempts: u32,

    // Serving
    pub aces: u32,
    pub service_errors: u32,
    pub serve_attempts: u32,

    // Reception
    pub reception_errors: u32,
    pub reception_attempts: u32,

    // Setting
    pub assists: u32,
    pub setting_errors: u32,

    // Blocking
    pub blocks: u32,
    pub block_errors: u32,
    pub block_attempts: u32,

    // Digging
    pub digs: u32,
    pub dig_errors: u32,
}

impl PlayerStats {
    /// The all-zero record.
    pub const ZERO: PlayerStats = PlayerStats {
        kills: 0,
        attack_errors: 0,
        attack_attempts: 0,
        aces: 0,
        service_errors: 0,
        serve_attempts: 0,
        reception_errors: 0,
        reception_attempts: 0,
        assists: 0,
        setting_errors: 0,
        blocks: 0,
        block_errors: 0,
        block_attempts: 0,
        digs: 0,
        dig_errors: 0,
    };

    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Read one counter.
    pub const fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::Kills => self.kills,
            StatField::AttackErrors => self.attack_errors,
            StatField::AttackAttempts => self.attack_attempts,
            StatField::Aces => self.aces,
            StatField::ServiceErrors => self.service_errors,
            StatField::ServeAttempts => self.serve_attempts,
            StatField::ReceptionErrors => self.reception_errors,
            StatField::ReceptionAttempts => self.reception_attempts,
            StatField::Assists => self.assists,
            StatField::SettingErrors => self.setting_errors,
            StatField::Blocks => self.blocks,
            StatField::BlockErrors => self.block_errors,
            StatField::BlockAttempts => self.block_attempts,
            StatField::Digs => self.digs,
            StatField::DigErrors => self.dig_errors,
        }
    }

    /// Overwrite one counter in place.
    pub fn set(&mut self, field: StatField, value: u32) {
        *self.slot_mut(field) = value;
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, field: StatField, value: u32) -> Self {
        self.set(field, value);
        self
    }

    /// `(field, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (StatField, u32)> + '_ {
        StatField::ALL.iter().map(move |&field| (field, self.get(field)))
    }

    /// Counter values in declared order.
    pub fn values(&self) -> [u32; StatField::COUNT] {
        StatField::ALL.map(|field| self.get(field))
    }

    pub fn is_zeroed(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns the record produced by `command`. `self` is left untouched.
    pub fn apply(&self, command: &StatCommand) -> Self {
        reducer::step(self, command)
    }

    fn slot_mut(&mut self, field: StatField) -> &mut u32 {
        match field {
            StatField::Kills => &mut self.kills,
            StatField::AttackErrors => &mut self.attack_errors,
            StatField::AttackAttempts => &mut self.attack_attempts,
            StatField::Aces => &mut self.aces,
            StatField::ServiceErrors => &mut self.service_errors,
            StatField::ServeAttempts => &mut self.serve_attempts,
            StatField::ReceptionErrors => &mut self.reception_errors,
            StatField::ReceptionAttempts => &mut self.reception_attempts,
            StatField::Assists => &mut self.assists,
            StatField::SettingErrors => &mut self.setting_errors,
            StatField::Blocks => &mut self.blocks,
            StatField::BlockErrors => &mut self.block_errors,
            StatField::BlockAttempts => &mut self.block_attempts,
            StatField::Digs => &mut self.digs,
            StatField::DigErrors => &mut self.dig_errors,
        }
    }
}

impl FromIterator<(StatField, u32)> for PlayerStats {
    fn from_iter<I: IntoIterator<Item = (StatField, u32)>>(iter: I) -> Self {
        let mut stats = PlayerStats::ZERO;
        for (field, value) in iter {
            stats.set(field, value);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_zeroed() {
        let stats = PlayerStats::new();
        assert!(stats.is_zeroed());
        assert!(stats.iter().all(|(_, value)| value == 0));
    }

    #[test]
    fn test_get_and_set_address_the_same_slot() {
        for (position, field) in StatField::ALL.iter().enumerate() {
            let mut stats = PlayerStats::ZERO;
            stats.set(*field, position as u32 + 1);
            assert_eq!(stats.get(*field), position as u32 + 1);

            // Every other counter stays at zero.
            let touched = stats.iter().filter(|(_, value)| *value != 0).count();
            assert_eq!(touched, 1);
        }
    }

    #[test]
    fn test_values_follow_declared_order() {
        let stats: PlayerStats = StatField::ALL
            .iter()
            .map(|field| (*field, field.index() as u32 * 10))
            .collect();

        let values = stats.values();
        assert_eq!(values[0], 0);
        assert_eq!(values[StatField::Blocks.index()], 100);
        assert_eq!(values[StatField::DigErrors.index()], 140);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keys_match_identifiers() {
        let stats = PlayerStats::ZERO.with(StatField::AttackErrors, 3);
        let json = serde_json::to_value(stats).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), StatField::COUNT);
        for field in StatField::ALL {
            assert!(object.contains_key(field.as_ref()), "missing {field}");
        }
        assert_eq!(object["attackErrors"], 3);
    }
}
