//! Counter identities and their display grouping.
//!
//! A [`StatField`] names one of the fifteen counters tracked for a player. The
//! declared order of [`StatField::ALL`] is significant: it is the column order
//! of the tab-separated export and the navigation order of the terminal UI.
//!
//! [`Category`] is display-only. The record itself is flat; categories exist so
//! presentation layers can group counters into panels.

/// One of the fifteen per-player counters.
///
/// The string form (via `Display`, `AsRef<str>` and `FromStr`) is the internal
/// camelCase identifier used in the persisted record and the export header,
/// e.g. `attackErrors`. Parsing is ASCII case-insensitive.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum StatField {
    // Attacking
    Kills,
    AttackErrors,
    AttackAttempts,

    // Serving
    Aces,
    ServiceErrors,
    ServeAttempts,

    // Reception
    ReceptionErrors,
    ReceptionAttempts,

    // Setting
    Assists,
    SettingErrors,

    // Blocking
    Blocks,
    BlockErrors,
    BlockAttempts,

    // Digging
    Digs,
    DigErrors,
}

impl StatField {
    /// Number of counters in a [`PlayerStats`](crate::PlayerStats) record.
    pub const COUNT: usize = 15;

    /// Every field in declared (export) order.
    pub const ALL: [StatField; Self::COUNT] = [
        StatField::Kills,
        StatField::AttackErrors,
        StatField::AttackAttempts,
        StatField::Aces,
        StatField::ServiceErrors,
        StatField::ServeAttempts,
        StatField::ReceptionErrors,
        StatField::ReceptionAttempts,
        StatField::Assists,
        StatField::SettingErrors,
        StatField::Blocks,
        StatField::BlockErrors,
        StatField::BlockAttempts,
        StatField::Digs,
        StatField::DigErrors,
    ];

    /// Human-readable label shown next to the counter.
    pub const fn label(self) -> &'static str {
        match self {
            StatField::Kills => "Kills",
            StatField::AttackErrors => "Attack Errors",
            StatField::AttackAttempts => "Attack Attempts",
            StatField::Aces => "Aces",
            StatField::ServiceErrors => "Service Errors",
            StatField::ServeAttempts => "Serve Attempts",
            StatField::ReceptionErrors => "Reception Errors",
            StatField::ReceptionAttempts => "Reception Attempts",
            StatField::Assists => "Assists",
            StatField::SettingErrors => "Setting Errors",
            StatField::Blocks => "Blocks",
            StatField::BlockErrors => "Block Errors",
            StatField::BlockAttempts => "Block Attempts",
            StatField::Digs => "Digs",
            StatField::DigErrors => "Dig Errors",
        }
    }

    /// Category panel this counter is displayed in.
    pub const fn category(self) -> Category {
        match self {
            StatField::Kills | StatField::AttackErrors | StatField::AttackAttempts => {
                Category::Attacking
            }
            StatField::Aces | StatField::ServiceErrors | StatField::ServeAttempts => {
                Category::Serving
            }
            StatField::ReceptionErrors | StatField::ReceptionAttempts => Category::Reception,
            StatField::Assists | StatField::SettingErrors => Category::Setting,
            StatField::Blocks | StatField::BlockErrors | StatField::BlockAttempts => {
                Category::Blocking
            }
            StatField::Digs | StatField::DigErrors => Category::Digging,
        }
    }

    /// Position of this field in [`StatField::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Display grouping of counters.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Attacking,
    Serving,
    Reception,
    Setting,
    Blocking,
    Digging,
}

impl Category {
    /// Every category in panel order.
    pub const ALL: [Category; 6] = [
        Category::Attacking,
        Category::Serving,
        Category::Reception,
        Category::Setting,
        Category::Blocking,
        Category::Digging,
    ];

    /// Panel title.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Attacking => "Attacking",
            Category::Serving => "Serving",
            Category::Reception => "Reception",
            Category::Setting => "Setting",
            Category::Blocking => "Blocking",
            Category::Digging => "Digging",
        }
    }

    /// Counters shown in this category, in declared order.
    pub const fn fields(self) -> &'static [StatField] {
        match self {
            Category::Attacking => &[
                StatField::Kills,
                StatField::AttackErrors,
                StatField::AttackAttempts,
            ],
            Category::Serving => &[
                StatField::Aces,
                StatField::ServiceErrors,
                StatField::ServeAttempts,
            ],
            Category::Reception => &[StatField::ReceptionErrors, StatField::ReceptionAttempts],
            Category::Setting => &[StatField::Assists, StatField::SettingErrors],
            Category::Blocking => &[
                StatField::Blocks,
                StatField::BlockErrors,
                StatField::BlockAttempts,
            ],
            Category::Digging => &[StatField::Digs, StatField::DigErrors],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_identifiers_are_camel_case() {
        assert_eq!(StatField::Kills.to_string(), "kills");
        assert_eq!(StatField::AttackErrors.as_ref(), "attackErrors");
        assert_eq!(StatField::ReceptionAttempts.to_string(), "receptionAttempts");
        assert_eq!(StatField::DigErrors.as_ref(), "digErrors");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(StatField::from_str("serviceErrors"), Ok(StatField::ServiceErrors));
        assert_eq!(StatField::from_str("SERVICEERRORS"), Ok(StatField::ServiceErrors));
        assert!(StatField::from_str("spikes").is_err());
    }

    #[test]
    fn test_index_matches_declared_order() {
        for (position, field) in StatField::ALL.iter().enumerate() {
            assert_eq!(field.index(), position);
        }
    }

    #[test]
    fn test_categories_cover_every_field_in_order() {
        let flattened: Vec<StatField> = Category::ALL
            .iter()
            .flat_map(|category| category.fields().iter().copied())
            .collect();

        assert_eq!(flattened, StatField::ALL.to_vec());

        for category in Category::ALL {
            for field in category.fields() {
                assert_eq!(field.category(), category);
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(StatField::AttackAttempts.label(), "Attack Attempts");
        assert_eq!(Category::Reception.name(), "Reception");
    }
}
