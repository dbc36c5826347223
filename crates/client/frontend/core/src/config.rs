//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::str::FromStr;

use stats_runtime::parse_bool;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `VOLLEY_MESSAGE_CAPACITY` - Message log capacity (default: 32)
    /// - `VOLLEY_CONFIRM_RESET` - Ask before "Reset All" (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_var::<usize>(&lookup, "VOLLEY_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(confirm) = read_bool(&lookup, "VOLLEY_CONFIRM_RESET") {
            config.messages.confirm_reset = confirm;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Require an explicit confirmation before resetting every counter.
    pub confirm_reset: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 32,
            confirm_reset: true,
        }
    }
}

/// Parse `key` through `lookup`, treating unset or malformed values as absent.
pub fn read_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}

/// Boolean flavour of [`read_var`], accepting `true/false`, `1/0`, `yes/no`, `on/off`.
pub fn read_bool(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    parse_bool(&lookup(key)?)
}
