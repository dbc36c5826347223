//! CLI-specific configuration for terminal UI.
use std::env;

use client_frontend_core::config::read_var;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `VOLLEY_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 4)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(height) = read_var::<u16>(lookup, "VOLLEY_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_height_has_a_floor() {
        let config = CliConfig::from_lookup(|key| {
            (key == "VOLLEY_MESSAGE_PANEL_HEIGHT").then(|| "1".to_string())
        });
        assert_eq!(config.ui.message_panel_height, 3);
    }

    #[test]
    fn test_panel_height_override() {
        let config = CliConfig::from_lookup(|_| Some("8".to_string()));
        assert_eq!(config.ui.message_panel_height, 8);
        assert_eq!(CliConfig::from_lookup(|_| None).ui.message_panel_height, 4);
    }
}
