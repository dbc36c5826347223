//! Store configuration structures and loaders.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "volley-player-stats";

/// Application name used for platform directories.
const APP_NAME: &str = "volley-stats";

/// Configuration for building a [`StatStore`](crate::StatStore).
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Directory holding the record file.
    pub data_dir: PathBuf,
    /// Fixed identifier of the stored record (file stem).
    pub storage_key: String,
    /// When false the store keeps its record in memory only.
    pub enable_persistence: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            enable_persistence: true,
        }
    }
}

impl StoreConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `VOLLEY_DATA_DIR` - Directory for the record file (default: platform data dir)
    /// - `VOLLEY_STORAGE_KEY` - Record name (default: `volley-player-stats`)
    /// - `VOLLEY_PERSISTENCE` - Persist to disk (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup("VOLLEY_DATA_DIR").filter(|dir| !dir.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(key) = lookup("VOLLEY_STORAGE_KEY") {
            config.storage_key = key;
        }

        if let Some(raw) = lookup("VOLLEY_PERSISTENCE") {
            config.enable_persistence =
                parse_bool(&raw).ok_or(ConfigError::InvalidBool("VOLLEY_PERSISTENCE", raw))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Override the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Reject storage keys that would escape the data directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = self.storage_key.trim();
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key == "."
            || key == ".."
        {
            return Err(ConfigError::InvalidStorageKey(self.storage_key.clone()));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid storage key: {0:?}")]
    InvalidStorageKey(String),

    #[error("invalid boolean for {0}: {1:?}")]
    InvalidBool(&'static str, String),
}

/// Platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/volley-stats`
/// - Linux: `~/.local/share/volley-stats` (or `$XDG_DATA_HOME/volley-stats`)
/// - Windows: `%APPDATA%\volley-stats`
/// - Fallback: `./volley_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./volley_data"))
}

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/volley-stats/logs`
/// - Linux: `~/.cache/volley-stats/logs` (or `$XDG_CACHE_HOME/volley-stats/logs`)
/// - Windows: `%LOCALAPPDATA%\volley-stats\logs`
/// - Fallback: `/tmp/volley-stats/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME))
        .join("logs")
}

/// Parse the boolean spellings accepted by every `VOLLEY_*` switch.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.enable_persistence);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_path_like_keys() {
        for key in ["", "  ", "a/b", "a\\b", ".", ".."] {
            let config = StoreConfig {
                storage_key: key.to_string(),
                ..StoreConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidStorageKey(_))),
                "{key:?}"
            );
        }
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("VOLLEY_DATA_DIR", "/srv/volley"),
            ("VOLLEY_STORAGE_KEY", "season-2"),
            ("VOLLEY_PERSISTENCE", "off"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/volley"));
        assert_eq!(config.storage_key, "season-2");
        assert!(!config.enable_persistence);
    }

    #[test]
    fn test_from_lookup_ignores_empty_data_dir() {
        let config = StoreConfig::from_lookup(lookup(&[("VOLLEY_DATA_DIR", "")])).unwrap();
        assert_eq!(config.data_dir, data_dir());
        assert!(config.enable_persistence);
    }

    #[test]
    fn test_from_lookup_rejects_bad_bool() {
        let result = StoreConfig::from_lookup(lookup(&[("VOLLEY_PERSISTENCE", "maybe")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBool("VOLLEY_PERSISTENCE", ref raw)) if raw == "maybe"
        ));
    }

    #[test]
    fn test_from_lookup_validates_storage_key() {
        let result = StoreConfig::from_lookup(lookup(&[("VOLLEY_STORAGE_KEY", "../escape")]));
        assert!(matches!(result, Err(ConfigError::InvalidStorageKey(_))));
    }
}
