//! Editor configuration.
//!
//! Loaded from `<config dir>/hayat/config.toml` when present, with every
//! field defaulting individually (`#[serde(default)]`) so partial files
//! stay valid across versions.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main editor configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Editor behavior settings
    pub editor: EditorConfig,

    /// UI appearance settings
    pub ui: UiConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_default()
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("hayat").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// Editor behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Undo history capacity (snapshots kept per stack)
    pub undo_limit: usize,

    /// Quiet period after the last keystroke before a snapshot commits (ms)
    pub debounce_delay_ms: u64,
}

impl EditorConfig {
    /// The debounce delay as a `Duration`.
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_limit: 50,
            debounce_delay_ms: 500,
        }
    }
}

/// UI appearance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window width
    pub window_width: f32,

    /// Initial window height
    pub window_height: f32,

    /// Font size in points
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            font_size: 14.0,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.editor.undo_limit, 50);
        assert_eq!(config.editor.debounce_delay_ms, 500);
        assert_eq!(config.ui.window_width, 800.0);
        assert_eq!(config.ui.window_height, 600.0);
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.editor.undo_limit, config.editor.undo_limit);
        assert_eq!(parsed.editor.debounce_delay_ms, config.editor.debounce_delay_ms);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[editor]\nundo_limit = 10").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.editor.undo_limit, 10);
        assert_eq!(config.editor.debounce_delay_ms, 500);
        assert_eq!(config.ui.font_size, 14.0);
    }

    #[test]
    fn test_debounce_delay_duration() {
        let config = EditorConfig::default();
        assert_eq!(config.debounce_delay(), Duration::from_millis(500));
    }
}
