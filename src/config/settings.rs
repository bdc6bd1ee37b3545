//! User settings for the weekly tracker
//!
//! Manages display preferences and the default category suggestions.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::DEFAULT_BAR_LENGTH;

/// User settings for the weekly tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in messages and summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of segments in summary progress bars
    #[serde(default = "default_bar_length")]
    pub progress_bar_length: usize,

    /// Categories offered before any have been used
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_bar_length() -> usize {
    DEFAULT_BAR_LENGTH
}

fn default_categories() -> Vec<String> {
    ["Food", "Entertainment", "Transport", "School Supplies"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            progress_bar_length: default_bar_length(),
            default_categories: default_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.progress_bar_length == 0 {
            return Err(TrackerError::Config(
                "progress_bar_length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.progress_bar_length, 20);
        assert_eq!(settings.default_categories.len(), 4);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            progress_bar_length: 10,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.progress_bar_length, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.progress_bar_length, 20);
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::write(paths.settings_file(), "not json").unwrap();
        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(TrackerError::Config(_))
        ));

        std::fs::write(paths.settings_file(), r#"{"progress_bar_length": 0}"#).unwrap();
        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(TrackerError::Config(_))
        ));
    }
}
