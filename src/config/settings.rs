//! User settings for Spendbook
//!
//! Manages display preferences: currency symbol, how many recent expenses
//! to show and the width of the spending chart.

use serde::{Deserialize, Serialize};

use super::paths::SpendbookPaths;
use crate::error::SpendbookError;
use crate::storage::file_io::write_json_atomic;

/// User settings for Spendbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default number of rows in the recent expenses view; `None` shows all
    #[serde(default)]
    pub recent_limit: Option<usize>,

    /// Width of the bars in the spending report
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_chart_width() -> usize {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            recent_limit: None,
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpendbookPaths) -> Result<Self, SpendbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendbookPaths) -> Result<(), SpendbookError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
