//! User settings for money-tracker
//!
//! Rendering preferences (currency symbol, timestamp format), default export
//! file names, and whether the audit log is kept.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::storage::write_json_atomic;

/// User settings for money-tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol prefixed to amounts by renderers
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for transaction timestamps (local time)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// File name used by `export csv` when no path is given
    #[serde(default = "default_csv_filename")]
    pub csv_filename: String,

    /// File name used by `export statement` when no path is given
    #[serde(default = "default_statement_filename")]
    pub statement_filename: String,

    /// Whether to append to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Colour statement rows by transaction kind
    #[serde(default = "default_true")]
    pub colored_statement: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_csv_filename() -> String {
    "transaction_history.csv".to_string()
}

fn default_statement_filename() -> String {
    "money_tracker.txt".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            timestamp_format: default_timestamp_format(),
            csv_filename: default_csv_filename(),
            statement_filename: default_statement_filename(),
            audit_enabled: true,
            colored_statement: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        write_json_atomic(paths.settings_file(), self)
            .map_err(|e| TrackerError::Config(format!("Failed to write settings file: {}", e)))
    }
}
