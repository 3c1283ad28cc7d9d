//! Display formatting for terminal output and exports
//!
//! Business values stay numeric; this module is where currency symbols and
//! timestamp formats are applied.

pub mod transaction;

pub use transaction::{format_transaction_line, format_transaction_register};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// A strftime format string known to be valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat(String);

impl TimestampFormat {
    /// Validate a strftime format string
    pub fn parse(format: &str) -> TrackerResult<Self> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(TrackerError::Config(format!(
                "Invalid timestamp format: '{}'",
                format
            )));
        }
        Ok(Self(format.to_string()))
    }

    /// Render a UTC timestamp in local time
    pub fn format(&self, timestamp: DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&Local)
            .format(&self.0)
            .to_string()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self("%Y-%m-%d %H:%M:%S".to_string())
    }
}

/// How amounts and timestamps are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub timestamp_format: TimestampFormat,
}

impl DisplayOptions {
    /// Build from user settings, validating the timestamp format
    pub fn from_settings(settings: &Settings) -> TrackerResult<Self> {
        Ok(Self {
            currency_symbol: settings.currency_symbol.clone(),
            timestamp_format: TimestampFormat::parse(&settings.timestamp_format)?,
        })
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub fn timestamp(&self, timestamp: DateTime<Utc>) -> String {
        self.timestamp_format.format(timestamp)
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            timestamp_format: TimestampFormat::default(),
        }
    }
}
