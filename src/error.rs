//! Custom error types for money-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for money-tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Amount was zero, negative, non-finite, unparseable, or would overflow
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Expense larger than the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// Persisting the ledger failed; the mutation was rolled back
    #[error("Failed to write ledger store: {0}")]
    StoreWrite(String),

    /// The ledger store exists but cannot be trusted
    #[error("Ledger store is corrupt: {0}")]
    StoreCorrupt(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create an "insufficient funds" error
    pub fn insufficient_funds(requested: Money, available: Money) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Check if this is an "insufficient funds" rejection
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }

    /// Check if this is an invalid amount rejection
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if the store could not be loaded
    pub fn is_store_corrupt(&self) -> bool {
        matches!(self, Self::StoreCorrupt(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for money-tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
