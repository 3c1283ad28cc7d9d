//! Storage layer for money-tracker
//!
//! The ledger is persisted as a single serialized unit: the running balance
//! plus the full transaction log. `LedgerStore` is the seam between the
//! ledger engine and the place that unit lives; `JsonFileStore` is the
//! on-disk implementation and `MemoryStore` keeps the same JSON in memory.

pub mod file_io;
pub mod json_store;
pub mod memory;

pub use file_io::{read_json_optional, write_json_atomic};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::models::{Money, Transaction};

/// Current version of the persisted ledger layout
pub const LEDGER_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    LEDGER_SCHEMA_VERSION
}

/// Everything the ledger needs to be reconstructed exactly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerData {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Running balance at the time of the save
    pub balance: Money,

    /// Transaction log in insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl LedgerData {
    /// Bundle a balance and log for saving
    pub fn new(balance: Money, transactions: Vec<Transaction>) -> Self {
        Self {
            schema_version: LEDGER_SCHEMA_VERSION,
            balance,
            transactions,
        }
    }
}

impl Default for LedgerData {
    fn default() -> Self {
        Self::new(Money::zero(), Vec::new())
    }
}

/// A durable location for the ledger's state
///
/// Implementations must:
/// - return `Ok(None)` from `load` only when nothing has been stored yet
/// - return `StoreCorrupt` when stored content exists but cannot be read
/// - make `save` all-or-nothing, reporting failures as `StoreWrite`
pub trait LedgerStore {
    /// Read the stored state, if any
    fn load(&self) -> TrackerResult<Option<LedgerData>>;

    /// Replace the stored state with `data`
    fn save(&self, data: &LedgerData) -> TrackerResult<()>;

    /// Human-readable location used in log messages
    fn location(&self) -> String;
}
