//! JSON Export functionality
//!
//! Exports the complete ledger to JSON with schema versioning.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::{Money, Transaction};
use crate::storage::LedgerStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub balance: Money,

    /// Raw per-category sums, same as `Ledger::category_totals`
    pub category_totals: BTreeMap<String, Money>,

    /// All transactions, oldest first
    pub transactions: Vec<Transaction>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    pub earliest_transaction: Option<DateTime<Utc>>,
    pub latest_transaction: Option<DateTime<Utc>>,
}

impl FullExport {
    /// Capture the ledger's current state
    pub fn from_ledger<S: LedgerStore>(ledger: &Ledger<S>) -> Self {
        let transactions = ledger.snapshot().to_vec();
        let category_totals = ledger.category_totals();

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            category_count: category_totals.len(),
            earliest_transaction: transactions.first().map(|t| t.timestamp()),
            latest_transaction: transactions.last().map(|t| t.timestamp()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            balance: ledger.current_balance(),
            category_totals,
            transactions,
            metadata,
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<S: LedgerStore, W: Write>(
    ledger: &Ledger<S>,
    writer: W,
    pretty: bool,
) -> TrackerResult<()> {
    let export = FullExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_export_captures_state() {
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        ledger
            .add_income(Money::from_cents(10000), "Salary", "Work")
            .unwrap();
        ledger
            .add_expense(Money::from_cents(2500), "Taxi", "Transport")
            .unwrap();

        let mut buffer = Vec::new();
        export_full_json(&ledger, &mut buffer, true).unwrap();
        let export: FullExport = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.balance, Money::from_cents(7500));
        assert_eq!(export.transactions.as_slice(), ledger.snapshot());
        assert_eq!(export.category_totals["Transport"], Money::from_cents(2500));
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.category_count, 2);
        assert_eq!(
            export.metadata.earliest_transaction,
            Some(ledger.snapshot()[0].timestamp())
        );
    }

    #[test]
    fn test_empty_ledger_export() {
        let ledger = Ledger::load(MemoryStore::new()).unwrap();
        let export = FullExport::from_ledger(&ledger);

        assert!(export.transactions.is_empty());
        assert!(export.metadata.earliest_transaction.is_none());
        assert!(export.balance.is_zero());
    }
}
