//! Integrity check for loaded ledger state
//!
//! Replays the transaction log from an empty balance and compares every
//! stored `balance_after`, and the stored balance, with the replayed value.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, TransactionKind};
use crate::storage::{LedgerData, LEDGER_SCHEMA_VERSION};

use super::totals::Totals;

/// Verify that stored state is consistent with its own log
pub(crate) fn verify(data: &LedgerData) -> TrackerResult<()> {
    if data.schema_version > LEDGER_SCHEMA_VERSION {
        return Err(TrackerError::StoreCorrupt(format!(
            "unsupported schema version {} (expected at most {})",
            data.schema_version, LEDGER_SCHEMA_VERSION
        )));
    }

    let mut running = Money::zero();

    for (index, txn) in data.transactions.iter().enumerate() {
        if !txn.amount().is_positive() {
            return Err(TrackerError::StoreCorrupt(format!(
                "transaction {} has non-positive amount {}",
                index + 1,
                txn.amount()
            )));
        }

        running = txn.kind().apply(running, txn.amount()).ok_or_else(|| {
            TrackerError::StoreCorrupt(format!("transaction {} overflows the balance", index + 1))
        })?;

        if txn.kind() == TransactionKind::Expense && running.is_negative() {
            return Err(TrackerError::StoreCorrupt(format!(
                "transaction {} overdraws the balance",
                index + 1
            )));
        }

        if running != txn.balance_after() {
            return Err(TrackerError::StoreCorrupt(format!(
                "transaction {} records balance {} but replay gives {}",
                index + 1,
                txn.balance_after(),
                running
            )));
        }
    }

    if Totals::of(&data.transactions).is_none() {
        return Err(TrackerError::StoreCorrupt(
            "category or income/expense totals overflow".into(),
        ));
    }

    if running != data.balance {
        return Err(TrackerError::StoreCorrupt(format!(
            "stored balance {} does not match replayed balance {}",
            data.balance, running
        )));
    }

    Ok(())
}
