//! Audit entry data structures
//!
//! Defines the structure of audit log entries: one per recorded transaction
//! and one per rejected mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction, TransactionId, TransactionKind};

/// What happened to a requested mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction was appended and persisted
    Recorded,
    /// Request was refused and the ledger left unchanged
    Rejected,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Recorded => write!(f, "RECORDED"),
            Operation::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub kind: TransactionKind,

    pub amount: Money,

    pub description: String,

    pub category: String,

    /// Set for recorded transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<TransactionId>,

    /// Set for recorded transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_after: Option<Money>,

    /// Set for rejections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AuditEntry {
    /// Entry for a transaction that was appended to the ledger
    pub fn recorded(txn: &Transaction) -> Self {
        Self {
            timestamp: txn.timestamp(),
            operation: Operation::Recorded,
            kind: txn.kind(),
            amount: txn.amount(),
            description: txn.description().to_string(),
            category: txn.category().to_string(),
            transaction_id: Some(txn.id()),
            balance_after: Some(txn.balance_after()),
            reason: None,
        }
    }

    /// Entry for a request the ledger refused
    pub fn rejected(
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Rejected,
            kind,
            amount,
            description: description.into(),
            category: category.into(),
            transaction_id: None,
            balance_after: None,
            reason: Some(reason.into()),
        }
    }

    /// Format as a single human-readable line
    pub fn format_human_readable(&self, currency_symbol: &str) -> String {
        let mut line = format!(
            "{} {} {} {} - {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.kind,
            self.amount.format_with_symbol(currency_symbol),
            self.description,
            self.category
        );

        if let Some(balance) = self.balance_after {
            line.push_str(&format!(
                " -> balance {}",
                balance.format_with_symbol(currency_symbol)
            ));
        }
        if let Some(reason) = &self.reason {
            line.push_str(&format!(": {}", reason));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_entry() {
        let entry = AuditEntry::rejected(
            TransactionKind::Expense,
            Money::from_cents(90000),
            "Rent",
            "Housing",
            "Insufficient funds",
        );

        assert_eq!(entry.operation, Operation::Rejected);
        assert!(entry.transaction_id.is_none());
        assert!(entry.balance_after.is_none());
        assert_eq!(entry.reason.as_deref(), Some("Insufficient funds"));
    }

    #[test]
    fn test_rejected_serialization_skips_empty_fields() {
        let entry = AuditEntry::rejected(
            TransactionKind::Expense,
            Money::from_cents(100),
            "Coffee",
            "Food",
            "nope",
        );
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"rejected\""));
        assert!(json.contains("\"kind\":\"expense\""));
        assert!(!json.contains("transaction_id"));
        assert!(!json.contains("balance_after"));
    }

    #[test]
    fn test_format_human_readable() {
        let entry = AuditEntry::rejected(
            TransactionKind::Expense,
            Money::from_cents(90000),
            "Rent",
            "Housing",
            "Insufficient funds",
        );
        let line = entry.format_human_readable("₹");

        assert!(line.contains("REJECTED"));
        assert!(line.contains("Expense"));
        assert!(line.contains("₹900.00"));
        assert!(line.contains("Rent (Housing)"));
        assert!(line.ends_with(": Insufficient funds"));
    }
}
