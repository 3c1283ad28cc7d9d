//! Transaction model
//!
//! A transaction is one recorded income or expense event. It is immutable
//! once created: fields are only reachable through accessors, and the only
//! constructor is crate-internal so that `balance_after` is always computed
//! by the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in; raises the balance
    Income,
    /// Money going out; lowers the balance
    Expense,
}

impl TransactionKind {
    /// Apply an amount to a balance in this direction
    ///
    /// Returns `None` on overflow.
    pub fn apply(&self, balance: Money, amount: Money) -> Option<Money> {
        match self {
            Self::Income => balance.checked_add(amount),
            Self::Expense => balance.checked_sub(amount),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    timestamp: DateTime<Utc>,
    amount: Money,
    description: String,
    category: String,
    kind: TransactionKind,
    balance_after: Money,
}

impl Transaction {
    /// Record a new transaction timestamped now
    pub(crate) fn record(
        kind: TransactionKind,
        amount: Money,
        description: String,
        category: String,
        balance_after: Money,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            timestamp: Utc::now(),
            amount,
            description,
            category,
            kind,
            balance_after,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// When the transaction was recorded (system clock, UTC)
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Positive magnitude of the transaction
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Ledger balance immediately after this transaction was applied
    pub fn balance_after(&self) -> Money {
        self.balance_after
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with sign: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(cents: i64, after: i64) -> Transaction {
        Transaction::record(
            TransactionKind::Income,
            Money::from_cents(cents),
            "Salary".into(),
            "Work".into(),
            Money::from_cents(after),
        )
    }

    #[test]
    fn test_record_sets_fields() {
        let txn = income(100000, 100000);
        assert_eq!(txn.amount(), Money::from_cents(100000));
        assert_eq!(txn.description(), "Salary");
        assert_eq!(txn.category(), "Work");
        assert_eq!(txn.kind(), TransactionKind::Income);
        assert_eq!(txn.balance_after(), Money::from_cents(100000));
        assert!(txn.is_income());
        assert!(!txn.is_expense());
    }

    #[test]
    fn test_signed_amount() {
        let txn = Transaction::record(
            TransactionKind::Expense,
            Money::from_cents(2000),
            "Groceries".into(),
            "Food".into(),
            Money::from_cents(8000),
        );
        assert_eq!(txn.signed_amount(), Money::from_cents(-2000));
        assert_eq!(income(500, 500).signed_amount(), Money::from_cents(500));
    }

    #[test]
    fn test_kind_apply() {
        let balance = Money::from_cents(1000);
        assert_eq!(
            TransactionKind::Income.apply(balance, Money::from_cents(500)),
            Some(Money::from_cents(1500))
        );
        assert_eq!(
            TransactionKind::Expense.apply(balance, Money::from_cents(500)),
            Some(Money::from_cents(500))
        );
        assert_eq!(
            TransactionKind::Income.apply(Money::from_cents(i64::MAX), Money::from_cents(1)),
            None
        );
    }

    #[test]
    fn test_kind_display_and_serde() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn test_serde_round_trip_keeps_every_field() {
        let txn = income(12345, 12345);
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }
}
