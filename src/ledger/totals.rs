//! Magnitude totals over the transaction log
//!
//! Category totals and the overall income/expense sums add amounts without
//! netting, so they can outgrow `i64` even while the balance stays in range.
//! The ledger refuses any mutation that would overflow one of them, and load
//! treats a stored log that overflows them as corrupt.

use std::collections::BTreeMap;

use crate::models::{Money, Transaction, TransactionKind};

#[derive(Debug, Default)]
pub(crate) struct Totals {
    pub(crate) by_category: BTreeMap<String, Money>,
    pub(crate) income: Money,
    pub(crate) expenses: Money,
}

impl Totals {
    /// Totals for `transactions`, or `None` if any of them overflows
    pub(crate) fn of(transactions: &[Transaction]) -> Option<Self> {
        let mut totals = Self::default();
        for txn in transactions {
            totals.add(txn.kind(), txn.amount(), txn.category())?;
        }
        Some(totals)
    }

    /// Fold one more amount in, leaving `self` untouched on overflow
    pub(crate) fn add(&mut self, kind: TransactionKind, amount: Money, category: &str) -> Option<()> {
        let category_total = self
            .by_category
            .get(category)
            .copied()
            .unwrap_or_default()
            .checked_add(amount)?;

        match kind {
            TransactionKind::Income => self.income = self.income.checked_add(amount)?,
            TransactionKind::Expense => self.expenses = self.expenses.checked_add(amount)?,
        }
        self.by_category.insert(category.to_string(), category_total);
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: Money = Money::from_cents(i64::MAX);

    #[test]
    fn test_add_accumulates_by_kind_and_category() {
        let mut totals = Totals::default();
        totals
            .add(TransactionKind::Income, Money::from_cents(100), "Food")
            .unwrap();
        totals
            .add(TransactionKind::Expense, Money::from_cents(30), "Food")
            .unwrap();

        assert_eq!(totals.by_category["Food"], Money::from_cents(130));
        assert_eq!(totals.income, Money::from_cents(100));
        assert_eq!(totals.expenses, Money::from_cents(30));
    }

    #[test]
    fn test_category_overflow_is_refused() {
        let mut totals = Totals::default();
        totals.add(TransactionKind::Income, MAX, "Luck").unwrap();

        assert!(totals
            .add(TransactionKind::Expense, MAX, "Luck")
            .is_none());
        assert_eq!(totals.expenses, Money::zero());
        assert_eq!(totals.by_category["Luck"], MAX);
    }

    #[test]
    fn test_kind_overflow_is_refused() {
        let mut totals = Totals::default();
        totals.add(TransactionKind::Income, MAX, "Luck").unwrap();

        assert!(totals
            .add(TransactionKind::Income, Money::from_cents(1), "Other")
            .is_none());
        assert!(!totals.by_category.contains_key("Other"));
    }
}
