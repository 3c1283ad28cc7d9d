//! Transaction display formatting
//!
//! One line per transaction, in the order the ledger recorded them.

use super::DisplayOptions;
use crate::models::Transaction;

/// Format a single transaction for the register
pub fn format_transaction_line(txn: &Transaction, opts: &DisplayOptions) -> String {
    format!(
        "{} - {}: {} - {} ({}) - Balance: {}",
        txn.kind(),
        opts.timestamp(txn.timestamp()),
        opts.money(txn.amount()),
        txn.description(),
        txn.category(),
        opts.money(txn.balance_after())
    )
}

/// Format the transaction register
///
/// With `limit`, only the most recent `limit` transactions are shown.
pub fn format_transaction_register(
    transactions: &[Transaction],
    opts: &DisplayOptions,
    limit: Option<usize>,
) -> String {
    let mut output = String::from("--- Transactions ---\n");

    if transactions.is_empty() {
        output.push_str("No transactions recorded.\n");
        return output;
    }

    let start = limit
        .map(|n| transactions.len().saturating_sub(n))
        .unwrap_or(0);

    if start > 0 {
        output.push_str(&format!("({} earlier transactions not shown)\n", start));
    }

    for txn in &transactions[start..] {
        output.push_str(&format_transaction_line(txn, opts));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::models::Money;
    use crate::storage::MemoryStore;

    fn sample() -> Vec<Transaction> {
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        ledger
            .add_income(Money::from_cents(100000), "Salary", "Work")
            .unwrap();
        ledger
            .add_expense(Money::from_cents(20000), "Groceries", "Food")
            .unwrap();
        ledger.snapshot().to_vec()
    }

    #[test]
    fn test_line_format() {
        let txns = sample();
        let line = format_transaction_line(&txns[1], &DisplayOptions::default());

        assert!(line.starts_with("Expense - "));
        assert!(line.ends_with(": ₹200.00 - Groceries (Food) - Balance: ₹800.00"));
    }

    #[test]
    fn test_empty_register() {
        let output = format_transaction_register(&[], &DisplayOptions::default(), None);
        assert!(output.contains("No transactions recorded."));
    }

    #[test]
    fn test_register_lists_in_order() {
        let output = format_transaction_register(&sample(), &DisplayOptions::default(), None);
        let salary = output.find("Salary").unwrap();
        let groceries = output.find("Groceries").unwrap();
        assert!(salary < groceries);
    }

    #[test]
    fn test_register_limit_keeps_latest() {
        let output = format_transaction_register(&sample(), &DisplayOptions::default(), Some(1));
        assert!(!output.contains("Salary"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("(1 earlier transactions not shown)"));
    }
}
