//! Category Report
//!
//! Per-category totals with transaction counts, plus overall income and
//! expense sums. Category totals add income and expense amounts together
//! without netting, matching `Ledger::category_totals`.

use std::collections::BTreeMap;

use crate::display::DisplayOptions;
use crate::ledger::Ledger;
use crate::models::{Money, TransactionKind};
use crate::storage::LedgerStore;

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    /// Raw sum of income and expense amounts
    pub total: Money,
    pub income_count: usize,
    pub expense_count: usize,
}

impl CategorySummary {
    pub fn transaction_count(&self) -> usize {
        self.income_count + self.expense_count
    }
}

/// Category report for the whole ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// One entry per category, ordered by name
    pub categories: Vec<CategorySummary>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
}

impl CategoryReport {
    /// Build the report from the ledger's current state
    pub fn generate<S: LedgerStore>(ledger: &Ledger<S>) -> Self {
        let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();

        for txn in ledger.snapshot() {
            let entry = counts.entry(txn.category()).or_default();
            match txn.kind() {
                TransactionKind::Income => {
                    entry.0 += 1;
                    total_income = total_income.saturating_add(txn.amount());
                }
                TransactionKind::Expense => {
                    entry.1 += 1;
                    total_expenses = total_expenses.saturating_add(txn.amount());
                }
            }
        }

        let categories = ledger
            .category_totals()
            .into_iter()
            .map(|(category, total)| {
                let (income_count, expense_count) =
                    counts.get(category.as_str()).copied().unwrap_or_default();
                CategorySummary {
                    category,
                    total,
                    income_count,
                    expense_count,
                }
            })
            .collect();

        Self {
            categories,
            total_income,
            total_expenses,
            balance: ledger.current_balance(),
        }
    }

    /// Format the categories section and current balance for the terminal
    pub fn format_terminal(&self, opts: &DisplayOptions) -> String {
        let mut output = String::from("--- Categories ---\n");

        if self.categories.is_empty() {
            output.push_str("No categories yet.\n");
        }

        for summary in &self.categories {
            output.push_str(&format!(
                "{}: {}\n",
                summary.category,
                opts.money(summary.total)
            ));
        }

        output.push('\n');
        output.push_str(&format!("Total Income:    {}\n", opts.money(self.total_income)));
        output.push_str(&format!("Total Expenses:  {}\n", opts.money(self.total_expenses)));
        output.push_str(&format!("Current Balance: {}\n", opts.money(self.balance)));
        output.push_str("--------------------\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ledger() -> Ledger<MemoryStore> {
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        ledger
            .add_income(Money::from_cents(10000), "Refund", "Food")
            .unwrap();
        ledger
            .add_expense(Money::from_cents(3000), "Lunch", "Food")
            .unwrap();
        ledger
            .add_income(Money::from_cents(50000), "Salary", "Work")
            .unwrap();
        ledger
    }

    #[test]
    fn test_generate() {
        let report = CategoryReport::generate(&ledger());

        assert_eq!(report.categories.len(), 2);
        let food = &report.categories[0];
        assert_eq!(food.category, "Food");
        assert_eq!(food.total, Money::from_cents(13000));
        assert_eq!(food.income_count, 1);
        assert_eq!(food.expense_count, 1);
        assert_eq!(food.transaction_count(), 2);

        assert_eq!(report.total_income, Money::from_cents(60000));
        assert_eq!(report.total_expenses, Money::from_cents(3000));
        assert_eq!(report.balance, Money::from_cents(57000));
    }

    #[test]
    fn test_empty_report() {
        let ledger = Ledger::load(MemoryStore::new()).unwrap();
        let report = CategoryReport::generate(&ledger);

        assert!(report.categories.is_empty());
        let output = report.format_terminal(&DisplayOptions::default());
        assert!(output.contains("No categories yet."));
        assert!(output.contains("Current Balance: ₹0.00"));
    }

    #[test]
    fn test_generate_at_the_i64_limit() {
        let max = Money::from_cents(i64::MAX);
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        ledger.add_income(max, "Jackpot", "Luck").unwrap();
        ledger.add_expense(max, "Yacht", "Fun").unwrap();
        assert!(ledger
            .add_income(Money::from_cents(1), "Coin", "Found")
            .unwrap_err()
            .is_invalid_amount());

        let report = CategoryReport::generate(&ledger);

        assert_eq!(report.total_income, max);
        assert_eq!(report.total_expenses, max);
        assert!(report.balance.is_zero());
        assert_eq!(report.categories.len(), 2);
        assert!(report.categories.iter().all(|c| c.total == max));
    }

    #[test]
    fn test_format_terminal() {
        let output = CategoryReport::generate(&ledger()).format_terminal(&DisplayOptions::default());

        assert!(output.contains("Food: ₹130.00"));
        assert!(output.contains("Work: ₹500.00"));
        assert!(output.contains("Current Balance: ₹570.00"));
    }
}
