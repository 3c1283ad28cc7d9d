//! Transaction CLI commands
//!
//! Recording income and expenses, and viewing the ledger.

use clap::Args;

use crate::display::{format_transaction_register, DisplayOptions};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::{Money, TransactionKind};
use crate::reports::CategoryReport;
use crate::storage::LedgerStore;

/// Arguments shared by `income` and `expense`
#[derive(Args, Debug, Clone)]
pub struct TransactionArgs {
    /// Amount (e.g. "1000", "49.99", "₹250")
    pub amount: String,
    /// What the money was for
    pub description: String,
    /// Category used for totals
    pub category: String,
}

/// Parse a user-entered amount
pub fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| TrackerError::InvalidAmount(format!("'{}': {}", input, e)))
}

/// Record a transaction of `kind` from CLI arguments
pub fn handle_record<S: LedgerStore>(
    ledger: &mut Ledger<S>,
    opts: &DisplayOptions,
    kind: TransactionKind,
    args: TransactionArgs,
) -> TrackerResult<()> {
    let amount = match parse_amount(&args.amount) {
        Ok(amount) => amount,
        Err(err) => {
            // Nothing parsed, so the entry carries a zero amount and the
            // raw input lives in the reason
            ledger.audit_rejection(kind, Money::zero(), args.description, args.category, &err);
            return Err(err);
        }
    };

    let txn = match kind {
        TransactionKind::Income => ledger.add_income(amount, args.description, args.category)?,
        TransactionKind::Expense => ledger.add_expense(amount, args.description, args.category)?,
    };

    println!(
        "{} of {} added. New balance: {}",
        txn.kind(),
        opts.money(txn.amount()),
        opts.money(txn.balance_after())
    );

    Ok(())
}

/// Print the register, category totals, and balance
pub fn handle_list<S: LedgerStore>(
    ledger: &Ledger<S>,
    opts: &DisplayOptions,
    limit: Option<usize>,
) -> TrackerResult<()> {
    println!();
    print!(
        "{}",
        format_transaction_register(ledger.snapshot(), opts, limit)
    );
    println!();
    print!("{}", CategoryReport::generate(ledger).format_terminal(opts));
    Ok(())
}

/// Print per-category totals with counts
pub fn handle_categories<S: LedgerStore>(
    ledger: &Ledger<S>,
    opts: &DisplayOptions,
) -> TrackerResult<()> {
    let report = CategoryReport::generate(ledger);

    if report.categories.is_empty() {
        println!("No categories yet. Record a transaction first.");
        return Ok(());
    }

    println!("{:20} {:>14} {:>8} {:>8}", "Category", "Total", "Income", "Expense");
    println!("{}", "-".repeat(53));
    for summary in &report.categories {
        println!(
            "{:20} {:>14} {:>8} {:>8}",
            summary.category,
            opts.money(summary.total),
            summary.income_count,
            summary.expense_count
        );
    }

    Ok(())
}

pub fn handle_balance<S: LedgerStore>(ledger: &Ledger<S>, opts: &DisplayOptions) {
    println!("Current Balance: {}", opts.money(ledger.current_balance()));
}
