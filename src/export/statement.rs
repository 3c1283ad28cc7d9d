//! Printable statement
//!
//! A bordered table of the transaction log for printing or sharing:
//! Date/Time, Transaction, Category, Available Balance, Description.
//! Amounts carry the currency symbol, and rows can be coloured by kind
//! (income green, expense red).

use std::io::Write;

use tabled::settings::object::Rows;
use tabled::settings::{Color, Style};
use tabled::{Table, Tabled};

use crate::display::DisplayOptions;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};

#[derive(Tabled)]
struct StatementRow {
    #[tabled(rename = "Date/Time")]
    timestamp: String,
    #[tabled(rename = "Transaction")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Available Balance")]
    balance_after: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl StatementRow {
    fn new(txn: &Transaction, opts: &DisplayOptions) -> Self {
        Self {
            timestamp: opts.timestamp(txn.timestamp()),
            amount: opts.money(txn.amount()),
            category: txn.category().to_string(),
            balance_after: opts.money(txn.balance_after()),
            description: txn.description().to_string(),
        }
    }
}

/// Render the statement as text
pub fn render_statement(
    transactions: &[Transaction],
    balance: Money,
    opts: &DisplayOptions,
    colored: bool,
) -> String {
    let rows: Vec<StatementRow> = transactions
        .iter()
        .map(|txn| StatementRow::new(txn, opts))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());

    if colored {
        for (index, txn) in transactions.iter().enumerate() {
            let color = match txn.kind() {
                TransactionKind::Income => Color::FG_GREEN,
                TransactionKind::Expense => Color::FG_RED,
            };
            // Row 0 is the header
            table.modify(Rows::single(index + 1), color);
        }
    }

    format!(
        "Money Tracker Statement\n{}\nCurrent Balance: {}\n",
        table,
        opts.money(balance)
    )
}

/// Write the statement, returning the number of transactions included
pub fn export_statement<W: Write>(
    transactions: &[Transaction],
    balance: Money,
    opts: &DisplayOptions,
    colored: bool,
    mut writer: W,
) -> TrackerResult<usize> {
    let text = render_statement(transactions, balance, opts, colored);
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| TrackerError::Export(format!("Failed to write statement: {}", e)))?;
    Ok(transactions.len())
}
