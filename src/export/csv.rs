//! CSV Export functionality
//!
//! Writes the transaction log as a spreadsheet-compatible table, one row per
//! transaction in ledger order.

use std::io::Write;

use crate::display::DisplayOptions;
use crate::error::TrackerResult;
use crate::models::Transaction;

/// Column headers of the transaction CSV, in row order
pub const TRANSACTION_HEADERS: [&str; 6] = [
    "Date/Time",
    "Amount",
    "Description",
    "Category",
    "Type",
    "Available Balance",
];

/// Flatten a transaction into its CSV row
///
/// Amounts are plain decimals; the currency symbol is left to spreadsheets.
pub fn transaction_record(txn: &Transaction, opts: &DisplayOptions) -> [String; 6] {
    [
        opts.timestamp(txn.timestamp()),
        txn.amount().to_string(),
        txn.description().to_string(),
        txn.category().to_string(),
        txn.kind().to_string(),
        txn.balance_after().to_string(),
    ]
}

/// Export transactions to CSV, returning the number of rows written
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    opts: &DisplayOptions,
    writer: W,
) -> TrackerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(TRANSACTION_HEADERS)?;

    for txn in transactions {
        csv_writer.write_record(transaction_record(txn, opts))?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::models::Money;
    use crate::storage::MemoryStore;

    fn export(transactions: &[Transaction]) -> String {
        let mut buffer = Vec::new();
        export_transactions_csv(transactions, &DisplayOptions::default(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_ledger() {
        let output = export(&[]);
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            ["Date/Time,Amount,Description,Category,Type,Available Balance"]
        );
    }

    #[test]
    fn test_rows_follow_ledger_order() {
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        ledger
            .add_income(Money::from_cents(100000), "Salary", "Work")
            .unwrap();
        ledger
            .add_expense(Money::from_cents(20000), "Groceries, weekly", "Food")
            .unwrap();

        let output = export(ledger.snapshot());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(",1000.00,Salary,Work,Income,1000.00"));
        assert!(lines[2].ends_with(",200.00,\"Groceries, weekly\",Food,Expense,800.00"));
    }

    #[test]
    fn test_rows_parse_back_with_csv_reader() {
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        ledger
            .add_income(Money::from_cents(5050), "Say \"hi\"", "Misc")
            .unwrap();

        let output = export(ledger.snapshot());
        let mut reader = csv::Reader::from_reader(output.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), TRANSACTION_HEADERS);

        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[1], "50.50");
        assert_eq!(&record[2], "Say \"hi\"");
        assert_eq!(&record[4], "Income");
    }
}
