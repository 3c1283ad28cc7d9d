//! Export module for money-tracker
//!
//! Renderers over the ledger's read-only snapshot:
//! - CSV: the transaction table (spreadsheet-compatible)
//! - Statement: a printable bordered table, optionally coloured by kind
//! - JSON / YAML: the full ledger state for backups and other tools

pub mod csv;
pub mod json;
pub mod statement;
pub mod yaml;

pub use self::csv::{export_transactions_csv, TRANSACTION_HEADERS};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use statement::{export_statement, render_statement};
pub use yaml::export_full_yaml;
