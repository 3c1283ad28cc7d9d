//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger. Handlers print results to
//! stdout and return errors for `main` to report.

pub mod audit;
pub mod export;
pub mod transaction;

pub use audit::handle_audit;
pub use export::{handle_export_command, ExportCommands};
pub use transaction::{
    handle_balance, handle_categories, handle_list, handle_record, parse_amount, TransactionArgs,
};
