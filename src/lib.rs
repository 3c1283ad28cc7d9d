//! money-tracker - a personal income and expense ledger
//!
//! The ledger keeps a running balance and an append-only log of
//! transactions, persisted to a JSON store after every accepted change.
//! Expenses that would take the balance below zero are refused.
//!
//! # Architecture
//!
//! - `models`: money, identifiers, and the transaction record
//! - `ledger`: the core ledger (add income/expense, snapshot, category totals)
//! - `storage`: the persistence seam and its JSON-file and in-memory stores
//! - `audit`: append-only JSON-lines log of recorded and rejected entries
//! - `config`: path resolution and user settings
//! - `display`, `reports`, `export`: read-only renderers over a snapshot
//! - `cli`: command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use money_tracker::{Ledger, models::Money, storage::JsonFileStore};
//!
//! let mut ledger = Ledger::load(JsonFileStore::new("ledger.json"))?;
//! ledger.add_income(Money::from_units_cents(1000, 0), "Salary", "Work")?;
//! ledger.add_expense(Money::from_units_cents(200, 0), "Groceries", "Food")?;
//! assert_eq!(ledger.current_balance(), Money::from_units_cents(800, 0));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use ledger::Ledger;
