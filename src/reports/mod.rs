//! Reports derived from the ledger
//!
//! Reports are read-only views computed from a ledger snapshot.

pub mod category;

pub use category::{CategoryReport, CategorySummary};
