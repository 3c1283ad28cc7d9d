//! Core data models for money-tracker
//!
//! Money amounts, transaction identifiers, and the immutable transaction
//! record kept by the ledger.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
