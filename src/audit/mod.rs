//! Audit logging for money-tracker
//!
//! Every recorded transaction and every rejected expense is appended to a
//! line-delimited JSON log (JSONL) next to the ledger data. The log is a
//! history of requests, not a source of truth: the ledger store alone is
//! authoritative.
//!
//! # Example
//!
//! ```rust,ignore
//! use money_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::recorded(&txn))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
