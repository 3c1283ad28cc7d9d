//! Audit log viewing

use crate::audit::AuditLogger;
use crate::display::DisplayOptions;
use crate::error::TrackerResult;

/// Print the most recent audit entries, oldest first
pub fn handle_audit(logger: &AuditLogger, opts: &DisplayOptions, limit: usize) -> TrackerResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable(&opts.currency_symbol));
    }

    let total = logger.entry_count()?;
    if total > entries.len() {
        println!();
        println!("Showing {} of {} entries.", entries.len(), total);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditEntry;
    use crate::models::{Money, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_handle_audit_with_missing_log() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        handle_audit(&logger, &DisplayOptions::default(), 10).unwrap();
    }

    #[test]
    fn test_handle_audit_with_entries() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let entry = AuditEntry::rejected(
            TransactionKind::Expense,
            Money::from_cents(500),
            "Lunch",
            "Food",
            "Insufficient funds",
        );
        logger.log(&entry).unwrap();
        logger.log(&entry).unwrap();

        handle_audit(&logger, &DisplayOptions::default(), 1).unwrap();
        assert_eq!(logger.entry_count().unwrap(), 2);
    }
}
