//! YAML Export functionality
//!
//! Exports the complete ledger to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use crate::ledger::Ledger;
use crate::storage::LedgerStore;

/// Export the full ledger to YAML format
pub fn export_full_yaml<S: LedgerStore, W: Write>(
    ledger: &Ledger<S>,
    mut writer: W,
) -> TrackerResult<()> {
    let export = FullExport::from_ledger(ledger);

    write!(
        writer,
        "# Money Tracker Full Ledger Export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         #\n\
         # Keep it secure - it contains all your financial data.\n\n",
        export.exported_at, export.app_version
    )
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))
}
