//! JSON file ledger store
//!
//! Persists the ledger to a single pretty-printed JSON file (by default
//! `data/ledger.json` under the money-tracker directory).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TrackerResult;

use super::file_io::{read_json_optional, write_json_atomic};
use super::{LedgerData, LedgerStore};

/// Ledger store backed by one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file path; nothing is touched until used
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether anything has been saved yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> TrackerResult<Option<LedgerData>> {
        debug!(path = %self.path.display(), "reading ledger file");
        read_json_optional(&self.path)
    }

    fn save(&self, data: &LedgerData) -> TrackerResult<()> {
        debug!(
            path = %self.path.display(),
            transactions = data.transactions.len(),
            "writing ledger file"
        );
        write_json_atomic(&self.path, data)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
