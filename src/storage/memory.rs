//! In-memory ledger store
//!
//! Holds the serialized JSON in a `RefCell` so the same serialization path
//! as the file store is exercised without touching disk. Writes can be made
//! to fail on demand to drive the ledger's rollback behaviour.

use std::cell::{Cell, RefCell};

use crate::error::{TrackerError, TrackerResult};

use super::{LedgerData, LedgerStore};

/// Ledger store that keeps its JSON blob in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// An empty store, as if nothing had ever been saved
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `contents`, valid or not
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
            ..Self::default()
        }
    }

    /// The raw stored JSON, if anything was saved
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Make subsequent saves fail with `StoreWrite`
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful saves
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> TrackerResult<Option<LedgerData>> {
        match self.contents.borrow().as_deref() {
            None => Ok(None),
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|e| TrackerError::StoreCorrupt(format!("Failed to parse memory store: {}", e))),
        }
    }

    fn save(&self, data: &LedgerData) -> TrackerResult<()> {
        if self.fail_writes.get() {
            return Err(TrackerError::StoreWrite(
                "memory store is rejecting writes".into(),
            ));
        }
        let json = serde_json::to_string(data)
            .map_err(|e| TrackerError::StoreWrite(format!("Failed to serialize data: {}", e)))?;
        *self.contents.borrow_mut() = Some(json);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_store_loads_none() {
        assert!(MemoryStore::new().load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        let data = LedgerData::new(Money::from_cents(500), Vec::new());

        store.save(&data).unwrap();

        assert_eq!(store.write_count(), 1);
        assert_eq!(store.load().unwrap(), Some(data));
    }

    #[test]
    fn test_failing_writes_keep_previous_contents() {
        let store = MemoryStore::new();
        store.save(&LedgerData::default()).unwrap();
        let before = store.contents();

        store.set_fail_writes(true);
        let err = store
            .save(&LedgerData::new(Money::from_cents(1), Vec::new()))
            .unwrap_err();

        assert!(matches!(err, TrackerError::StoreWrite(_)));
        assert_eq!(store.contents(), before);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_malformed_contents_are_corrupt() {
        let store = MemoryStore::with_contents("[1, 2, 3]");
        assert!(store.load().unwrap_err().is_store_corrupt());
    }
}
