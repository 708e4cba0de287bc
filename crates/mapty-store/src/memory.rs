//! In-memory slot implementation for development and testing.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. Use `FileSlot` when data has to outlive the process.

use mapty_core::error::Result;
use mapty_core::ports::KeyValueSlot;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory implementation of KeyValueSlot
///
/// Clones share the same underlying map, so a fresh store can reopen a slot
/// another store wrote to.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySlot {
    /// Create a new empty in-memory slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.remove(key);
        Ok(())
    }
}
