//! In-memory key-value backend for tests and persistence-free embedding.

use std::collections::HashMap;

use serde_json::Value;

use super::{KeyValueStore, StoreResult};

/// A [`KeyValueStore`] holding values in a process-local map. Contents are
/// lost on drop; persistent backends come from the host environment.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
