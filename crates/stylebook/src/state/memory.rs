use std::collections::HashMap;

use super::{StateResult, StateStore};

/// In-memory slots. State is lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    slots: HashMap<String, serde_json::Value>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots written so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl StateStore for MemoryStateStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self, slot: &str) -> StateResult<Option<serde_json::Value>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn save(&mut self, slot: &str, value: serde_json::Value) -> StateResult<()> {
        self.slots.insert(slot.to_string(), value);
        Ok(())
    }

    fn clear(&mut self) -> StateResult<()> {
        self.slots.clear();
        Ok(())
    }
}
