//! Persisted engine state.
//!
//! The engine keeps its state in named slots scoped to the open document.
//! A [`StateStore`] persists raw JSON per slot; [`Slot`] adds typed access.
//!
//! # Invariants
//!
//! 1. Slots are independent. There is no multi-slot atomicity: a crash
//!    between two writes can leave, say, the edit cache newer than the
//!    selection. Restore copes with that.
//! 2. Reads never fail. A missing or undecodable slot yields the type's
//!    default and a `warn!` log.
//! 3. Write failures are returned to the caller, which logs and carries on.
//!
//! Two backends are provided: [`MemoryStateStore`] for tests and ephemeral
//! sessions, and [`FileStateStore`], one JSON file per slot with
//! write-then-rename.

mod file;
mod memory;
pub mod slots;

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::StateError;

pub use file::FileStateStore;
pub use memory::MemoryStateStore;

/// Result type for state store operations.
pub type StateResult<T> = Result<T, StateError>;

/// Key/value persistence for engine slots.
pub trait StateStore {
    /// Human-readable backend name for logging.
    fn name(&self) -> &str;

    /// Reads a slot. `Ok(None)` means it was never written.
    fn load(&self, slot: &str) -> StateResult<Option<serde_json::Value>>;

    /// Replaces a slot's content.
    fn save(&mut self, slot: &str, value: serde_json::Value) -> StateResult<()>;

    /// Removes every slot.
    fn clear(&mut self) -> StateResult<()>;
}

/// A typed handle on a named slot.
pub struct Slot<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Slot<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<T> {}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.name).finish()
    }
}

impl<T: DeserializeOwned + Default> Slot<T> {
    /// Reads the slot, falling back to `T::default()` on any problem.
    pub fn get(&self, store: &dyn StateStore) -> T {
        let raw = match store.load(self.name) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                warn!(slot = self.name, backend = store.name(), error = %err, "failed to read state slot");
                return T::default();
            }
        };
        match serde_json::from_value(raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(slot = self.name, error = %err, "corrupt state slot, using default");
                T::default()
            }
        }
    }
}

impl<T> Slot<T> {
    /// Writes the slot.
    pub fn set<V>(&self, store: &mut dyn StateStore, value: &V) -> StateResult<()>
    where
        V: Serialize + ?Sized,
        T: Borrow<V>,
    {
        let raw = serde_json::to_value(value).map_err(|source| StateError::Serialization {
            slot: self.name.to_string(),
            source,
        })?;
        store.save(self.name, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COUNT: Slot<u32> = Slot::new("count");
    const NAMES: Slot<Vec<String>> = Slot::new("names");

    #[test]
    fn test_missing_slot_defaults() {
        let store = MemoryStateStore::new();
        assert_eq!(COUNT.get(&store), 0);
        assert!(NAMES.get(&store).is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStateStore::new();
        COUNT.set(&mut store, &7u32).unwrap();
        NAMES.set(&mut store, &["a".to_string()][..]).unwrap();
        assert_eq!(COUNT.get(&store), 7);
        assert_eq!(NAMES.get(&store), vec!["a".to_string()]);
    }

    #[test]
    fn test_corrupt_slot_defaults() {
        let mut store = MemoryStateStore::new();
        store.save("count", json!("not a number")).unwrap();
        assert_eq!(COUNT.get(&store), 0);
    }

    #[test]
    fn test_slot_debug() {
        assert_eq!(format!("{:?}", COUNT), "Slot(\"count\")");
    }
}
