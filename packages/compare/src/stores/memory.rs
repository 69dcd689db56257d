//! In-memory storage implementation for testing and server-side rendering.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{StoreError, StoreResult};
use crate::traits::storage::KeyValueStorage;

/// In-memory key-value storage.
///
/// Clones share the same map, so a test can keep a handle while a manager
/// owns another. Data is lost when the last handle is dropped.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with one value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut data) = storage.data.write() {
            data.insert(key.into(), value.into());
        }
        storage
    }

    /// Get the number of stored keys.
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Unavailable(format!("lock poisoned: {}", e))
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.remove(key);
        Ok(())
    }
}
