//! JSON encoding of the comparison set over any key-value storage.

use tracing::debug;

use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::{StoreError, StoreResult};
use crate::traits::{storage::KeyValueStorage, store::CompareStore};
use crate::types::ComparisonSet;

/// Stores the set as a JSON array under a single key.
pub struct JsonStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> JsonStore<S> {
    /// Use the default key (`guri_compare_list`).
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> CompareStore for JsonStore<S> {
    fn load(&self) -> StoreResult<Option<ComparisonSet>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };

        let set: ComparisonSet =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        debug!(key = %self.key, entries = set.len(), "loaded comparison list");
        Ok(Some(set))
    }

    fn save(&self, set: &ComparisonSet) -> StoreResult<()> {
        let raw = serde_json::to_string(set).map_err(|e| StoreError::Write(Box::new(e)))?;
        self.storage.set(&self.key, &raw)
    }

    fn clear(&self) -> StoreResult<()> {
        self.storage.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryStorage;
    use crate::types::ComparisonEntry;

    #[test]
    fn test_load_missing_is_none() {
        let store = JsonStore::new(MemoryStorage::new());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let store = JsonStore::new(storage.clone());

        let set = ComparisonSet::from_entries([
            ComparisonEntry::new("1", "Apartment", 2_000_000.0, "KSh"),
            ComparisonEntry::new("2", "Maisonette", 3_500_000.0, "KSh"),
        ])
        .unwrap();
        store.save(&set).unwrap();

        assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().unwrap().starts_with('['));
        assert_eq!(store.load().unwrap(), Some(set));
    }

    #[test]
    fn test_invalid_json_is_corrupt() {
        let store = JsonStore::new(MemoryStorage::with_value(DEFAULT_STORAGE_KEY, "{not json"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn test_clear_removes_key() {
        let storage = MemoryStorage::new();
        let store = JsonStore::with_key(storage.clone(), "custom_key");

        store.save(&ComparisonSet::new()).unwrap();
        assert_eq!(storage.len(), 1);

        store.clear().unwrap();
        assert!(storage.is_empty());
    }
}
