//! The comparison list manager.
//!
//! [`CompareList`] owns the in-memory [`ComparisonSet`] and its store. Every
//! successful mutation is written through to the store immediately; the store
//! is read once, at hydration.
//!
//! # Failure handling
//!
//! - Capacity and duplicate rejections come back as [`CompareError`] and
//!   leave the set untouched.
//! - A failed write keeps the mutation in memory, logs a warning, emits
//!   [`CompareEvent::PersistenceFailed`] and is kept in
//!   [`CompareList::storage_error`] until the next successful write.
//! - A failed or corrupt read at hydration falls back to an empty set.
//!
//! # Change events
//!
//! Consumers that only need to know *that* the list changed (a badge, a
//! counter) subscribe to a broadcast channel instead of holding the list.
//! Delivery is at-most-once; slow receivers may lag.

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::config::CompareConfig;
use crate::error::{CompareResult, StoreError};
use crate::traits::store::CompareStore;
use crate::types::{ComparisonEntry, ComparisonSet, ListingId};

/// Something happened to the comparison list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareEvent {
    Added { id: ListingId },
    Removed { id: ListingId },
    Cleared,
    /// The in-memory list changed but could not be stored.
    PersistenceFailed { reason: String },
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Bounded, write-through comparison list.
pub struct CompareList<S> {
    set: ComparisonSet,
    store: S,
    events: broadcast::Sender<CompareEvent>,
    storage_error: Option<StoreError>,
}

impl<S: CompareStore> CompareList<S> {
    /// Load the persisted list with default settings.
    pub fn hydrate(store: S) -> Self {
        Self::hydrate_with(store, &CompareConfig::default())
    }

    /// Load the persisted list.
    ///
    /// Never fails: missing data gives an empty list, unreadable or corrupt
    /// data is logged and also gives an empty list.
    pub fn hydrate_with(store: S, config: &CompareConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));

        let (set, storage_error) = match store.load() {
            Ok(Some(set)) => {
                debug!(entries = set.len(), "hydrated comparison list");
                (set, None)
            }
            Ok(None) => (ComparisonSet::new(), None),
            Err(e) => {
                warn!(error = %e, "could not restore comparison list, starting empty");
                (ComparisonSet::new(), Some(e))
            }
        };

        Self {
            set,
            store,
            events,
            storage_error,
        }
    }

    /// Add a listing.
    ///
    /// Fails with `InvalidPrice` for a NaN or infinite price,
    /// `DuplicateEntry` if the id is already selected, or `CapacityExceeded`
    /// if the list is full. The list is unchanged on failure.
    pub fn add(&mut self, entry: ComparisonEntry) -> CompareResult<()> {
        let id = entry.id.clone();
        if let Err(e) = self.set.add(entry) {
            debug!(%id, error = %e, "rejected compare add");
            return Err(e);
        }

        debug!(%id, size = self.set.len(), "added to compare list");
        self.emit(CompareEvent::Added { id });
        self.persist();
        Ok(())
    }

    /// Remove a listing. Returns `false` (and writes nothing) if it was not
    /// in the list.
    pub fn remove(&mut self, id: &ListingId) -> bool {
        if self.set.remove(id).is_none() {
            return false;
        }

        debug!(%id, size = self.set.len(), "removed from compare list");
        self.emit(CompareEvent::Removed { id: id.clone() });
        self.persist();
        true
    }

    /// Empty the list and delete the stored copy.
    pub fn clear(&mut self) {
        let had_entries = !self.set.is_empty();
        self.set.clear();

        if had_entries {
            debug!("cleared compare list");
            self.emit(CompareEvent::Cleared);
        }

        match self.store.clear() {
            Ok(()) => self.storage_error = None,
            Err(e) => self.record_storage_failure(e),
        }
    }

    /// Remove the listing if selected, otherwise add it under the same rules
    /// as [`add`](Self::add).
    pub fn toggle(&mut self, entry: ComparisonEntry) -> CompareResult<Toggled> {
        if self.remove(&entry.id) {
            return Ok(Toggled::Removed);
        }
        self.add(entry)?;
        Ok(Toggled::Added)
    }

    fn persist(&mut self) {
        match self.store.save(&self.set) {
            Ok(()) => self.storage_error = None,
            Err(e) => self.record_storage_failure(e),
        }
    }

    fn record_storage_failure(&mut self, error: StoreError) {
        warn!(
            error = %error,
            size = self.set.len(),
            "compare list changed but could not be saved; it may not survive a reload"
        );
        self.emit(CompareEvent::PersistenceFailed {
            reason: error.to_string(),
        });
        self.storage_error = Some(error);
    }
}

impl<S> CompareList<S> {
    pub fn contains(&self, id: &ListingId) -> bool {
        self.set.contains(id)
    }

    /// Selected entries in the order they were added.
    pub fn entries(&self) -> &[ComparisonEntry] {
        self.set.entries()
    }

    pub fn set(&self) -> &ComparisonSet {
        &self.set
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.set.is_full()
    }

    pub fn remaining(&self) -> usize {
        self.set.remaining()
    }

    /// Last storage failure, cleared by the next successful write.
    pub fn storage_error(&self) -> Option<&StoreError> {
        self.storage_error.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Subscribe to change events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CompareEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: CompareEvent) {
        // Ignore send errors (no active receivers)
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_STORAGE_KEY;
    use crate::error::CompareError;
    use crate::stores::{JsonStore, MemoryStorage};
    use crate::testing::FailingStorage;
    use crate::traits::storage::KeyValueStorage;

    fn entry(id: &str) -> ComparisonEntry {
        ComparisonEntry::new(id, format!("Listing {id}"), 1_500_000.0, "KSh")
    }

    fn memory_list() -> (CompareList<JsonStore<MemoryStorage>>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let list = CompareList::hydrate(JsonStore::new(storage.clone()));
        (list, storage)
    }

    fn stored_ids(storage: &MemoryStorage) -> Vec<String> {
        let raw = storage.get(DEFAULT_STORAGE_KEY).unwrap().unwrap_or_default();
        let set: ComparisonSet = serde_json::from_str(&raw).unwrap();
        set.ids().into_iter().map(|id| id.to_string()).collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    #[test]
    fn test_add_writes_through() {
        let (mut list, storage) = memory_list();

        list.add(entry("a")).unwrap();
        assert!(list.contains(&"a".into()));
        assert_eq!(stored_ids(&storage), vec!["a"]);

        list.add(entry("b")).unwrap();
        assert_eq!(stored_ids(&storage), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_add_leaves_list_unchanged() {
        let (mut list, storage) = memory_list();
        list.add(entry("a")).unwrap();

        let err = list.add(entry("a")).unwrap_err();
        assert_eq!(err, CompareError::DuplicateEntry { id: "a".into() });
        assert_eq!(list.len(), 1);
        assert_eq!(stored_ids(&storage), vec!["a"]);
    }

    #[test]
    fn test_invalid_price_leaves_stored_list_loadable() {
        let (mut list, storage) = memory_list();
        list.add(entry("a")).unwrap();

        let err = list
            .add(ComparisonEntry::new("b", "Broken", f64::NAN, "KSh"))
            .unwrap_err();
        assert_eq!(err, CompareError::InvalidPrice { id: "b".into() });
        assert!(list.storage_error().is_none());

        let reloaded = CompareList::hydrate(JsonStore::new(storage.clone()));
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.storage_error().is_none());
        assert_eq!(stored_ids(&storage), vec!["a"]);
    }

    #[test]
    fn test_capacity_blocks_fourth_add() {
        let (mut list, _) = memory_list();
        for id in ["a", "b", "c"] {
            list.add(entry(id)).unwrap();
        }

        assert!(matches!(
            list.add(entry("d")),
            Err(CompareError::CapacityExceeded { capacity: 3 })
        ));
        let ids: Vec<_> = list.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        // Removing one frees a slot
        assert!(list.remove(&"b".into()));
        list.add(entry("d")).unwrap();
        let ids: Vec<_> = list.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (mut list, storage) = memory_list();
        list.add(entry("a")).unwrap();
        let mut events = list.subscribe();

        assert!(!list.remove(&"zzz".into()));
        assert_eq!(list.len(), 1);
        assert_eq!(stored_ids(&storage), vec!["a"]);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_clear_deletes_stored_key_and_is_idempotent() {
        let (mut list, storage) = memory_list();
        list.add(entry("a")).unwrap();

        list.clear();
        assert!(list.is_empty());
        assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());

        list.clear();
        assert!(list.is_empty());
        assert!(list.storage_error().is_none());
    }

    #[test]
    fn test_toggle() {
        let (mut list, _) = memory_list();

        assert_eq!(list.toggle(entry("a")).unwrap(), Toggled::Added);
        assert!(list.contains(&"a".into()));

        assert_eq!(list.toggle(entry("a")).unwrap(), Toggled::Removed);
        assert!(!list.contains(&"a".into()));
    }

    #[test]
    fn test_toggle_into_full_list_reports_capacity() {
        let (mut list, _) = memory_list();
        for id in ["a", "b", "c"] {
            list.toggle(entry(id)).unwrap();
        }

        let err = list.toggle(entry("d")).unwrap_err();
        assert_eq!(err, CompareError::CapacityExceeded { capacity: 3 });
        assert_eq!(list.len(), 3);
    }

    // =========================================================================
    // Events
    // =========================================================================

    #[test]
    fn test_events_follow_mutations() {
        let (mut list, _) = memory_list();
        let mut events = list.subscribe();

        list.add(entry("a")).unwrap();
        let _ = list.add(entry("a"));
        list.remove(&"a".into());
        list.add(entry("b")).unwrap();
        list.clear();

        assert_eq!(events.try_recv().unwrap(), CompareEvent::Added { id: "a".into() });
        assert_eq!(events.try_recv().unwrap(), CompareEvent::Removed { id: "a".into() });
        assert_eq!(events.try_recv().unwrap(), CompareEvent::Added { id: "b".into() });
        assert_eq!(events.try_recv().unwrap(), CompareEvent::Cleared);
        assert!(events.try_recv().is_err());
    }

    // =========================================================================
    // Storage failures
    // =========================================================================

    #[test]
    fn test_write_failure_keeps_mutation() {
        let storage = FailingStorage::new();
        storage.fail_writes(true);
        let mut list = CompareList::hydrate(JsonStore::new(storage.clone()));
        let mut events = list.subscribe();

        list.add(entry("a")).unwrap();

        assert!(list.contains(&"a".into()));
        assert!(matches!(list.storage_error(), Some(StoreError::QuotaExceeded)));
        // The change is announced before the failure that refers to it
        assert_eq!(events.try_recv().unwrap(), CompareEvent::Added { id: "a".into() });
        assert!(matches!(
            events.try_recv().unwrap(),
            CompareEvent::PersistenceFailed { .. }
        ));

        list.remove(&"a".into());
        assert_eq!(events.try_recv().unwrap(), CompareEvent::Removed { id: "a".into() });
        assert!(matches!(
            events.try_recv().unwrap(),
            CompareEvent::PersistenceFailed { .. }
        ));

        // Next successful write clears the error
        storage.fail_writes(false);
        list.add(entry("b")).unwrap();
        assert!(list.storage_error().is_none());
        assert!(storage.inner().get(DEFAULT_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_corrupt_storage_hydrates_empty() {
        let storage = MemoryStorage::with_value(DEFAULT_STORAGE_KEY, "[{\"id\": ");
        let list = CompareList::hydrate(JsonStore::new(storage));

        assert!(list.is_empty());
        assert!(matches!(list.storage_error(), Some(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_read_failure_hydrates_empty() {
        let storage = FailingStorage::new();
        storage.fail_reads(true);
        let list = CompareList::hydrate(JsonStore::new(storage));

        assert!(list.is_empty());
        assert!(list.storage_error().unwrap().is_read_failure());
    }

    #[test]
    fn test_hydrate_restores_order() {
        let storage = MemoryStorage::new();
        {
            let mut list = CompareList::hydrate(JsonStore::new(storage.clone()));
            for id in ["c", "a", "b"] {
                list.add(entry(id)).unwrap();
            }
        }

        let list = CompareList::hydrate(JsonStore::new(storage));
        let ids: Vec<_> = list.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
