//! End-to-end behaviour of the comparison list over real storage backends.

use guri_compare::testing::FailingStorage;
use guri_compare::{
    CompareError, CompareList, CompareStore, ComparisonEntry, ComparisonSet, FileStorage,
    JsonStore, KeyValueStorage, ListingId, Location, MemoryStorage, DEFAULT_STORAGE_KEY,
    MAX_COMPARE,
};
use proptest::prelude::*;
use serde_json::json;

fn entry(id: &str) -> ComparisonEntry {
    ComparisonEntry::new(id, format!("Listing {id}"), 2_000_000.0, "KSh")
}

fn ids<S>(list: &CompareList<S>) -> Vec<&str> {
    list.entries().iter().map(|e| e.id.as_str()).collect()
}

fn stored_set(storage: &MemoryStorage) -> ComparisonSet {
    JsonStore::new(storage.clone())
        .load()
        .expect("stored list should load")
        .unwrap_or_default()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_three_entries_then_fourth_rejected() {
    let storage = MemoryStorage::new();
    let mut list = CompareList::hydrate(JsonStore::new(storage.clone()));

    for id in ["A", "B", "C"] {
        list.add(entry(id)).unwrap();
    }
    let err = list.add(entry("D")).unwrap_err();

    assert_eq!(err, CompareError::CapacityExceeded { capacity: MAX_COMPARE });
    assert_eq!(ids(&list), vec!["A", "B", "C"]);
    assert_eq!(stored_set(&storage), *list.set());
}

#[test]
fn test_add_remove_add_again() {
    let mut list = CompareList::hydrate(JsonStore::new(MemoryStorage::new()));

    list.add(entry("A")).unwrap();
    list.remove(&"A".into());
    list.add(entry("A")).unwrap();

    assert_eq!(ids(&list), vec!["A"]);
}

#[test]
fn test_second_add_is_duplicate_and_changes_nothing() {
    let mut list = CompareList::hydrate(JsonStore::new(MemoryStorage::new()));
    let e = entry("A");

    list.add(e.clone()).unwrap();
    let before = list.set().clone();

    assert_eq!(
        list.add(e).unwrap_err(),
        CompareError::DuplicateEntry { id: "A".into() }
    );
    assert_eq!(*list.set(), before);
}

#[test]
fn test_remove_then_contains() {
    let mut list = CompareList::hydrate(JsonStore::new(MemoryStorage::new()));
    list.add(entry("A")).unwrap();
    list.add(entry("B")).unwrap();

    assert!(list.remove(&"A".into()));
    assert!(!list.contains(&"A".into()));

    // Absent id
    assert!(!list.remove(&"A".into()));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_clear_twice() {
    let storage = MemoryStorage::new();
    let mut list = CompareList::hydrate(JsonStore::new(storage.clone()));
    list.add(entry("A")).unwrap();

    list.clear();
    list.clear();

    assert!(list.is_empty());
    assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn test_storage_write_failure_does_not_block_add() {
    let storage = FailingStorage::new();
    storage.fail_writes(true);
    let mut list = CompareList::hydrate(JsonStore::new(storage.clone()));

    list.add(entry("A")).unwrap();

    assert!(list.contains(&"A".into()));
    assert!(list.storage_error().is_some());
    assert_eq!(storage.write_attempts(), 1);
    assert!(storage.inner().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn test_invalid_json_hydrates_empty() {
    let storage = MemoryStorage::with_value(DEFAULT_STORAGE_KEY, "this is not json");
    let mut list = CompareList::hydrate(JsonStore::new(storage.clone()));

    assert!(list.is_empty());

    // The next write replaces the bad value
    list.add(entry("A")).unwrap();
    assert_eq!(stored_set(&storage).len(), 1);
}

#[test]
fn test_oversized_stored_list_hydrates_empty() {
    let raw = serde_json::to_string(&vec![entry("A"), entry("B"), entry("C"), entry("D")]).unwrap();
    let storage = MemoryStorage::with_value(DEFAULT_STORAGE_KEY, raw);

    let list = CompareList::hydrate(JsonStore::new(storage));
    assert!(list.is_empty());
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_roundtrip_preserves_order_and_fields() {
    let full = ComparisonEntry::new("villa-1", "Villa in Karen", 85_000_000.0, "KSh")
        .with_slug("villa-karen")
        .with_images(["https://example.com/villa.jpg"])
        .with_type("villa")
        .with_purpose("sale")
        .with_location(Location::new("Nairobi", "Kenya").with_area("Karen"))
        .with_rooms(5, 4)
        .with_size("6,000 sq ft")
        .with_features(["Garden", "Pool"]);
    let mut with_extra = entry("stay-9").with_price_unit("per night");
    with_extra
        .extra
        .insert("agent".into(), json!({ "name": "Guri24 Team", "phone": "+254 706 070 747" }));

    let set = ComparisonSet::from_entries([with_extra, full, entry("plain")]).unwrap();

    let raw = serde_json::to_string(&set).unwrap();
    let back: ComparisonSet = serde_json::from_str(&raw).unwrap();

    assert_eq!(back, set);
    assert_eq!(serde_json::to_string(&back).unwrap(), raw);
}

#[test]
fn test_null_and_empty_fields_survive_reload() {
    let raw = r#"[{"id":"a","title":"T","images":[],"price":1.5,"currency":"KSh","features":[],"size":null,"slug":null}]"#;
    let storage = MemoryStorage::with_value(DEFAULT_STORAGE_KEY, raw);

    let mut list = CompareList::hydrate(JsonStore::new(storage.clone()));
    list.add(entry("b")).unwrap();

    let stored: serde_json::Value =
        serde_json::from_str(&storage.get(DEFAULT_STORAGE_KEY).unwrap().unwrap()).unwrap();
    let first = stored[0].as_object().unwrap();
    let mut keys: Vec<_> = first.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["currency", "features", "id", "images", "price", "size", "slug", "title"]
    );
    assert_eq!(first["features"], json!([]));
    assert!(first["slug"].is_null());
}

#[test]
fn test_file_storage_survives_restart() {
    let dir = std::env::temp_dir().join(format!("guri-compare-it-{}", uuid::Uuid::new_v4()));

    {
        let mut list = CompareList::hydrate(JsonStore::new(FileStorage::new(&dir)));
        list.add(entry("A")).unwrap();
        list.add(entry("B")).unwrap();
        list.remove(&"A".into());
        list.add(entry("C")).unwrap();
    }

    let list = CompareList::hydrate(JsonStore::new(FileStorage::new(&dir)));
    assert_eq!(ids(&list), vec!["B", "C"]);
    assert!(list.storage_error().is_none());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_catalog_style_ids_roundtrip() {
    let raw = r#"[{"id":1,"title":"3 Bed Apartment","images":[],"price":2000000,"currency":"KSh"}]"#;
    let storage = MemoryStorage::with_value(DEFAULT_STORAGE_KEY, raw);

    let list = CompareList::hydrate(JsonStore::new(storage));
    assert!(list.contains(&ListingId::from(1u64)));
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(u8),
    Toggle(u8),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..6).prop_map(Op::Add),
        2 => (0u8..6).prop_map(Op::Remove),
        3 => (0u8..6).prop_map(Op::Toggle),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 0..40)) {
        let storage = MemoryStorage::new();
        let mut list = CompareList::hydrate(JsonStore::new(storage.clone()));
        let mut model: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Add(n) => {
                    let id = n.to_string();
                    let result = list.add(entry(&id));
                    if model.contains(&id) {
                        prop_assert_eq!(result, Err(CompareError::DuplicateEntry { id: id.as_str().into() }));
                    } else if model.len() == MAX_COMPARE {
                        prop_assert_eq!(result, Err(CompareError::CapacityExceeded { capacity: MAX_COMPARE }));
                    } else {
                        prop_assert!(result.is_ok());
                        prop_assert!(list.contains(&id.as_str().into()));
                        model.push(id);
                    }
                }
                Op::Remove(n) => {
                    let id = n.to_string();
                    let removed = list.remove(&id.as_str().into());
                    prop_assert_eq!(removed, model.contains(&id));
                    model.retain(|m| m != &id);
                    prop_assert!(!list.contains(&id.as_str().into()));
                }
                Op::Toggle(n) => {
                    let id = n.to_string();
                    let result = list.toggle(entry(&id));
                    if model.contains(&id) {
                        prop_assert!(result.is_ok());
                        model.retain(|m| m != &id);
                    } else if model.len() == MAX_COMPARE {
                        prop_assert!(result.is_err());
                    } else {
                        prop_assert!(result.is_ok());
                        model.push(id);
                    }
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            prop_assert!(list.len() <= MAX_COMPARE);
            prop_assert_eq!(ids(&list), model.iter().map(String::as_str).collect::<Vec<_>>());
            prop_assert_eq!(&stored_set(&storage), list.set());
        }
    }
}
