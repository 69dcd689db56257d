//! Raw key-value storage.

use crate::error::StoreResult;

/// Synchronous string storage keyed by name.
///
/// Backends store strings only; encoding is the caller's job. Calls happen
/// on the UI thread in response to user events, so nothing here blocks on
/// the network.
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` if nothing is stored.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
