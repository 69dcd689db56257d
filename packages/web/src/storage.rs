//! Browser storage for the comparison list.
//!
//! With the `web` feature the list lives in `window.localStorage`. Native
//! builds (tests, desktop previews) use files under `COMPARE_STORE_DIR` when
//! it is set and process memory otherwise.

use guri_compare::{CompareConfig, JsonStore};

#[cfg(feature = "web")]
pub use local::LocalStorage;

#[cfg(feature = "web")]
pub type BrowserStorage = LocalStorage;

#[cfg(not(feature = "web"))]
pub type BrowserStorage = Box<dyn guri_compare::KeyValueStorage>;

/// The store the compare context hydrates from.
pub type BrowserStore = JsonStore<BrowserStorage>;

#[cfg(feature = "web")]
pub fn browser_storage(_config: &CompareConfig) -> BrowserStorage {
    LocalStorage::new()
}

#[cfg(not(feature = "web"))]
pub fn browser_storage(config: &CompareConfig) -> BrowserStorage {
    match &config.store_dir {
        Some(dir) => Box::new(guri_compare::FileStorage::new(dir)),
        None => Box::new(guri_compare::MemoryStorage::new()),
    }
}

/// Build the store for the configured storage key.
pub fn browser_store(config: &CompareConfig) -> BrowserStore {
    JsonStore::with_key(browser_storage(config), config.storage_key.clone())
}

#[cfg(feature = "web")]
mod local {
    use guri_compare::{KeyValueStorage, StoreError, StoreResult};

    /// `window.localStorage`.
    ///
    /// Private browsing modes may disable storage entirely; that surfaces as
    /// [`StoreError::Unavailable`] on each call rather than at construction.
    #[derive(Clone, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        pub fn new() -> Self {
            Self
        }

        fn storage(&self) -> StoreResult<web_sys::Storage> {
            let window = web_sys::window()
                .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
            window
                .local_storage()
                .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
                .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
        }
    }

    impl KeyValueStorage for LocalStorage {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.storage()?
                .get_item(key)
                .map_err(|e| StoreError::Read(format!("{:?}", e).into()))
        }

        // setItem only throws when the origin's quota is used up
        fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            self.storage()?
                .set_item(key, value)
                .map_err(|_| StoreError::QuotaExceeded)
        }

        fn remove(&self, key: &str) -> StoreResult<()> {
            self.storage()?
                .remove_item(key)
                .map_err(|e| StoreError::Write(format!("{:?}", e).into()))
        }
    }
}
