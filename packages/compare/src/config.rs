//! Configuration for the comparison list.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

use crate::error::ConfigError;
use crate::stores::{FileStorage, JsonStore};

/// Storage key the front-end has always used for the comparison list.
pub const DEFAULT_STORAGE_KEY: &str = "guri_compare_list";

/// Default buffer size of the change-event channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Settings for a [`CompareList`](crate::CompareList) and its store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Key the set is stored under.
    pub storage_key: String,

    /// Directory for [`FileStorage`](crate::FileStorage). `None` means the
    /// caller picks a backend that does not need one.
    pub store_dir: Option<PathBuf>,

    /// How many change events a slow subscriber may fall behind by before
    /// it starts missing them.
    pub event_capacity: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            store_dir: None,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl CompareConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults:
    /// - `COMPARE_STORAGE_KEY`
    /// - `COMPARE_STORE_DIR`
    /// - `COMPARE_EVENT_CAPACITY`
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();

        let mut config = Self::default();

        if let Ok(key) = env::var("COMPARE_STORAGE_KEY") {
            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::InvalidVar {
                    var: "COMPARE_STORAGE_KEY",
                    reason: "must not be empty".into(),
                });
            }
            config.storage_key = key.to_string();
        }

        if let Ok(dir) = env::var("COMPARE_STORE_DIR") {
            config.store_dir = Some(PathBuf::from(dir));
        }

        if let Ok(raw) = env::var("COMPARE_EVENT_CAPACITY") {
            let capacity: usize = raw.trim().parse().map_err(|e| ConfigError::InvalidVar {
                var: "COMPARE_EVENT_CAPACITY",
                reason: format!("{}", e),
            })?;
            if capacity == 0 {
                return Err(ConfigError::InvalidVar {
                    var: "COMPARE_EVENT_CAPACITY",
                    reason: "must be greater than zero".into(),
                });
            }
            config.event_capacity = capacity;
        }

        Ok(config)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = Some(dir.into());
        self
    }

    /// Set the event channel capacity (clamped to at least 1).
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// File-backed store under `store_dir`, if one is configured.
    pub fn file_store(&self) -> Option<JsonStore<FileStorage>> {
        let dir = self.store_dir.as_ref()?;
        Some(JsonStore::with_key(FileStorage::new(dir), self.storage_key.clone()))
    }
}
