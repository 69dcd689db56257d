//! Property comparison list for the Guri24 front-end.
//!
//! Visitors pick up to three listings and view them side by side. The
//! selection survives reloads: every change is written through to
//! client-side storage and read back once at start-up.
//!
//! # Usage
//!
//! ```rust
//! use guri_compare::{CompareList, ComparisonEntry, JsonStore, MemoryStorage};
//!
//! let mut list = CompareList::hydrate(JsonStore::new(MemoryStorage::new()));
//!
//! list.add(ComparisonEntry::new("42", "3 Bed Apartment", 2_000_000.0, "KSh"))?;
//! assert!(list.contains(&"42".into()));
//! # Ok::<(), guri_compare::CompareError>(())
//! ```
//!
//! # Modules
//!
//! - [`types`] - Entries and the bounded comparison set
//! - [`manager`] - The write-through [`CompareList`] and its change events
//! - [`traits`] - Storage abstractions
//! - [`stores`] - Storage implementations (memory, file, JSON adapter)
//! - [`view`] - Side-by-side table model and display formatting
//! - [`testing`] - Failure-injecting storage for tests

pub mod config;
pub mod error;
pub mod manager;
pub mod stores;
pub mod traits;
pub mod types;
pub mod view;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export core types at crate root
pub use config::{CompareConfig, DEFAULT_STORAGE_KEY};
pub use error::{CompareError, CompareResult, ConfigError, StoreError, StoreResult};
pub use manager::{CompareEvent, CompareList, Toggled};
pub use stores::{FileStorage, JsonStore, MemoryStorage};
pub use traits::{storage::KeyValueStorage, store::CompareStore};
pub use types::{ComparisonEntry, ComparisonSet, ListingId, Location, MAX_COMPARE};
pub use view::{
    format_price, property_type_label, purpose_label, Cell, ComparisonTable, TableColumn,
    TableRow,
};
