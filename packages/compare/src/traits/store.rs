//! Typed persistence of the comparison set.

use crate::error::StoreResult;
use crate::types::ComparisonSet;

/// Durable home of the comparison set.
///
/// The manager writes through on every mutation and reads exactly once, at
/// hydration.
pub trait CompareStore {
    /// Load the persisted set.
    ///
    /// Returns `None` if nothing has been stored yet. Returns
    /// [`StoreError::Corrupt`](crate::StoreError::Corrupt) if a value exists
    /// but is not a valid set.
    fn load(&self) -> StoreResult<Option<ComparisonSet>>;

    /// Persist the full set, replacing what was stored.
    fn save(&self, set: &ComparisonSet) -> StoreResult<()>;

    /// Delete the stored set.
    fn clear(&self) -> StoreResult<()>;
}
