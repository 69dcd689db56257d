//! The bounded, ordered comparison set.

use serde::{Deserialize, Serialize};

use crate::error::{CompareError, CompareResult};
use crate::types::entry::{ComparisonEntry, ListingId};

/// Maximum number of listings that can be compared side by side.
pub const MAX_COMPARE: usize = 3;

/// Ordered set of at most [`MAX_COMPARE`] entries with unique ids.
///
/// Insertion order is preserved. Serializes as a bare JSON array; a stored
/// array that breaks either invariant is rejected as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<ComparisonEntry>", try_from = "Vec<ComparisonEntry>")]
pub struct ComparisonSet {
    entries: Vec<ComparisonEntry>,
}

impl ComparisonSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from entries, failing on the first entry that would break
    /// an invariant.
    pub fn from_entries(entries: impl IntoIterator<Item = ComparisonEntry>) -> CompareResult<Self> {
        let mut set = Self::new();
        for entry in entries {
            set.add(entry)?;
        }
        Ok(set)
    }

    /// Append an entry.
    ///
    /// Duplicates are checked before capacity, so re-adding a selected
    /// listing to a full set reports the duplicate. Entries with a
    /// non-finite price are refused up front.
    pub fn add(&mut self, entry: ComparisonEntry) -> CompareResult<()> {
        if !entry.price.is_finite() {
            return Err(CompareError::InvalidPrice { id: entry.id });
        }
        if self.contains(&entry.id) {
            return Err(CompareError::DuplicateEntry { id: entry.id });
        }
        if self.is_full() {
            return Err(CompareError::CapacityExceeded {
                capacity: MAX_COMPARE,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entry with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &ListingId) -> Option<ComparisonEntry> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    pub fn get(&self, id: &ListingId) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonEntry> {
        self.entries.iter()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> Vec<ListingId> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_COMPARE
    }

    /// How many more entries can be added.
    pub fn remaining(&self) -> usize {
        MAX_COMPARE.saturating_sub(self.entries.len())
    }
}

impl From<ComparisonSet> for Vec<ComparisonEntry> {
    fn from(set: ComparisonSet) -> Self {
        set.entries
    }
}

impl TryFrom<Vec<ComparisonEntry>> for ComparisonSet {
    type Error = CompareError;

    fn try_from(entries: Vec<ComparisonEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl<'a> IntoIterator for &'a ComparisonSet {
    type Item = &'a ComparisonEntry;
    type IntoIter = std::slice::Iter<'a, ComparisonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
