//! Comparison data types.

pub mod entry;
pub mod set;

pub use entry::{ComparisonEntry, ListingId, Location};
pub use set::{ComparisonSet, MAX_COMPARE};
