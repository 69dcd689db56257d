//! Typed errors for the comparison library.
//!
//! Two families, handled differently:
//! - [`CompareError`] is user-correctable and returned synchronously from a
//!   rejected mutation. The set is unchanged.
//! - [`StoreError`] comes from durable storage. It never undoes an in-memory
//!   mutation; the manager logs it and keeps it for the UI to surface.

use thiserror::Error;

use crate::types::ListingId;

/// A mutation of the comparison list was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The list already holds the maximum number of entries.
    #[error("you can compare up to {capacity} properties")]
    CapacityExceeded { capacity: usize },

    /// An entry with the same identifier is already selected.
    #[error("property {id} is already in the compare list")]
    DuplicateEntry { id: ListingId },

    /// The entry's price is NaN or infinite and could not be stored.
    #[error("property {id} has no valid price")]
    InvalidPrice { id: ListingId },
}

/// Errors from the key-value storage behind the comparison list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend is disabled or could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Backend refused the write because it is full.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// The durable write failed.
    #[error("failed to write comparison list: {0}")]
    Write(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The stored value could not be read.
    #[error("failed to read comparison list: {0}")]
    Read(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The stored value was read but is not a valid comparison list.
    #[error("stored comparison list is corrupt: {0}")]
    Corrupt(String),
}

impl StoreError {
    /// Whether this error came from hydration rather than a write.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, StoreError::Read(_) | StoreError::Corrupt(_))
    }
}

/// Errors while building configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set to something unusable.
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

/// Result type alias for comparison list mutations.
pub type CompareResult<T> = std::result::Result<T, CompareError>;

/// Result type alias for storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
