//! Testing utilities.
//!
//! [`FailingStorage`] wraps a [`MemoryStorage`] and can be switched to fail
//! reads or writes, for exercising the manager's storage-failure paths
//! without a real browser or disk.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::stores::MemoryStorage;
use crate::traits::storage::KeyValueStorage;

/// Key-value storage with switchable failures.
///
/// Clones share switches and data. Failed writes report
/// [`StoreError::QuotaExceeded`], the usual browser failure.
#[derive(Clone, Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    write_attempts: Arc<AtomicUsize>,
}

impl FailingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing storage.
    pub fn wrap(inner: MemoryStorage) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of `set`/`remove` calls, failed ones included.
    pub fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }

    /// The underlying storage, bypassing failure switches.
    pub fn inner(&self) -> &MemoryStorage {
        &self.inner
    }

    fn check_write(&self) -> StoreResult<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::QuotaExceeded);
        }
        Ok(())
    }
}

impl KeyValueStorage for FailingStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read("simulated read failure".into()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check_write()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.check_write()?;
        self.inner.remove(key)
    }
}
