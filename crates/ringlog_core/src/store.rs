//! The externally visible store surface.

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::guard::AccessGuard;
use crate::ring::RingStore;
use crate::stats::{StatsSnapshot, StoreStats};
use tracing::{debug, trace};

/// A shared, fixed-capacity log store.
///
/// One instance per store, shared by all callers (wrap in an
/// [`Arc`](std::sync::Arc) to hand it to threads). Each operation acquires
/// [`AccessGuard`] in the required mode, performs one bounded memory-copy
/// operation on the ring, and releases the guard before returning. Nothing
/// unbounded or I/O-blocking runs while the guard is held.
///
/// Callers supply their own read positions per call; the store keeps no
/// per-reader cursor. Offsets are relative to the current oldest valid byte,
/// so they shift meaning when a write displaces old data.
///
/// # Example
///
/// ```rust
/// use ringlog_core::{LogStore, StoreConfig};
///
/// let store = LogStore::open(StoreConfig::new().capacity(64)).unwrap();
/// assert_eq!(store.write(b"hello"), 5);
/// assert_eq!(store.read(0, 5), b"hello");
/// assert_eq!(store.dump(), b"hello");
/// ```
#[derive(Debug)]
pub struct LogStore {
    guard: AccessGuard,
    stats: StoreStats,
}

impl LogStore {
    /// Opens a store with the given configuration.
    ///
    /// Ring and guard are created together; they live until the store is
    /// dropped, which releases the storage with them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCapacity`](crate::StoreError::InvalidCapacity)
    /// if the configured capacity is zero.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let ring = RingStore::new(config.capacity)?;
        debug!(capacity = config.capacity, "log store opened");
        Ok(Self {
            guard: AccessGuard::new(ring),
            stats: StoreStats::new(),
        })
    }

    /// Opens a store with an explicit capacity in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCapacity`](crate::StoreError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> StoreResult<Self> {
        Self::open(StoreConfig::new().capacity(capacity))
    }

    /// Appends bytes under exclusive access and returns the count written.
    ///
    /// Never blocks on a full ring: once full, the oldest bytes are
    /// displaced. Inputs longer than the capacity keep only their trailing
    /// `capacity` bytes.
    pub fn write(&self, data: &[u8]) -> usize {
        let written = {
            let mut ring = self.guard.acquire_exclusive();
            ring.append(data)
        };
        let truncated = data.len() - written;
        if truncated > 0 {
            trace!(len = data.len(), written, "append truncated to capacity");
        }
        self.stats.record_write(written as u64, truncated as u64);
        written
    }

    /// Reads up to `max_len` bytes at `offset` under shared access.
    ///
    /// An empty vec means end-of-data at that offset, not an error.
    #[must_use]
    pub fn read(&self, offset: usize, max_len: usize) -> Vec<u8> {
        let bytes = {
            let ring = self.guard.acquire_shared();
            ring.read_at(offset, max_len)
        };
        self.stats.record_read(bytes.len() as u64);
        bytes
    }

    /// Returns the entire current window, oldest to newest, under shared
    /// access.
    ///
    /// Safe to call at any time; intended for diagnostics and monitoring.
    #[must_use]
    pub fn dump(&self) -> Vec<u8> {
        let bytes = {
            let ring = self.guard.acquire_shared();
            ring.snapshot()
        };
        self.stats.record_dump(bytes.len() as u64);
        bytes
    }

    /// Discards the current window under exclusive access.
    pub fn clear(&self) {
        self.guard.acquire_exclusive().clear();
    }

    /// Returns the number of valid bytes currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guard.acquire_shared().available()
    }

    /// Returns `true` if the store holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard.acquire_shared().is_empty()
    }

    /// Returns the fixed capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.guard.acquire_shared().capacity()
    }

    /// Takes a point-in-time copy of the operation counters.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
