//! Operation counters for monitoring.
//!
//! Counters are atomics updated outside the ring's guard, so reading them
//! never contends with store operations.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic operation counters for one store.
///
/// All counters only increase; they are not reset by
/// [`LogStore::clear`](crate::LogStore::clear).
#[derive(Debug, Default)]
pub struct StoreStats {
    /// Total number of write calls.
    writes: AtomicU64,
    /// Total number of positional read calls.
    reads: AtomicU64,
    /// Total number of full-window dumps.
    dumps: AtomicU64,
    /// Total bytes accepted into the ring.
    bytes_written: AtomicU64,
    /// Total bytes returned by reads and dumps.
    bytes_read: AtomicU64,
    /// Total bytes dropped from oversized appends.
    bytes_truncated: AtomicU64,
}

impl StoreStats {
    /// Creates a zeroed stats instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_write(&self, written: u64, truncated: u64) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(written, Ordering::Relaxed);
        if truncated > 0 {
            self.bytes_truncated.fetch_add(truncated, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_read(&self, returned: u64) {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.bytes_read.fetch_add(returned, Ordering::Relaxed);
    }

    pub(crate) fn record_dump(&self, returned: u64) {
        self.dumps.fetch_add(1, Ordering::Relaxed);
        self.bytes_read.fetch_add(returned, Ordering::Relaxed);
    }

    /// Takes a point-in-time copy of all counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            writes: self.writes.load(Ordering::Relaxed),
            reads: self.reads.load(Ordering::Relaxed),
            dumps: self.dumps.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            bytes_read: self.bytes_read.load(Ordering::Relaxed),
            bytes_truncated: self.bytes_truncated.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of [`StoreStats`] counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Total number of write calls.
    pub writes: u64,
    /// Total number of positional read calls.
    pub reads: u64,
    /// Total number of full-window dumps.
    pub dumps: u64,
    /// Total bytes accepted into the ring.
    pub bytes_written: u64,
    /// Total bytes returned by reads and dumps.
    pub bytes_read: u64,
    /// Total bytes dropped from oversized appends.
    pub bytes_truncated: u64,
}
