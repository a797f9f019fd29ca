//! Reader-writer admission around the ring.

use crate::ring::RingStore;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A reader-writer guard owning the [`RingStore`] it protects.
///
/// Any number of holders may acquire shared access simultaneously; exclusive
/// access is granted only when no other holder remains. The two modes never
/// mix. Fairness between them comes from `parking_lot`'s task-fair queueing:
/// a continuous stream of readers cannot starve a pending writer, and a
/// writer releasing the lock hands over to the readers queued behind it.
///
/// Acquisition blocks until granted; there is no timeout or cancellation.
/// The guard is not re-entrant: a holder must not re-acquire in either mode.
///
/// Release is by RAII: dropping the returned guard releases the mode it was
/// acquired in. Guard and ring are created together and dropped together.
#[derive(Debug)]
pub struct AccessGuard {
    ring: RwLock<RingStore>,
}

impl AccessGuard {
    /// Wraps a ring in a fresh guard.
    #[must_use]
    pub fn new(ring: RingStore) -> Self {
        Self {
            ring: RwLock::new(ring),
        }
    }

    /// Acquires shared (read) access, blocking while a writer holds or is
    /// queued ahead.
    pub fn acquire_shared(&self) -> RwLockReadGuard<'_, RingStore> {
        self.ring.read()
    }

    /// Acquires exclusive (write) access, blocking until all current holders
    /// release.
    pub fn acquire_exclusive(&self) -> RwLockWriteGuard<'_, RingStore> {
        self.ring.write()
    }
}
