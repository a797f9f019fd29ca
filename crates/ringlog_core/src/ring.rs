//! Circular byte storage and index arithmetic.
//!
//! [`RingStore`] is the single owner of the `(storage, head, available)`
//! triple. It performs no locking of its own: callers must guarantee
//! single-writer-or-multi-reader access, normally through
//! [`AccessGuard`](crate::AccessGuard).

use crate::error::{StoreError, StoreResult};

/// A fixed-capacity circular byte buffer with drop-oldest overwrite.
///
/// The buffer retains a "logical window" of the most recently appended
/// bytes, at most `capacity` of them. `head` is the next write offset and
/// the window ends there, wrapping backward through the storage array.
/// Bytes outside the window are stale and are never exposed.
///
/// # Invariants
///
/// - `0 <= head < capacity`
/// - `0 <= available <= capacity`
/// - `read_at` and `snapshot` only ever return bytes from the window,
///   oldest-first
#[derive(Debug)]
pub struct RingStore {
    storage: Vec<u8>,
    /// Next write offset, advances modulo capacity.
    head: usize,
    /// Number of valid bytes currently held.
    available: usize,
}

impl RingStore {
    /// Creates a zero-filled ring of the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> StoreResult<Self> {
        if capacity == 0 {
            return Err(StoreError::InvalidCapacity { capacity });
        }
        Ok(Self {
            storage: vec![0; capacity],
            head: 0,
            available: 0,
        })
    }

    /// Returns the fixed capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of valid bytes currently held.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available
    }

    /// Returns `true` if the window holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available == 0
    }

    #[cfg(test)]
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    /// Appends bytes, overwriting the oldest data once the ring is full.
    ///
    /// At most `capacity` bytes are written per call; for longer inputs only
    /// the trailing `capacity` bytes are kept (truncation, not an error).
    /// Returns the number of bytes actually written.
    pub fn append(&mut self, data: &[u8]) -> usize {
        let capacity = self.storage.len();
        let n = data.len().min(capacity);
        let src = &data[data.len() - n..];

        // Copy in up to two runs around the array boundary.
        let first = n.min(capacity - self.head);
        self.storage[self.head..self.head + first].copy_from_slice(&src[..first]);
        self.storage[..n - first].copy_from_slice(&src[first..]);

        self.head = (self.head + n) % capacity;
        self.available = (self.available + n).min(capacity);
        n
    }

    /// Reads up to `max_len` bytes starting at `offset` within the window.
    ///
    /// `offset` is measured from the oldest valid byte (0 = start of the
    /// window). An offset at or past `available` yields an empty vec
    /// (end-of-data, not an error). The read is pure: no cursor is consumed
    /// and repeated calls with the same arguments return the same bytes
    /// until a write changes the window.
    #[must_use]
    pub fn read_at(&self, offset: usize, max_len: usize) -> Vec<u8> {
        if offset >= self.available {
            return Vec::new();
        }
        let capacity = self.storage.len();
        let n = max_len.min(self.available - offset);
        let start = (self.head + capacity - self.available + offset) % capacity;

        let first = n.min(capacity - start);
        let mut out = Vec::with_capacity(n);
        out.extend_from_slice(&self.storage[start..start + first]);
        out.extend_from_slice(&self.storage[..n - first]);
        out
    }

    /// Returns the entire window, oldest to newest, as one contiguous vec.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u8> {
        self.read_at(0, self.available)
    }

    /// Resets the window to empty. Storage is retained, not re-zeroed.
    pub fn clear(&mut self) {
        self.head = 0;
        self.available = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let ring = RingStore::new(16).unwrap();
        assert_eq!(ring.capacity(), 16);
        assert_eq!(ring.available(), 0);
        assert!(ring.is_empty());
        assert!(ring.snapshot().is_empty());
    }

    #[test]
    fn zero_capacity_rejected() {
        let result = RingStore::new(0);
        assert!(matches!(
            result,
            Err(StoreError::InvalidCapacity { capacity: 0 })
        ));
    }

    #[test]
    fn append_then_snapshot() {
        let mut ring = RingStore::new(16).unwrap();
        assert_eq!(ring.append(b"hello"), 5);
        assert_eq!(ring.available(), 5);
        assert_eq!(ring.snapshot(), b"hello");
    }

    #[test]
    fn fill_exactly_wraps_head_to_zero() {
        let mut ring = RingStore::new(16).unwrap();
        assert_eq!(ring.append(b"ABCDEFGHIJKLMNOP"), 16);
        assert_eq!(ring.available(), 16);
        assert_eq!(ring.head(), 0);
        assert_eq!(ring.snapshot(), b"ABCDEFGHIJKLMNOP");
    }

    #[test]
    fn overwrite_drops_oldest() {
        let mut ring = RingStore::new(16).unwrap();
        ring.append(b"ABCDEFGHIJKLMNOP");
        ring.append(b"QR");
        assert_eq!(ring.available(), 16);
        assert_eq!(ring.snapshot(), b"CDEFGHIJKLMNOPQR");
        assert_eq!(ring.read_at(0, 4), b"CDEF");
        assert!(ring.read_at(16, 4).is_empty());
    }

    #[test]
    fn oversized_append_keeps_trailing_bytes() {
        let mut ring = RingStore::new(4).unwrap();
        assert_eq!(ring.append(b"ABCDEFGH"), 4);
        assert_eq!(ring.available(), 4);
        assert_eq!(ring.snapshot(), b"EFGH");
    }

    #[test]
    fn oversized_append_onto_nonzero_head() {
        let mut ring = RingStore::new(4).unwrap();
        ring.append(b"XY");
        assert_eq!(ring.append(b"ABCDEFGH"), 4);
        assert_eq!(ring.snapshot(), b"EFGH");
    }

    #[test]
    fn empty_append_is_noop() {
        let mut ring = RingStore::new(8).unwrap();
        ring.append(b"abc");
        assert_eq!(ring.append(b""), 0);
        assert_eq!(ring.available(), 3);
        assert_eq!(ring.snapshot(), b"abc");
    }

    #[test]
    fn read_at_wraps_across_boundary() {
        let mut ring = RingStore::new(8).unwrap();
        ring.append(b"ABCDEF");
        ring.append(b"GHIJ");
        // Window is "CDEFGHIJ", physically split at index 7/0.
        assert_eq!(ring.snapshot(), b"CDEFGHIJ");
        assert_eq!(ring.read_at(4, 4), b"GHIJ");
        assert_eq!(ring.read_at(5, 10), b"HIJ");
    }

    #[test]
    fn read_at_clamps_to_window_end() {
        let mut ring = RingStore::new(16).unwrap();
        ring.append(b"hello");
        assert_eq!(ring.read_at(3, 100), b"lo");
        assert_eq!(ring.read_at(0, 0), b"");
    }

    #[test]
    fn read_past_end_is_empty() {
        let mut ring = RingStore::new(16).unwrap();
        ring.append(b"hello");
        assert!(ring.read_at(5, 1).is_empty());
        assert!(ring.read_at(6, 1).is_empty());
        assert!(ring.read_at(usize::MAX, 1).is_empty());
    }

    #[test]
    fn read_is_pure() {
        let mut ring = RingStore::new(16).unwrap();
        ring.append(b"hello world");
        let a = ring.read_at(6, 5);
        let b = ring.read_at(6, 5);
        assert_eq!(a, b"world");
        assert_eq!(a, b);
    }

    #[test]
    fn snapshot_matches_positional_read_after_wrap() {
        // Both call sites share one start-of-window computation; confirm
        // they agree byte for byte around the boundary.
        let mut ring = RingStore::new(8).unwrap();
        ring.append(b"0123456789AB");
        assert_eq!(ring.snapshot(), ring.read_at(0, ring.available()));
        assert_eq!(ring.snapshot(), b"456789AB");
    }

    #[test]
    fn available_saturates_at_capacity() {
        let mut ring = RingStore::new(8).unwrap();
        for _ in 0..10 {
            ring.append(b"abc");
            assert!(ring.available() <= 8);
        }
        assert_eq!(ring.available(), 8);
    }

    #[test]
    fn clear_resets_window() {
        let mut ring = RingStore::new(8).unwrap();
        ring.append(b"abcdef");
        ring.clear();
        assert!(ring.is_empty());
        assert!(ring.snapshot().is_empty());
        ring.append(b"xy");
        assert_eq!(ring.snapshot(), b"xy");
    }
}
