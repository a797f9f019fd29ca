//! # Ringlog Core
//!
//! A fixed-capacity, in-memory byte ring shared by many concurrent producers
//! and consumers.
//!
//! The store retains the most recently appended bytes up to a fixed capacity.
//! When the ring is full, new appends silently displace the oldest retained
//! bytes (drop-oldest). Reads are positional against the current logical
//! window and never consume data.
//!
//! ## Design
//!
//! - [`RingStore`] owns the byte storage and the circular-index arithmetic;
//!   it contains no locking and assumes callers already hold the right guard.
//! - [`AccessGuard`] admits any number of concurrent readers or exactly one
//!   writer, never both, with fair queueing between the two modes.
//! - [`LogStore`] is the operation surface: `write`, `read`, and `dump`, each
//!   acquiring the guard in the required mode around one `RingStore` call.
//!
//! ## Example
//!
//! ```rust
//! use ringlog_core::LogStore;
//!
//! let store = LogStore::with_capacity(16).unwrap();
//! store.write(b"ABCDEFGHIJKLMNOP");
//! store.write(b"QR");
//!
//! // Oldest "AB" displaced; window holds the last 16 bytes.
//! assert_eq!(store.dump(), b"CDEFGHIJKLMNOPQR");
//! assert_eq!(store.read(0, 4), b"CDEF");
//! assert!(store.read(16, 4).is_empty());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod guard;
mod ring;
mod stats;
mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use guard::AccessGuard;
pub use ring::RingStore;
pub use stats::{StatsSnapshot, StoreStats};
pub use store::LogStore;
