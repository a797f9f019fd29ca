//! Error types for the log store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when constructing or operating a log store.
///
/// Truncating appends and end-of-data reads are defined outcomes of the
/// store, not errors; they never appear here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested capacity is not a positive byte count.
    #[error("invalid capacity: {capacity} (must be a positive byte count)")]
    InvalidCapacity {
        /// The rejected capacity value.
        capacity: usize,
    },
}
