//! Store configuration.

/// Default store capacity: 1 MiB.
pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

/// Configuration for opening a log store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Size of the ring in bytes, fixed for the lifetime of the store.
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ring capacity in bytes.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
