//! Benchmark utilities.

/// Generate deterministic patterned data of the given size.
#[must_use]
pub fn patterned_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}
