//! Memory address and address range types.
//!
//! This module defines strong types for the physical addresses that appear in
//! commit-log memory-write records. It provides the following:
//! 1. **Type Safety:** Keeps raw trace payloads distinct from parsed addresses.
//! 2. **Region Filtering:** A half-open range type for selecting the result buffer.

use serde::Deserialize;

/// A physical memory address as committed by the reference simulator.
///
/// Addresses are carried through the pipeline untranslated; the extractor only
/// compares them against the configured result-buffer region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct MemAddr(pub u64);

impl MemAddr {
    /// Creates a new memory address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 64-bit address value.
    ///
    /// # Returns
    ///
    /// A new `MemAddr` instance wrapping the provided address.
    #[inline]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline]
    pub const fn val(self) -> u64 {
        self.0
    }
}

/// A half-open address range `[base, base + size)`.
///
/// Used to restrict the expected-data set to the test's result buffer; writes
/// outside the range are dropped without affecting the order of those kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct AddrRange {
    /// First address inside the range.
    pub base: MemAddr,
    /// Length of the range in bytes.
    pub size: u64,
}

impl AddrRange {
    /// Creates a range covering `size` bytes starting at `base`.
    ///
    /// # Arguments
    ///
    /// * `base` - First address inside the range.
    /// * `size` - Length of the range in bytes.
    ///
    /// # Returns
    ///
    /// A new `AddrRange` covering `[base, base + size)`.
    #[inline]
    pub const fn new(base: MemAddr, size: u64) -> Self {
        Self { base, size }
    }

    /// Returns `true` when `addr` falls inside the range.
    ///
    /// The upper bound saturates, so a range ending at the top of the address
    /// space behaves as expected.
    #[inline]
    pub const fn contains(&self, addr: MemAddr) -> bool {
        addr.0 >= self.base.0 && addr.0 < self.base.0.saturating_add(self.size)
    }
}
