//! Memory-write records.
//!
//! This module defines the parsed form of a commit-log memory-write line. It provides:
//! 1. **Event Representation:** The ordered (address, value) pair committed by a store.
//! 2. **Normalized Rendering:** Fixed-width hexadecimal output for the reference file.

use crate::common::MemAddr;
use crate::config::Xlen;

/// One committed memory write, in program execution order.
///
/// The value is held zero-extended to 64 bits; the target word width only
/// matters when the record is rendered for the reference file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWrite {
    /// Physical address the store committed to.
    pub addr: MemAddr,
    /// Value written, zero-extended to 64 bits.
    pub value: u64,
}

impl MemWrite {
    /// Creates a record from a parsed address and value.
    ///
    /// # Arguments
    ///
    /// * `addr` - Physical address the store committed to.
    /// * `value` - Value written, zero-extended to 64 bits.
    ///
    /// # Returns
    ///
    /// A new `MemWrite` record.
    #[inline]
    pub const fn new(addr: MemAddr, value: u64) -> Self {
        Self { addr, value }
    }

    /// Renders the value as fixed-width lowercase hexadecimal.
    ///
    /// The width is fixed by the target word size: 8 digits for RV32, 16 for
    /// RV64, zero-padded regardless of how the simulator rendered the payload.
    /// No `0x` prefix is emitted.
    ///
    /// # Arguments
    ///
    /// * `xlen` - Target word width of the traced program.
    ///
    /// # Returns
    ///
    /// The normalized hexadecimal representation of the written value.
    pub fn rendered(self, xlen: Xlen) -> String {
        format!("{:0width$x}", self.value, width = xlen.hex_digits())
    }
}
