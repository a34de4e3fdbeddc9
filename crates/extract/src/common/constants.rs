//! Commit-log grammar constants.
//!
//! This module pins down the fixed tokens of the reference simulator's
//! commit-log output. It includes:
//! 1. **Marker Tokens:** The token that flags a memory access on a commit line.
//! 2. **Payload Format:** The prefix carried by every hexadecimal payload.

/// Token that introduces a memory access record on a commit line.
///
/// A store commits as `mem 0x<addr> 0x<value>`; a load commits with the value
/// before the marker and only the address after it.
pub const MEM_MARKER: &str = "mem";

/// Prefix carried by every hexadecimal payload in the commit log.
pub const HEX_PREFIX: &str = "0x";

/// Hexadecimal digits per word on a 32-bit target.
pub const HEX_DIGITS_RV32: usize = 8;

/// Hexadecimal digits per word on a 64-bit target.
pub const HEX_DIGITS_RV64: usize = 16;
