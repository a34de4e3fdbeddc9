//! Common utilities and types shared across the trace extractor.
//!
//! This module provides the building blocks used by every other component. It includes:
//! 1. **Address Types:** A strong type for physical memory addresses and address ranges.
//! 2. **Constants:** The fixed tokens of the simulator's commit-log grammar.
//! 3. **Error Handling:** The extraction error type surfaced to callers.

/// Address type definitions (memory addresses and half-open ranges).
pub mod addr;

/// Commit-log grammar constants.
pub mod constants;

/// Extraction error types.
pub mod error;

pub use addr::{AddrRange, MemAddr};
pub use error::ExtractError;
