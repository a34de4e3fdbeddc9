//! Commit-log trace model.
//!
//! This module covers the textual trace emitted by the reference simulator with
//! commit logging enabled. It includes:
//! 1. **Line Grammar:** Recognition and parsing of memory-write commit lines.
//! 2. **Records:** The parsed memory-write event and its normalized rendering.

/// Commit-log line grammar and parsing.
pub mod line;

/// Parsed memory-write records.
pub mod record;

pub use line::parse_line;
pub use record::MemWrite;
