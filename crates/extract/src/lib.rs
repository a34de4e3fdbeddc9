//! Reference-trace extraction library for RISC-V hardware verification.
//!
//! This crate turns a reference simulator's commit log into golden memory data with the following:
//! 1. **Common:** Address types, trace-grammar constants, and extraction error types.
//! 2. **Config:** Explicit extraction configuration (paths, target word width, result region).
//! 3. **Trace:** The commit-log line grammar and the parsed memory-write record type.
//! 4. **Extract:** The filter-map-collect pipeline and the reference-file writer.

/// Common types and constants (addresses, ranges, trace markers, errors).
pub mod common;
/// Extraction configuration (paths, word width, region filter).
pub mod config;
/// Extraction pipeline (trace scan, region filter, reference-file output).
pub mod extract;
/// Commit-log trace model (line grammar, memory-write records).
pub mod trace;

/// Root configuration type; construct directly or deserialize from JSON.
pub use crate::config::ExtractConfig;
/// One-shot extraction entry point; reads the trace and writes the reference file.
pub use crate::extract::run;
/// Parsed memory-write record; the unit of the expected-data set.
pub use crate::trace::MemWrite;
