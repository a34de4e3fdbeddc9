//! Extraction pipeline.
//!
//! This module turns a commit log into a reference data file. It includes:
//! 1. **Extractor:** The filter-map-collect scan over the trace stream.
//! 2. **Writer:** Emission of the fixed-width reference file.

/// Trace scan and region filtering.
pub mod extractor;

/// Reference-file emission.
pub mod writer;

pub use extractor::{ExtractSummary, extract_writes, run};
pub use writer::write_reference;
