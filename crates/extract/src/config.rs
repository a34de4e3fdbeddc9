//! Configuration for the trace extractor.
//!
//! This module defines the structures that parameterize an extraction run. It provides:
//! 1. **Explicit Paths:** Trace input and reference output locations, with no
//!    implicit working-directory conventions.
//! 2. **Target Width:** The word size the reference simulator was run with,
//!    which fixes the normalized payload width.
//! 3. **Region Filter:** An optional result-buffer range restricting which
//!    writes enter the expected-data set.
//!
//! Configuration is supplied via JSON from the build orchestration, or built
//! directly by the CLI from its flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::constants::{HEX_DIGITS_RV32, HEX_DIGITS_RV64};
use crate::common::{AddrRange, ExtractError};

/// Target word width of the traced program.
///
/// Determines how many hexadecimal digits a normalized data value carries,
/// regardless of how the simulator rendered the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Xlen {
    /// 32-bit target; values normalize to 8 hex digits.
    #[serde(alias = "RV32")]
    Rv32,
    /// 64-bit target; values normalize to 16 hex digits.
    #[default]
    #[serde(alias = "RV64")]
    Rv64,
}

impl Xlen {
    /// Returns the number of hexadecimal digits in a normalized value.
    #[inline]
    pub const fn hex_digits(self) -> usize {
        match self {
            Self::Rv32 => HEX_DIGITS_RV32,
            Self::Rv64 => HEX_DIGITS_RV64,
        }
    }

    /// Returns the largest value representable in this word width.
    #[inline]
    pub const fn value_mask(self) -> u64 {
        match self {
            Self::Rv32 => 0xFFFF_FFFF,
            Self::Rv64 => u64::MAX,
        }
    }
}

/// Root configuration for one extraction run.
///
/// # Examples
///
/// Deserializing from JSON (typical build-orchestration usage):
///
/// ```
/// use rvtrace_core::config::{ExtractConfig, Xlen};
///
/// let json = r#"{
///     "trace_path": "build/test.commit.log",
///     "output_path": "build/test.reference_output",
///     "xlen": "Rv64",
///     "region": { "base": 1073745920, "size": 4096 }
/// }"#;
///
/// let config: ExtractConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.xlen, Xlen::Rv64);
/// assert!(config.region.is_some());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Path of the commit log produced by the reference simulator.
    pub trace_path: PathBuf,

    /// Path of the reference data file to write (overwritten each run).
    pub output_path: PathBuf,

    /// Target word width; fixes the normalized payload width.
    #[serde(default)]
    pub xlen: Xlen,

    /// Result-buffer region; writes outside it are dropped. `None` keeps
    /// every committed write.
    #[serde(default)]
    pub region: Option<AddrRange>,
}

impl ExtractConfig {
    /// Creates a configuration with explicit paths and default width.
    ///
    /// # Arguments
    ///
    /// * `trace_path` - Commit log to read.
    /// * `output_path` - Reference file to write.
    ///
    /// # Returns
    ///
    /// A configuration for a 64-bit target with no region filter.
    pub fn new(trace_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            trace_path: trace_path.into(),
            output_path: output_path.into(),
            xlen: Xlen::default(),
            region: None,
        }
    }

    /// Loads a configuration from a JSON file supplied by the build
    /// orchestration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the JSON configuration file.
    ///
    /// # Returns
    ///
    /// The deserialized configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] when the file is missing,
    /// unreadable, or not valid configuration JSON.
    pub fn from_json_file(path: &Path) -> Result<Self, ExtractError> {
        let text = fs::read_to_string(path).map_err(|e| ExtractError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| ExtractError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
