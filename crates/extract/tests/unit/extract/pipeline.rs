//! # End-to-End Pipeline Tests
//!
//! This module contains unit tests for complete extraction runs over on-disk
//! traces: ordering, idempotence, region filtering, the empty-trace case, and
//! failure atomicity of the reference file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rvtrace_core::common::{AddrRange, ExtractError, MemAddr};
use rvtrace_core::config::{ExtractConfig, Xlen};
use rvtrace_core::extract;
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a temporary trace file with the given content.
fn create_temp_trace(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Helper function to build a config writing into a fresh temp directory.
fn create_test_config(trace: &NamedTempFile, out_dir: &TempDir) -> ExtractConfig {
    ExtractConfig::new(trace.path(), out_dir.path().join("reference_output"))
}

const SCENARIO_TRACE: &str = "\
core   0: >>>>  test_2
core   0: 3 0x0000000040000000 (0x00000513) x10 0x0000000000000055
core   0: 3 0x0000000040000004 (0x00a62023) mem 0x0000000040001000 0x0000000000000055
core   0: 3 0x0000000040000008 (0x00000013)
";

#[test]
fn test_single_store_scenario() {
    let trace = create_temp_trace(SCENARIO_TRACE);
    let out_dir = TempDir::new().unwrap();
    let config = create_test_config(&trace, &out_dir);

    let summary = extract::run(&config).unwrap();

    assert_eq!(summary.lines_scanned, 4);
    assert_eq!(summary.writes_matched, 1);
    assert_eq!(summary.writes_kept, 1);
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "0000000000000055\n"
    );
}

#[test]
fn test_order_preserved_across_writes() {
    let trace = create_temp_trace(
        "core   0: 3 0x40000000 (0x00a62023) mem 0x0000000040001008 0x0000000000000003\n\
         core   0: 3 0x40000004 (0x00a62023) mem 0x0000000040001000 0x0000000000000001\n\
         core   0: 3 0x40000008 (0x00a62023) mem 0x0000000040001010 0x0000000000000002\n",
    );
    let out_dir = TempDir::new().unwrap();
    let config = create_test_config(&trace, &out_dir);

    let summary = extract::run(&config).unwrap();

    // Execution order, not address order.
    assert_eq!(summary.writes_kept, 3);
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "0000000000000003\n0000000000000001\n0000000000000002\n"
    );
}

#[test]
fn test_region_filter_drops_out_of_range_writes() {
    let trace = create_temp_trace(
        "core   0: 3 0x40000000 (0x00a62023) mem 0x0000000040001000 0x0000000000000001\n\
         core   0: 3 0x40000004 (0x00a62023) mem 0x0000000080000000 0x00000000000000ff\n\
         core   0: 3 0x40000008 (0x00a62023) mem 0x0000000040001008 0x0000000000000002\n",
    );
    let out_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&trace, &out_dir);
    config.region = Some(AddrRange::new(MemAddr::new(0x4000_1000), 4096));

    let summary = extract::run(&config).unwrap();

    assert_eq!(summary.writes_matched, 3);
    assert_eq!(summary.writes_kept, 2);
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "0000000000000001\n0000000000000002\n"
    );
}

#[test]
fn test_duplicate_writes_are_not_deduplicated() {
    let trace = create_temp_trace(
        "core   0: 3 0x40000000 (0x00a62023) mem 0x0000000040001000 0x0000000000000055\n\
         core   0: 3 0x40000004 (0x00a62023) mem 0x0000000040001000 0x0000000000000055\n",
    );
    let out_dir = TempDir::new().unwrap();
    let config = create_test_config(&trace, &out_dir);

    let summary = extract::run(&config).unwrap();

    assert_eq!(summary.writes_kept, 2);
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "0000000000000055\n0000000000000055\n"
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let trace = create_temp_trace(SCENARIO_TRACE);
    let out_dir = TempDir::new().unwrap();
    let config = create_test_config(&trace, &out_dir);

    let first = extract::run(&config).unwrap();
    let first_bytes = fs::read(&config.output_path).unwrap();
    let second = extract::run(&config).unwrap();
    let second_bytes = fs::read(&config.output_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_existing_output_is_overwritten() {
    let trace = create_temp_trace(SCENARIO_TRACE);
    let out_dir = TempDir::new().unwrap();
    let config = create_test_config(&trace, &out_dir);
    fs::write(&config.output_path, "stale contents\n").unwrap();

    let _ = extract::run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "0000000000000055\n"
    );
}

#[test]
fn test_empty_trace_yields_empty_output() {
    let trace = create_temp_trace("");
    let out_dir = TempDir::new().unwrap();
    let config = create_test_config(&trace, &out_dir);

    let summary = extract::run(&config).unwrap();

    assert_eq!(summary.lines_scanned, 0);
    assert_eq!(summary.writes_matched, 0);
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "");
}

#[test]
fn test_trace_without_writes_yields_empty_output() {
    let trace = create_temp_trace(
        "core   0: 3 0x40000000 (0x00000013)\n\
         core   0: 3 0x40000004 (0x00000013)\n",
    );
    let out_dir = TempDir::new().unwrap();
    let config = create_test_config(&trace, &out_dir);

    let summary = extract::run(&config).unwrap();

    assert_eq!(summary.lines_scanned, 2);
    assert_eq!(summary.writes_matched, 0);
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "");
}

#[test]
fn test_malformed_payload_leaves_no_output() {
    let trace = create_temp_trace(
        "core   0: 3 0x40000000 (0x00a62023) mem 0x0000000040001000 0x0000000000000055\n\
         core   0: 3 0x40000004 (0x00a62023) mem 0x0000000040001008 0xBADHEX\n",
    );
    let out_dir = TempDir::new().unwrap();
    let config = create_test_config(&trace, &out_dir);

    let err = extract::run(&config).unwrap_err();

    assert!(matches!(err, ExtractError::MalformedRecord { line: 2, .. }));
    assert!(!config.output_path.exists());
}

#[test]
fn test_missing_trace_is_precondition_failure() {
    let out_dir = TempDir::new().unwrap();
    let config = ExtractConfig::new(
        PathBuf::from("does/not/exist.commit.log"),
        out_dir.path().join("reference_output"),
    );

    let err = extract::run(&config).unwrap_err();

    assert!(matches!(err, ExtractError::TraceUnreadable { .. }));
    assert!(!config.output_path.exists());
}

#[test]
fn test_rv32_output_width() {
    let trace = create_temp_trace(
        "core   0: 3 0x40000000 (0x00a62023) mem 0x40001000 0x00000055\n",
    );
    let out_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&trace, &out_dir);
    config.xlen = Xlen::Rv32;

    let _ = extract::run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "00000055\n"
    );
}

#[test]
fn test_record_count_matches_write_lines() {
    let trace = create_temp_trace(
        "core   0: 3 0x40000000 (0x00a62023) mem 0x40001000 0x0000000000000001\n\
         core   0: 3 0x40000004 (0x00000013)\n\
         core   0: 3 0x40000008 (0x00a62023) mem 0x40001008 0x0000000000000002\n\
         core   0: 3 0x4000000c (0x00053083) x1 0x0000000000000001 mem 0x40001000\n",
    );
    let out_dir = TempDir::new().unwrap();
    let config = create_test_config(&trace, &out_dir);

    let summary = extract::run(&config).unwrap();
    let lines = fs::read_to_string(&config.output_path).unwrap();

    assert_eq!(summary.writes_matched, 2);
    assert_eq!(lines.lines().count(), summary.writes_matched);
}
