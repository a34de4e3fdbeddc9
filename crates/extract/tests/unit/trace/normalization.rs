//! # Normalization Tests
//!
//! This module contains unit tests for fixed-width hexadecimal rendering of
//! memory-write records, independent of how the simulator rendered them.

use pretty_assertions::assert_eq;
use rvtrace_core::common::MemAddr;
use rvtrace_core::config::Xlen;
use rvtrace_core::trace::MemWrite;

#[test]
fn test_rv64_zero_pads_to_sixteen_digits() {
    let record = MemWrite::new(MemAddr::new(0x4000_1000), 1);
    assert_eq!(record.rendered(Xlen::Rv64), "0000000000000001");
}

#[test]
fn test_rv32_zero_pads_to_eight_digits() {
    let record = MemWrite::new(MemAddr::new(0x4000_1000), 0x55);
    assert_eq!(record.rendered(Xlen::Rv32), "00000055");
}

#[test]
fn test_full_width_value_is_unpadded() {
    let record = MemWrite::new(MemAddr::new(0x4000_1000), 0xDEAD_BEEF_DEAD_BEEF);
    assert_eq!(record.rendered(Xlen::Rv64), "deadbeefdeadbeef");
}

#[test]
fn test_rendering_is_lowercase() {
    let record = MemWrite::new(MemAddr::new(0x4000_1000), 0xABCD_EF01);
    assert_eq!(record.rendered(Xlen::Rv32), "abcdef01");
}

#[test]
fn test_zero_value_renders_all_zeros() {
    let record = MemWrite::new(MemAddr::new(0x4000_1000), 0);
    assert_eq!(record.rendered(Xlen::Rv64), "0000000000000000");
}
