//! # Trace Model Tests
//!
//! Unit tests for the commit-log line grammar and memory-write records.


/// Tests for fixed-width value rendering.
pub mod normalization;
