//! Shared test utilities for shpjson integration tests.
//!
//! All test crates import these via `mod common;`.

#![allow(dead_code)]

pub mod builders;

use shpjson::{ShpFile, ShpReader, ShpReaderConfiguration};

/// Decode bytes in strict mode, panicking on failure.
pub fn read_strict(bytes: Vec<u8>) -> ShpFile {
    ShpReader::from_bytes(bytes)
        .with_config(ShpReaderConfiguration::strict())
        .read()
        .expect("strict read should succeed")
}

/// Decode bytes with the default configuration, which keeps partial results.
pub fn read_failsafe(bytes: Vec<u8>) -> ShpFile {
    ShpReader::from_bytes(bytes)
        .read()
        .expect("header should decode")
}

/// The unit square used by several tests.
pub fn unit_square() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
}
