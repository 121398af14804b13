//! Magic numbers and fixed sizes of the `.shp` layout.

/// File code at offset 0, big-endian.
pub const FILE_CODE: i32 = 9994;

/// Size of the main file header in bytes.
pub const HEADER_SIZE: usize = 100;

/// Unused big-endian words following the file code.
pub const RESERVED_WORDS: usize = 5;

/// Record header: record number + content length, both big-endian i32.
pub const RECORD_HEADER_SIZE: usize = 8;

/// Bytes of one raw XY point.
pub const POINT_SIZE: usize = 16;
