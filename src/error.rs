//! Error types for shpjson

use std::io;
use thiserror::Error;

/// Main error type for shapefile decoding and conversion
#[derive(Debug, Error)]
pub enum ShpError {
    /// IO error occurred while acquiring the raw bytes
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed file: bad signature, undersized header, record or payload
    #[error("Format error: {0}")]
    Format(String),

    /// Shape type defined by the format but not decoded by this library
    #[error("Shape type {0} is currently unsupported")]
    UnsupportedShapeType(i32),

    /// Shape type outside the format definition
    #[error("Encountered unknown shape type ({0})")]
    UnknownShapeType(i32),

    /// Record collection cannot be converted to GeoJSON
    #[error("Unsupported conversion: {0}")]
    UnsupportedConversion(String),

    /// A primitive read ran past the end of the buffer
    #[error("Unexpected end of data at offset {offset}: {needed} more bytes needed")]
    UnexpectedEof { offset: usize, needed: usize },

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for shpjson operations
pub type Result<T> = std::result::Result<T, ShpError>;

impl From<String> for ShpError {
    fn from(s: String) -> Self {
        ShpError::Format(s)
    }
}

impl From<&str> for ShpError {
    fn from(s: &str) -> Self {
        ShpError::Format(s.to_string())
    }
}
