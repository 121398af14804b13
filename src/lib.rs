//! # shpjson
//!
//! A pure Rust library for decoding ESRI Shapefile geometry (`.shp`) and
//! converting polygon collections to GeoJSON.
//!
//! ## Features
//!
//! - Endian-aware byte reader over any in-memory buffer
//! - Point, PointZ, PolyLine and Polygon records
//! - Multi-part ring reconstruction from cumulative ring offsets
//! - Polygon collections to a single GeoJSON feature with bounding box
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shpjson::ShpReader;
//!
//! // Read a shapefile
//! let shp = ShpReader::from_file("countries.shp")?.read()?;
//!
//! // Access records
//! for record in &shp.records {
//!     println!("Record {}: {}", record.number, record.shape_type());
//! }
//!
//! // Convert polygons to GeoJSON
//! println!("{}", shp.to_geojson()?.to_json_string()?);
//! # Ok::<(), shpjson::error::ShpError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`io::ByteReader`] - cursor with switchable byte order over a [`io::ByteSource`]
//! - [`io::shp`] - header, record and shape decoders
//! - [`ShpReader`] - drives a complete decode pass into a [`ShpFile`]
//! - [`geojson`] - converts Polygon records to the output structure

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod geojson;
pub mod io;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ShpError};
pub use types::{BoundingBox2D, BoundsXY, Point, PointZ, Range, Ring, ShapeType};

// Re-export decoding types
pub use io::shp::{MultiPart, MultiPartKind, Shape, ShpHeader, ShpRecord};
pub use io::{ByteReader, ByteSource, Endian, FloatDecoding};
pub use io::{ShpFile, ShpReader, ShpReaderConfiguration};

// Re-export conversion
pub use geojson::{to_geojson, GeoJsonOutput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
