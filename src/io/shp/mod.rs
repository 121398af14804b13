//! ESRI Shapefile (`.shp`) decoding.
//!
//! # Module Structure
//!
//! - [`constants`] - File code and fixed sizes
//! - [`header`] - The 100-byte main file header
//! - [`record`] - Record framing and shape type dispatch
//! - [`shapes`] - Point, PointZ and multi-part (polyline/polygon) payloads
//! - [`reader`] - [`ShpReader`], which drives a complete decode pass

pub mod constants;
pub mod header;
pub mod reader;
pub mod record;
pub mod shapes;

pub use header::{decode_header, ShpHeader};
pub use reader::{ShpFile, ShpReader, ShpReaderConfiguration};
pub use record::{decode_next_record, ShpRecord};
pub use shapes::{MultiPart, MultiPartKind, Shape};
