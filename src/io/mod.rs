//! I/O module for decoding shapefile geometry

pub mod byte_reader;
pub mod shp;

pub use byte_reader::{ByteReader, ByteSource, Endian, FloatDecoding};
pub use shp::{ShpFile, ShpReader, ShpReaderConfiguration};
