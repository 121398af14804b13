//! Main file header (the first 100 bytes of a `.shp` file).

use crate::error::{Result, ShpError};
use crate::io::byte_reader::{ByteReader, ByteSource, Endian};
use crate::types::{BoundsXY, Range, ShapeType};

use super::constants::{FILE_CODE, HEADER_SIZE, RESERVED_WORDS};

/// Decoded main file header.
#[derive(Debug, Clone, PartialEq)]
pub struct ShpHeader {
    /// Total file length in 16-bit words, header included.
    pub file_length: i32,
    pub version: i32,
    /// Shape type code shared by all non-null records.
    pub shape_type: i32,
    pub bounds_xy: BoundsXY,
    pub bounds_z: Range,
    pub bounds_m: Range,
}

impl ShpHeader {
    /// File length in bytes as declared by the header.
    pub fn file_length_bytes(&self) -> i64 {
        i64::from(self.file_length) * 2
    }

    /// Shape type as an enum, if the code is a known one.
    pub fn shape_type(&self) -> Option<ShapeType> {
        ShapeType::from_i32(self.shape_type)
    }
}

/// Decode the header from the start of the buffer.
///
/// Leaves the reader in little-endian mode, positioned at the first record.
pub fn decode_header<S: ByteSource>(reader: &mut ByteReader<S>) -> Result<ShpHeader> {
    if reader.len() < HEADER_SIZE {
        return Err(ShpError::Format("header too small".into()));
    }

    reader.set_endian(Endian::Big);
    if reader.read_i32()? != FILE_CODE {
        return Err(ShpError::Format("bad signature".into()));
    }
    reader.skip(RESERVED_WORDS * 4)?;
    let file_length = reader.read_i32()?;

    reader.set_endian(Endian::Little);
    let version = reader.read_i32()?;
    let shape_type = reader.read_i32()?;
    let bounds_xy = BoundsXY::new(
        reader.read_f64()?,
        reader.read_f64()?,
        reader.read_f64()?,
        reader.read_f64()?,
    );
    let bounds_z = Range::new(reader.read_f64()?, reader.read_f64()?);
    let bounds_m = Range::new(reader.read_f64()?, reader.read_f64()?);

    Ok(ShpHeader {
        file_length,
        version,
        shape_type,
        bounds_xy,
        bounds_z,
        bounds_m,
    })
}
