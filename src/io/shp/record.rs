//! Record framing and shape dispatch.

use crate::error::{Result, ShpError};
use crate::io::byte_reader::{ByteReader, ByteSource, Endian};
use crate::types::ShapeType;

use super::constants::RECORD_HEADER_SIZE;
use super::shapes::{self, Shape};

/// One decoded record.
#[derive(Debug, Clone, PartialEq)]
pub struct ShpRecord {
    /// Record number, 1-based on well-formed files.
    pub number: i32,
    /// Content length in 16-bit words, shape type tag included.
    pub content_length: i32,
    pub shape: Shape,
}

impl ShpRecord {
    /// Payload size in bytes after the 4-byte shape type tag.
    pub fn content_length_bytes(&self) -> i64 {
        payload_size(self.content_length)
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }
}

fn payload_size(content_length: i32) -> i64 {
    i64::from(content_length) * 2 - 4
}

/// Decode the record at the cursor.
///
/// Returns `Ok(None)` when the cursor sits exactly at the end of the buffer.
/// Any other shortfall is an error.
pub fn decode_next_record<S: ByteSource>(reader: &mut ByteReader<S>) -> Result<Option<ShpRecord>> {
    let remaining = reader.remaining();
    if remaining == 0 {
        return Ok(None);
    }
    if remaining < RECORD_HEADER_SIZE {
        return Err(ShpError::Format("record header too small".into()));
    }

    reader.set_endian(Endian::Big);
    let number = reader.read_i32()?;
    let content_length = reader.read_i32()?;
    let size = usize::try_from(payload_size(content_length)).map_err(|_| {
        ShpError::Format(format!(
            "invalid content length {content_length} in record {number}"
        ))
    })?;

    reader.set_endian(Endian::Little);
    let tag = reader.read_i32()?;
    let shape = match ShapeType::from_i32(tag) {
        Some(ShapeType::Point) => Shape::Point(shapes::decode_point(reader, size)?),
        Some(ShapeType::PointZ) => Shape::PointZ(shapes::decode_point_z(reader, size)?),
        Some(ShapeType::Polygon) => shapes::decode_polygon(reader, size)?,
        Some(ShapeType::PolyLine) => shapes::decode_polyline(reader, size)?,
        Some(_) => return Err(ShpError::UnsupportedShapeType(tag)),
        None => return Err(ShpError::UnknownShapeType(tag)),
    };

    Ok(Some(ShpRecord {
        number,
        content_length,
        shape,
    }))
}
