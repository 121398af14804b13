//! Shape payload decoders.
//!
//! Every decoder starts right after the record's shape type tag and receives
//! the declared payload size in bytes.

use crate::error::{Result, ShpError};
use crate::io::byte_reader::{ByteReader, ByteSource, Endian};
use crate::types::{BoundsXY, Point, PointZ, Ring, ShapeType};

use super::constants::POINT_SIZE;

/// Decoded geometry of one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    PointZ(PointZ),
    Polyline(MultiPart),
    Polygon(MultiPart),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Point(_) => ShapeType::Point,
            Shape::PointZ(_) => ShapeType::PointZ,
            Shape::Polyline(_) => ShapeType::PolyLine,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }

    /// Box and rings of a polyline or polygon.
    pub fn as_multi_part(&self) -> Option<&MultiPart> {
        match self {
            Shape::Polyline(part) | Shape::Polygon(part) => Some(part),
            _ => None,
        }
    }
}

/// Which multi-part shape a ring payload decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiPartKind {
    Polyline,
    Polygon,
}

impl MultiPartKind {
    fn wrap(self, part: MultiPart) -> Shape {
        match self {
            MultiPartKind::Polyline => Shape::Polyline(part),
            MultiPartKind::Polygon => Shape::Polygon(part),
        }
    }

    fn name(self) -> &'static str {
        match self {
            MultiPartKind::Polyline => "polyline",
            MultiPartKind::Polygon => "polygon",
        }
    }
}

/// Bounding box and rings shared by polylines and polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPart {
    pub bbox: BoundsXY,
    pub rings: Vec<Ring>,
}

impl MultiPart {
    /// Total number of points across all rings.
    pub fn num_points(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    /// All points in ring order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.rings.iter().flatten()
    }

    /// Cumulative start index of every ring, as stored on disk.
    pub fn ring_offsets(&self) -> Vec<i32> {
        let mut offsets = Vec::with_capacity(self.rings.len());
        let mut start = 0;
        for ring in &self.rings {
            offsets.push(start as i32);
            start += ring.len();
        }
        offsets
    }
}

fn check_payload<S: ByteSource>(reader: &ByteReader<S>, size: usize, what: &str) -> Result<()> {
    if reader.remaining() < size {
        return Err(ShpError::Format(format!("{what} record too small")));
    }
    Ok(())
}

/// Decode a Point payload. A zero-length payload yields [`Point::NULL`].
pub fn decode_point<S: ByteSource>(reader: &mut ByteReader<S>, size: usize) -> Result<Point> {
    check_payload(reader, size, "point")?;
    if size == 0 {
        return Ok(Point::NULL);
    }
    reader.set_endian(Endian::Little);
    Ok(Point::new(reader.read_f64()?, reader.read_f64()?))
}

/// Decode a PointZ payload. Z and M are optional, depending on `size`.
pub fn decode_point_z<S: ByteSource>(reader: &mut ByteReader<S>, size: usize) -> Result<PointZ> {
    check_payload(reader, size, "point")?;
    if size == 0 {
        return Ok(PointZ::NULL);
    }
    reader.set_endian(Endian::Little);
    let x = reader.read_f64()?;
    let y = reader.read_f64()?;
    let z = if size > 16 { reader.read_f64()? } else { f64::NAN };
    let m = if size > 24 { reader.read_f64()? } else { f64::NAN };
    Ok(PointZ::new(x, y, z, m))
}

pub fn decode_polyline<S: ByteSource>(reader: &mut ByteReader<S>, size: usize) -> Result<Shape> {
    decode_rings(reader, size, MultiPartKind::Polyline)
}

pub fn decode_polygon<S: ByteSource>(reader: &mut ByteReader<S>, size: usize) -> Result<Shape> {
    decode_rings(reader, size, MultiPartKind::Polygon)
}

/// Decode a multi-part payload: box, counts, ring offsets, then raw points.
///
/// Only XY is read per point; Z/M blocks of extended types are never
/// consumed here.
pub fn decode_rings<S: ByteSource>(
    reader: &mut ByteReader<S>,
    size: usize,
    kind: MultiPartKind,
) -> Result<Shape> {
    check_payload(reader, size, kind.name())?;

    reader.set_endian(Endian::Little);
    let bbox = BoundsXY::new(
        reader.read_f64()?,
        reader.read_f64()?,
        reader.read_f64()?,
        reader.read_f64()?,
    );
    let num_rings = read_count(reader, "ring")?;
    let num_points = read_count(reader, "point")?;

    // Reject counts the buffer cannot hold before allocating for them.
    let needed = num_rings
        .checked_mul(4)
        .and_then(|n| num_points.checked_mul(POINT_SIZE)?.checked_add(n));
    match needed {
        Some(needed) if needed <= reader.remaining() => {}
        _ => return Err(ShpError::Format(format!("{} record too small", kind.name()))),
    }

    let mut offsets = Vec::with_capacity(num_rings);
    for _ in 0..num_rings {
        offsets.push(reader.read_i32()?);
    }

    let mut points = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        points.push(Point::new(reader.read_f64()?, reader.read_f64()?));
    }

    let rings = split_rings(points, &offsets)?;
    Ok(kind.wrap(MultiPart { bbox, rings }))
}

fn read_count<S: ByteSource>(reader: &mut ByteReader<S>, what: &str) -> Result<usize> {
    let count = reader.read_i32()?;
    usize::try_from(count).map_err(|_| ShpError::Format(format!("negative {what} count {count}")))
}

/// Split a flat point list into rings at cumulative `offsets`.
///
/// The first offset marks the start of the first ring and is always 0, so it
/// is skipped; each following offset closes the previous ring, and the points
/// left over form the last ring.
///
/// The result always has `max(offsets.len(), 1)` rings: with no offsets, all
/// points (possibly none) form a single ring.
pub fn split_rings(points: Vec<Point>, offsets: &[i32]) -> Result<Vec<Ring>> {
    let boundaries = offsets.split_first().map_or(&[][..], |(_, rest)| rest);

    let mut rings = Vec::with_capacity(offsets.len().max(1));
    let mut rest = points.into_iter();
    let mut previous = 0usize;
    for &boundary in boundaries {
        let boundary = usize::try_from(boundary)
            .ok()
            .filter(|b| *b >= previous && *b - previous <= rest.len())
            .ok_or_else(|| ShpError::Format(format!("invalid ring offset {boundary}")))?;
        rings.push(rest.by_ref().take(boundary - previous).collect());
        previous = boundary;
    }
    rings.push(rest.collect());
    Ok(rings)
}
