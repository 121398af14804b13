//! Shapefile byte builders.
//!
//! `ShapefileBuilder` writes a well-formed `.shp` buffer record by record;
//! the `raw_*` helpers allow deliberately malformed content.

#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

pub const POINT: i32 = 1;
pub const POLYLINE: i32 = 3;
pub const POLYGON: i32 = 5;
pub const POINT_Z: i32 = 11;

/// Builds a complete shapefile in memory.
pub struct ShapefileBuilder {
    shape_type: i32,
    records: Vec<Vec<u8>>,
    file_length: Option<i32>,
    trailing: Vec<u8>,
}

impl ShapefileBuilder {
    pub fn new(shape_type: i32) -> Self {
        Self {
            shape_type,
            records: Vec::new(),
            file_length: None,
            trailing: Vec::new(),
        }
    }

    /// Append a point record.
    pub fn point(mut self, x: f64, y: f64) -> Self {
        let mut content = tag(POINT);
        content.write_f64::<LittleEndian>(x).unwrap();
        content.write_f64::<LittleEndian>(y).unwrap();
        self.records.push(content);
        self
    }

    /// Append a point record with a zero-length payload.
    pub fn null_point(mut self) -> Self {
        self.records.push(tag(POINT));
        self
    }

    /// Append a PointZ record with Z and M.
    pub fn point_z(mut self, x: f64, y: f64, z: f64, m: f64) -> Self {
        let mut content = tag(POINT_Z);
        for value in [x, y, z, m] {
            content.write_f64::<LittleEndian>(value).unwrap();
        }
        self.records.push(content);
        self
    }

    pub fn polygon(mut self, rings: &[Vec<(f64, f64)>]) -> Self {
        self.records.push(multipart_content(POLYGON, rings));
        self
    }

    pub fn polyline(mut self, rings: &[Vec<(f64, f64)>]) -> Self {
        self.records.push(multipart_content(POLYLINE, rings));
        self
    }

    /// Append a record made of a shape tag and arbitrary payload bytes.
    pub fn raw_record(mut self, shape_tag: i32, payload: &[u8]) -> Self {
        let mut content = tag(shape_tag);
        content.extend_from_slice(payload);
        self.records.push(content);
        self
    }

    /// Override the header's file length word count.
    pub fn file_length(mut self, words: i32) -> Self {
        self.file_length = Some(words);
        self
    }

    /// Bytes appended after the last record.
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut body = Vec::new();
        for (index, content) in self.records.iter().enumerate() {
            body.write_i32::<BigEndian>(index as i32 + 1).unwrap();
            body.write_i32::<BigEndian>((content.len() / 2) as i32).unwrap();
            body.extend_from_slice(content);
        }
        body.extend_from_slice(&self.trailing);

        let total = 100 + body.len();
        let mut buf = header(
            self.file_length.unwrap_or((total / 2) as i32),
            self.shape_type,
        );
        buf.extend_from_slice(&body);
        buf
    }
}

/// 100-byte main file header.
pub fn header(file_length: i32, shape_type: i32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(100);
    buf.write_i32::<BigEndian>(9994).unwrap();
    for _ in 0..5 {
        buf.write_i32::<BigEndian>(0).unwrap();
    }
    buf.write_i32::<BigEndian>(file_length).unwrap();
    buf.write_i32::<LittleEndian>(1000).unwrap();
    buf.write_i32::<LittleEndian>(shape_type).unwrap();
    for _ in 0..8 {
        buf.write_f64::<LittleEndian>(0.0).unwrap();
    }
    buf
}

fn tag(shape_tag: i32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.write_i32::<LittleEndian>(shape_tag).unwrap();
    buf
}

/// Tag + box + counts + ring offsets + points.
pub fn multipart_content(shape_tag: i32, rings: &[Vec<(f64, f64)>]) -> Vec<u8> {
    let points: Vec<(f64, f64)> = rings.iter().flatten().copied().collect();
    let (mut xmin, mut ymin, mut xmax, mut ymax) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
    if let Some(&(x, y)) = points.first() {
        (xmin, ymin, xmax, ymax) = (x, y, x, y);
    }
    for &(x, y) in &points {
        xmin = xmin.min(x);
        ymin = ymin.min(y);
        xmax = xmax.max(x);
        ymax = ymax.max(y);
    }

    let mut buf = tag(shape_tag);
    for value in [xmin, ymin, xmax, ymax] {
        buf.write_f64::<LittleEndian>(value).unwrap();
    }
    buf.write_i32::<LittleEndian>(rings.len() as i32).unwrap();
    buf.write_i32::<LittleEndian>(points.len() as i32).unwrap();
    let mut offset = 0;
    for ring in rings {
        buf.write_i32::<LittleEndian>(offset).unwrap();
        offset += ring.len() as i32;
    }
    for (x, y) in points {
        buf.write_f64::<LittleEndian>(x).unwrap();
        buf.write_f64::<LittleEndian>(y).unwrap();
    }
    buf
}
