//! Polygon records to a GeoJSON-like structure.
//!
//! The output wraps one `Feature` whose geometry is a `GeometryCollection`
//! holding one `MultiPolygon` per record, plus the bounding box of every
//! coordinate under `properties.bbox`:
//!
//! ```json
//! { "type": "geojson",
//!   "data": { "type": "Feature",
//!             "geometry": { "type": "GeometryCollection", "geometries": [...] },
//!             "properties": { "bbox": [[xmin, ymin], [xmax, ymax]] } } }
//! ```
//!
//! Every ring becomes its own single-ring polygon. Rings are not grouped into
//! exterior + holes, so a polygon with a hole converts to two overlapping
//! polygons.
//!
//! NaN coordinates are written through to the geometry but never move the
//! bounding box.

use serde::Serialize;

use crate::error::{Result, ShpError};
use crate::io::shp::{Shape, ShpRecord};
use crate::types::{BoundingBox2D, Point, Ring};

/// `[x, y]`
pub type Position = [f64; 2];

/// Rings of one polygon, each a list of positions.
pub type PolygonCoordinates = Vec<Vec<Position>>;

/// Top-level conversion result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJsonOutput {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: Feature,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: GeometryCollection,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometries: Vec<MultiPolygon>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiPolygon {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: Vec<PolygonCoordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureProperties {
    /// `[[xmin, ymin], [xmax, ymax]]`
    pub bbox: [Position; 2],
}

impl MultiPolygon {
    fn from_rings(rings: &[Ring]) -> Self {
        MultiPolygon {
            kind: "MultiPolygon",
            coordinates: rings
                .iter()
                .map(|ring| vec![ring.iter().map(Point::to_array).collect()])
                .collect(),
        }
    }
}

impl GeoJsonOutput {
    fn new(geometries: Vec<MultiPolygon>, bbox: BoundingBox2D) -> Self {
        GeoJsonOutput {
            kind: "geojson",
            data: Feature {
                kind: "Feature",
                geometry: GeometryCollection {
                    kind: "GeometryCollection",
                    geometries,
                },
                properties: FeatureProperties {
                    bbox: bbox.to_corners(),
                },
            },
        }
    }

    /// The per-record geometries.
    pub fn geometries(&self) -> &[MultiPolygon] {
        &self.data.geometry.geometries
    }

    /// The accumulated `[[xmin, ymin], [xmax, ymax]]` box.
    pub fn bbox(&self) -> [Position; 2] {
        self.data.properties.bbox
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Convert a list of Polygon records.
///
/// Fails with [`ShpError::UnsupportedConversion`] when the list is empty or
/// holds any non-Polygon record.
pub fn to_geojson(records: &[ShpRecord]) -> Result<GeoJsonOutput> {
    let polygons = records
        .iter()
        .map(|record| match &record.shape {
            Shape::Polygon(part) => Some(part),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .filter(|polygons| !polygons.is_empty())
        .ok_or_else(|| {
            ShpError::UnsupportedConversion("only Polygon collections are supported".into())
        })?;

    let mut bbox = BoundingBox2D::geographic_seed();
    let mut geometries = Vec::with_capacity(polygons.len());
    for part in polygons {
        for ring in &part.rings {
            bbox.expand_to_include_all(ring);
        }
        geometries.push(MultiPolygon::from_rings(&part.rings));
    }

    Ok(GeoJsonOutput::new(geometries, bbox))
}
