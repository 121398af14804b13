//! Bounding box types

use super::Point;
use std::fmt;

/// Rectangle as stored in the file header and in multi-part records.
///
/// The format stores Xmin, Ymin, Xmax, Ymax in the four slots, in that
/// order; the field names follow the slot layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundsXY {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundsXY {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        BoundsXY {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pair of values describing a Z or M range in the header
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range {
    pub x: f64,
    pub y: f64,
}

impl Range {
    pub const fn new(x: f64, y: f64) -> Self {
        Range { x, y }
    }
}

/// 2D bounding box accumulated from coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum point (lower-left corner)
    pub min: Point,
    /// Maximum point (upper-right corner)
    pub max: Point,
}

impl BoundingBox2D {
    /// Create a new bounding box from min and max points
    pub fn new(min: Point, max: Point) -> Self {
        BoundingBox2D { min, max }
    }

    /// Inverted full-globe box: min at (180, 90), max at (-180, -90).
    ///
    /// Any longitude/latitude expands it, so the first real coordinate
    /// narrows the box onto itself.
    pub fn geographic_seed() -> Self {
        BoundingBox2D {
            min: Point::new(180.0, 90.0),
            max: Point::new(-180.0, -90.0),
        }
    }

    /// Create a bounding box that contains all given points
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox2D::new(*first, *first);
        bbox.expand_to_include_all(rest);
        Some(bbox)
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand the bounding box to include another point.
    ///
    /// `f64::min`/`f64::max` ignore NaN, so a NaN coordinate leaves the
    /// matching bound unchanged instead of poisoning it.
    pub fn expand_to_include(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Expand the bounding box to include every point of a slice
    pub fn expand_to_include_all(&mut self, points: &[Point]) {
        for point in points {
            self.expand_to_include(*point);
        }
    }

    /// Corners as `[[xmin, ymin], [xmax, ymax]]`
    pub fn to_corners(&self) -> [[f64; 2]; 2] {
        [self.min.to_array(), self.max.to_array()]
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox2D[{} -> {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox2d_from_points() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(-5.0, 3.0),
        ];
        let bbox = BoundingBox2D::from_points(&points).unwrap();
        assert_eq!(bbox.min, Point::new(-5.0, 0.0));
        assert_eq!(bbox.max, Point::new(10.0, 5.0));
        assert_eq!(bbox.width(), 15.0);
        assert_eq!(bbox.height(), 5.0);
        assert!(BoundingBox2D::from_points(&[]).is_none());
    }

    #[test]
    fn test_geographic_seed_narrows() {
        let mut bbox = BoundingBox2D::geographic_seed();
        bbox.expand_to_include(Point::new(8.5, 47.3));
        assert_eq!(bbox.min, Point::new(8.5, 47.3));
        assert_eq!(bbox.max, Point::new(8.5, 47.3));

        bbox.expand_to_include_all(&[Point::new(9.5, 46.0), Point::new(6.0, 48.0)]);
        assert_eq!(bbox.to_corners(), [[6.0, 46.0], [9.5, 48.0]]);
    }

    #[test]
    fn test_nan_coordinate_is_ignored() {
        let mut bbox = BoundingBox2D::geographic_seed();
        bbox.expand_to_include_all(&[Point::new(1.0, 2.0), Point::new(f64::NAN, 3.0)]);
        assert_eq!(bbox.to_corners(), [[1.0, 2.0], [1.0, 3.0]]);
    }

    #[test]
    fn test_bbox2d_contains() {
        let bbox = BoundingBox2D::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(bbox.contains(Point::new(5.0, 5.0)));
        assert!(!bbox.contains(Point::new(15.0, 5.0)));
    }
}
