//! Point types for shape geometry

use std::fmt;

/// 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new 2D point
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Point with both coordinates set to NaN.
    ///
    /// Produced for point records that declare a zero-length payload.
    pub const NULL: Point = Point::new(f64::NAN, f64::NAN);

    /// Whether this is a null point (any coordinate NaN)
    pub fn is_null(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Coordinates as an `[x, y]` pair
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::new(0.0, 0.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Point with elevation and measure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl PointZ {
    /// Create a new point with elevation and measure
    pub const fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        PointZ { x, y, z, m }
    }

    /// Point with all four coordinates set to NaN
    pub const NULL: PointZ = PointZ::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN);

    /// Project onto the XY plane
    pub fn xy(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for PointZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, m={})", self.x, self.y, self.z, self.m)
    }
}

/// One part of a polyline or polygon
pub type Ring = Vec<Point>;
