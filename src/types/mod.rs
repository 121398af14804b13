//! Core geometry and format types

mod bounds;
mod point;
mod shape_type;

pub use bounds::{BoundingBox2D, BoundsXY, Range};
pub use point::{Point, PointZ, Ring};
pub use shape_type::ShapeType;
