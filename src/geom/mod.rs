use crate::errors::GeometryError;
use geo_types::{coord, Coord};
use serde::{Deserialize, Serialize};

/// Closed polygon contours, validated on construction.
pub mod polygon;

/// Affine transforms built on nalgebra's `Affine2`.
pub mod matrix;

/// Canonical shape builders: squares, rects, regular polygons and circles.
pub mod shapes;

pub use matrix::Transform;
pub use polygon::Polygon;

/// A 2D point whose coordinates are always finite. Serializes as an `(x, y)`
/// tuple and is checked again when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Result<Point, GeometryError> {
        if x.is_finite() && y.is_finite() {
            Ok(Point { x, y })
        } else {
            Err(GeometryError::NonFiniteCoordinate)
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// For builders whose arithmetic can't leave the finite range.
    pub(crate) fn new_unchecked(x: f64, y: f64) -> Point {
        debug_assert!(x.is_finite() && y.is_finite());
        Point { x, y }
    }
}

/// Shorthand for [`Point::new`].
pub fn pt(x: f64, y: f64) -> Result<Point, GeometryError> {
    Point::new(x, y)
}

impl TryFrom<(f64, f64)> for Point {
    type Error = GeometryError;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl TryFrom<Coord<f64>> for Point {
    type Error = GeometryError;

    fn try_from(c: Coord<f64>) -> Result<Self, Self::Error> {
        Point::new(c.x, c.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        coord! {x: p.x, y: p.y}
    }
}
