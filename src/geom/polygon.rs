//! A closed polygon contour. The edge from the last vertex back to the first
//! is implicit and never stored.

use crate::errors::GeometryError;
use crate::geom::Point;
use geo::Area;
use geo_types::{Coord, LineString};

#[derive(Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon, rejecting fewer than three vertices or any zero length
    /// edge (the closing edge included).
    pub fn new(points: Vec<Point>) -> Result<Polygon, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints(points.len()));
        }
        for (i, p) in points.iter().enumerate() {
            let next = &points[(i + 1) % points.len()];
            if p == next {
                return Err(GeometryError::ZeroLengthEdge(i));
            }
        }
        Ok(Polygon { points })
    }

    /// For builders whose vertices are valid by construction.
    pub(crate) fn new_unchecked(points: Vec<Point>) -> Polygon {
        debug_assert!(Polygon::new(points.clone()).is_ok());
        Polygon { points }
    }

    /// Create a new polygon from float pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Polygon, GeometryError> {
        let points = coords
            .iter()
            .map(|&xy| Point::try_from(xy))
            .collect::<Result<Vec<Point>, GeometryError>>()?;
        Polygon::new(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, a polygon has at least three points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Convert to a geo_types polygon, whose exterior ring repeats the first
    /// vertex to close it.
    pub fn to_geo(&self) -> geo_types::Polygon<f64> {
        let ring: Vec<Coord<f64>> = self.points.iter().map(|&p| p.into()).collect();
        geo_types::Polygon::new(LineString::new(ring), vec![])
    }

    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        self.to_geo().signed_area()
    }
}

impl std::fmt::Debug for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut comma = false;
        write!(f, "Polygon::from_coords(&[")?;

        for point in &self.points {
            if comma {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", point.x(), point.y())?;
            comma = true;
        }

        write!(f, "])")
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(points)
    }
}

impl TryFrom<Vec<(f64, f64)>> for Polygon {
    type Error = GeometryError;

    fn try_from(coords: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Polygon::from_coords(&coords)
    }
}

impl TryFrom<Vec<Coord<f64>>> for Polygon {
    type Error = GeometryError;

    fn try_from(coords: Vec<Coord<f64>>) -> Result<Self, Self::Error> {
        let points = coords
            .into_iter()
            .map(Point::try_from)
            .collect::<Result<Vec<Point>, GeometryError>>()?;
        Polygon::new(points)
    }
}

impl TryFrom<geo_types::Polygon<f64>> for Polygon {
    type Error = GeometryError;

    /// geo_types rings are explicitly closed, so the repeated last coordinate
    /// is dropped before validating.
    fn try_from(poly: geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        if !poly.interiors().is_empty() {
            return Err(GeometryError::UnsupportedHoles(poly.interiors().len()));
        }
        let (exterior, _) = poly.into_inner();
        let mut coords = exterior.0;
        if coords.len() > 1 && coords.first() == coords.last() {
            coords.pop();
        }
        Polygon::try_from(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use wkt::Wkt;

    #[test]
    fn test_too_few_points() {
        assert_eq!(
            Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0)]),
            Err(GeometryError::TooFewPoints(2))
        );
        assert_eq!(Polygon::new(vec![]), Err(GeometryError::TooFewPoints(0)));
    }

    #[test]
    fn test_zero_length_edges() {
        assert_eq!(
            Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
            Err(GeometryError::ZeroLengthEdge(1))
        );
        // The implicit closing edge counts too.
        assert_eq!(
            Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            Err(GeometryError::ZeroLengthEdge(3))
        );
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(
            Polygon::from_coords(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)]),
            Err(GeometryError::NonFiniteCoordinate)
        );
    }

    #[test]
    fn test_from_wkt_drops_closing_coord() {
        let geo_poly: geo_types::Polygon<f64> = geo_types::Polygon::try_from(
            Wkt::<f64>::from_str("POLYGON ((0 0, 4 0, 4 3, 0 3, 0 0))").expect("Failed to load WKT"),
        )
        .expect("Failed to load box");
        let poly = Polygon::try_from(geo_poly).expect("Closed ring should convert");
        assert_eq!(poly.len(), 4);
        assert_eq!(poly.points()[3], Point::new(0.0, 3.0).unwrap());
        assert!((poly.signed_area() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_wkt_with_hole() {
        let geo_poly: geo_types::Polygon<f64> = geo_types::Polygon::try_from(
            Wkt::<f64>::from_str(
                "POLYGON ((350 100, 450 450, 150 400, 100 200, 350 100), (200 300, 350 350, 300 200, 200 300))",
            )
            .expect("Failed to load WKT"),
        )
        .expect("Failed to load polygon");
        assert_eq!(
            Polygon::try_from(geo_poly),
            Err(GeometryError::UnsupportedHoles(1))
        );
    }

    #[test]
    fn test_clockwise_area_is_negative() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
        assert!(poly.signed_area() < 0.0);
        assert_eq!(
            format!("{:?}", poly),
            "Polygon::from_coords(&[(0, 0), (0, 1), (1, 1), (1, 0)])"
        );
    }
}
