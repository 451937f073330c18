//! Canonical shape builders. Every shape winds counter-clockwise (y up) and
//! starts from a fixed vertex, so equal parameters always give equal polygons.
use crate::errors::GeometryError;
use crate::geom::{Point, Polygon};
use num_traits::FromPrimitive;
use std::f64::consts::PI;

/// Axis aligned square with its bottom-left corner on the origin:
/// (0,0), (side,0), (side,side), (0,side).
pub fn square(side: f64) -> Result<Polygon, GeometryError> {
    rect(side, side)
}

/// `square(1.0)`, which can't fail.
pub fn unit_square() -> Polygon {
    corners(1.0, 1.0)
}

/// Same layout as [`square`], stretched to `width` by `height`.
pub fn rect(width: f64, height: f64) -> Result<Polygon, GeometryError> {
    if !(width.is_finite() && width > 0.0) {
        return Err(GeometryError::InvalidParameter("width must be positive and finite"));
    }
    if !(height.is_finite() && height > 0.0) {
        return Err(GeometryError::InvalidParameter("height must be positive and finite"));
    }
    Ok(corners(width, height))
}

fn corners(width: f64, height: f64) -> Polygon {
    Polygon::new_unchecked(vec![
        Point::new_unchecked(0.0, 0.0),
        Point::new_unchecked(width, 0.0),
        Point::new_unchecked(width, height),
        Point::new_unchecked(0.0, height),
    ])
}

/// Regular polygon centred on the origin. Uses regular mathematical
/// orientation: the first vertex sits at `radians`, the rest follow
/// counter-clockwise.
pub fn regular_poly(sides: usize, radius: f64, radians: f64) -> Result<Polygon, GeometryError> {
    if sides < 3 {
        return Err(GeometryError::TooFewPoints(sides));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::InvalidParameter("radius must be positive and finite"));
    }
    if !radians.is_finite() {
        return Err(GeometryError::InvalidParameter("rotation must be finite"));
    }
    let points = (0..sides)
        .map(|i| {
            let angle = radians + (i as f64 / sides as f64) * (2.0 * PI);
            Point::new_unchecked(angle.cos() * radius, angle.sin() * radius)
        })
        .collect();
    // Huge side counts on a tiny radius can round neighbours together.
    Polygon::new(points)
}

/// Draw a regular polygon with enough sides that nobody can tell the difference.
pub fn circle(radius: f64) -> Result<Polygon, GeometryError> {
    let radius = radius.abs();
    let sides = 1000.min(32.max(usize::from_f64(radius).unwrap_or(1000).saturating_mul(4)));
    regular_poly(sides, radius, 0.0)
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::Winding;

    #[test]
    fn test_unit_square_layout() {
        let square = square(1.0).unwrap();
        let coords: Vec<(f64, f64)> = square.points().iter().map(|&p| p.into()).collect();
        assert_eq!(coords, vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(square, unit_square());
    }

    #[test]
    fn test_square_is_deterministic() {
        assert_eq!(square(1.0).unwrap().points(), square(1.0).unwrap().points());
    }

    #[test]
    fn test_bad_parameters() {
        assert!(square(0.0).is_err());
        assert!(square(-2.0).is_err());
        assert!(square(f64::NAN).is_err());
        assert!(rect(2.0, f64::INFINITY).is_err());
        assert_eq!(regular_poly(2, 1.0, 0.0), Err(GeometryError::TooFewPoints(2)));
        assert!(regular_poly(5, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_shapes_wind_ccw() {
        for poly in [
            square(3.0).unwrap(),
            rect(2.0, 5.0).unwrap(),
            regular_poly(3, 1.0, 0.0).unwrap(),
            regular_poly(7, 4.0, 1.0).unwrap(),
            circle(10.0).unwrap(),
        ] {
            assert!(poly.to_geo().exterior().is_ccw(), "{:?} is not ccw", poly);
            assert!(poly.signed_area() > 0.0);
        }
    }

    #[test]
    fn test_angles_use_full_side_count() {
        let sides = 1usize << 20;
        let poly = regular_poly(sides, 1e9, 0.0).unwrap();
        assert_eq!(poly.len(), sides);
        let step = poly.points()[1];
        let angle = 2.0 * PI / sides as f64;
        assert!((step.x() - angle.cos() * 1e9).abs() < 1e-3);
        assert!((step.y() - angle.sin() * 1e9).abs() < 1e-3);
    }

    #[test]
    fn test_circle_side_count() {
        assert_eq!(circle(1.0).unwrap().len(), 32);
        assert_eq!(circle(20.0).unwrap().len(), 80);
        assert_eq!(circle(-20.0).unwrap().len(), 80);
        assert_eq!(circle(5000.0).unwrap().len(), 1000);
        let first = circle(2.0).unwrap().points()[0];
        assert_eq!((first.x(), first.y()), (2.0, 0.0));
    }
}
