use crate::errors::{GeometryError, TransformError};
use crate::geom::Point;
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};

/// Helper to create a scaling matrix
fn scale_matrix(sx: f64, sy: f64) -> Matrix3<f64> {
    Matrix3::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0)
}

/// Helper to create a translation matrix
fn translate_matrix(tx: f64, ty: f64) -> Matrix3<f64> {
    Matrix3::new(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0)
}

/// Standard mathematical orientation: positive radians turn +x towards +y.
fn rotate_matrix(radians: f64) -> Matrix3<f64> {
    let (sin, cos) = radians.sin_cos();
    Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0)
}

/// # Transform
///
/// An affine map over the plane. The six free entries follow the SVG
/// `matrix(a b c d e f)` layout:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
///
/// Every entry is finite; constructors that would break that return a
/// [`TransformError`]. Transforms chain left to right with [`Transform::then`],
/// so a shape can be built at the origin, scaled, rotated, and only then
/// moved into place:
///
/// ```rust
/// use scenelib::geom::Transform;
///
/// let placed = Transform::scale(2.0, 2.0)?
///     .then(&Transform::rotate(std::f64::consts::FRAC_PI_2)?)?
///     .then(&Transform::translate(10.0, 0.0)?)?;
/// let p = placed.apply(&scenelib::geom::pt(1.0, 0.0)?)?;
/// assert!((p.x() - 10.0).abs() < 1e-12 && (p.y() - 2.0).abs() < 1e-12);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    affine: Affine2<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}

impl Transform {
    /// Unit matrix. Basically a no-op
    pub fn identity() -> Transform {
        Transform {
            affine: Affine2::identity(),
        }
    }

    /// Build from SVG `matrix(a b c d e f)` entries.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<Transform, TransformError> {
        Transform::from_matrix(Matrix3::new(a, c, e, b, d, f, 0.0, 0.0, 1.0))
    }

    pub fn translate(tx: f64, ty: f64) -> Result<Transform, TransformError> {
        Transform::from_matrix(translate_matrix(tx, ty))
    }

    pub fn scale(sx: f64, sy: f64) -> Result<Transform, TransformError> {
        Transform::from_matrix(scale_matrix(sx, sy))
    }

    pub fn rotate(radians: f64) -> Result<Transform, TransformError> {
        Transform::from_matrix(rotate_matrix(radians))
    }

    fn from_matrix(matrix: Matrix3<f64>) -> Result<Transform, TransformError> {
        if matrix.iter().all(|v| v.is_finite()) {
            Ok(Transform {
                affine: Affine2::from_matrix_unchecked(matrix),
            })
        } else {
            Err(TransformError::NonFiniteEntry)
        }
    }

    /// Apply `self` first, then `next`.
    pub fn then(&self, next: &Transform) -> Result<Transform, TransformError> {
        Transform::from_matrix((next.affine * self.affine).into_inner())
    }

    /// The SVG `(a, b, c, d, e, f)` entries.
    pub fn entries(&self) -> [f64; 6] {
        let m = self.affine.matrix();
        [m[(0, 0)], m[(1, 0)], m[(0, 1)], m[(1, 1)], m[(0, 2)], m[(1, 2)]]
    }

    pub fn is_identity(&self) -> bool {
        self.affine == Affine2::identity()
    }

    /// Map raw coordinates. The result may overflow to infinity for extreme
    /// matrices; callers check it.
    pub fn apply_xy(&self, x: f64, y: f64) -> (f64, f64) {
        let out = self.affine * NPoint2::new(x, y);
        (out.x, out.y)
    }

    /// Map a point, failing if the result is no longer finite.
    pub fn apply(&self, point: &Point) -> Result<Point, GeometryError> {
        let (x, y) = self.apply_xy(point.x(), point.y());
        Point::new(x, y)
    }
}
