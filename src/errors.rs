use std::fmt;

/// Raised when geometry is rejected, either while building a [`crate::geom::Point`]
/// or [`crate::geom::Polygon`], or when compiling a scene produces a coordinate
/// that is no longer finite.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polygon needs at least three vertices.
    TooFewPoints(usize),
    /// Vertex `index` and the one after it (wrapping) are the same point.
    ZeroLengthEdge(usize),
    /// A coordinate was NaN or infinite.
    NonFiniteCoordinate,
    /// Source polygon had interior rings, which a plot subpath can't express.
    UnsupportedHoles(usize),
    /// A builder was given a parameter it can't build a valid polygon from.
    InvalidParameter(&'static str),
    /// Transforming scene entry `entry` overflowed to a non-finite coordinate.
    NonFiniteResult { entry: usize },
}

impl std::error::Error for GeometryError {}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeometryError::TooFewPoints(count) => {
                write!(f, "Polygon needs at least 3 points, got {}", count)
            }
            GeometryError::ZeroLengthEdge(index) => {
                write!(f, "Zero length edge starting at vertex {}", index)
            }
            GeometryError::NonFiniteCoordinate => write!(f, "Coordinate is NaN or infinite"),
            GeometryError::UnsupportedHoles(count) => {
                write!(f, "Polygon has {} interior ring(s), holes are not supported", count)
            }
            GeometryError::InvalidParameter(msg) => write!(f, "Invalid shape parameter: {}", msg),
            GeometryError::NonFiniteResult { entry } => write!(
                f,
                "Transforming scene entry {} produced a non-finite coordinate",
                entry
            ),
        }
    }
}

// Lets `Scene::add_poly` accept an already validated `Polygon`, whose
// identity conversion can't fail.
impl From<std::convert::Infallible> for GeometryError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Raised when an affine transform would contain a non-finite matrix entry.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    NonFiniteEntry,
}

impl std::error::Error for TransformError {}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransformError::NonFiniteEntry => write!(f, "Transform matrix has a non-finite entry"),
        }
    }
}

/// Errors from reading SVG path data back into draw commands. Offsets are
/// byte positions in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum PathParseError {
    UnexpectedCharacter(char, usize),
    UnsupportedCommand(char, usize),
    ExpectedNumber(usize),
    InvalidNumber(String, usize),
    MissingCommand(usize),
    NonFiniteCoordinate(usize),
}

impl std::error::Error for PathParseError {}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathParseError::UnexpectedCharacter(c, at) => {
                write!(f, "Unexpected character '{}' at {}", c, at)
            }
            PathParseError::UnsupportedCommand(c, at) => {
                write!(f, "Unsupported path command '{}' at {}", c, at)
            }
            PathParseError::ExpectedNumber(at) => write!(f, "Expected a number at {}", at),
            PathParseError::InvalidNumber(text, at) => {
                write!(f, "Invalid number '{}' at {}", text, at)
            }
            PathParseError::MissingCommand(at) => {
                write!(f, "Coordinates at {} are not preceded by a command", at)
            }
            PathParseError::NonFiniteCoordinate(at) => {
                write!(f, "Coordinate at {} is not finite", at)
            }
        }
    }
}

#[derive(Debug)]
pub enum SvgCreationError {
    NullGeometry,
}

impl std::error::Error for SvgCreationError {}

impl fmt::Display for SvgCreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SvgCreationError::NullGeometry => write!(f, "Empty/Invalid/Dimensionless geometry"),
        }
    }
}
