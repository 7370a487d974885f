//! Errors surfaced by construction and evaluation.

use std::error::Error;
use std::fmt;

/// Invalid input geometry, reported at construction. Not recoverable by
/// retrying with the same input.
#[derive(Debug)]
pub enum GeometryError {
    /// A face was given with no vertices at all.
    NoVertices,
    /// A face was given with fewer than three vertices.
    TooFewVertices { count: usize },
    /// Two consecutive vertices coincide exactly.
    ZeroLengthEdge,
    /// After dropping near-degenerate edges, fewer than three remain.
    TooFewEdges { count: usize },
    /// Two adjacent edges of a face are parallel.
    ParallelEdges,
    /// A face's vertices do not lie in a common plane.
    NotPlanar,
    /// A face declared a two-fold axis but has an odd number of edges.
    OddEdgeCountS2 { count: usize },
    /// Edge midpoints are not pairwise inverted through the face center.
    EdgeCentersViolateS2,
    /// Edge vectors are not pairwise inverted through the face center.
    EdgeVectorsViolateS2,
    /// A face topology refers to a vertex that was not supplied.
    VertexIndexOutOfRange { index: usize, count: usize },
    /// Fewer than four non-vanishing faces remain.
    TooFewFaces { count: usize },
    /// Inversion symmetry was declared on an odd number of faces.
    OddFaceCountCi { count: usize },
    /// Paired faces sit at different distances from the origin.
    CiDistanceMismatch,
    /// Paired faces have different areas.
    CiAreaMismatch,
    /// Paired faces do not have opposite orientation.
    CiOrientationMismatch,
    /// `assert_platonic` found pyramidal volumes that are not uniform.
    NotPlatonic,
    /// A prism was given a non-positive height.
    NonPositiveHeight { height: f64 },
    /// Error raised while constructing a prism base.
    Prism(Box<GeometryError>),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NoVertices => write!(f, "face has no vertices"),
            GeometryError::TooFewVertices { count } => {
                write!(f, "face has only {count} vertices, need at least three")
            }
            GeometryError::ZeroLengthEdge => write!(f, "at least one edge has zero length"),
            GeometryError::TooFewEdges { count } => {
                write!(f, "face has only {count} non-vanishing edges, need at least three")
            }
            GeometryError::ParallelEdges => {
                write!(f, "two adjacent edges of a face are parallel")
            }
            GeometryError::NotPlanar => write!(f, "face vertices are not coplanar"),
            GeometryError::OddEdgeCountS2 { count } => {
                write!(f, "odd edge count {count} violates the declared symmetry S2")
            }
            GeometryError::EdgeCentersViolateS2 => {
                write!(f, "edge centers violate the declared symmetry S2")
            }
            GeometryError::EdgeVectorsViolateS2 => {
                write!(f, "edge vectors violate the declared symmetry S2")
            }
            GeometryError::VertexIndexOutOfRange { index, count } => {
                write!(f, "vertex index {index} out of range, only {count} vertices given")
            }
            GeometryError::TooFewFaces { count } => {
                write!(f, "polyhedron has only {count} non-vanishing faces, need at least four")
            }
            GeometryError::OddFaceCountCi { count } => {
                write!(f, "odd face count {count} violates the declared symmetry Ci")
            }
            GeometryError::CiDistanceMismatch => write!(
                f,
                "faces at different distances from the origin violate the declared symmetry Ci"
            ),
            GeometryError::CiAreaMismatch => {
                write!(f, "faces with different areas violate the declared symmetry Ci")
            }
            GeometryError::CiOrientationMismatch => write!(
                f,
                "faces without opposite orientation violate the declared symmetry Ci"
            ),
            GeometryError::NotPlatonic => {
                write!(f, "declared platonic but pyramidal volumes are not uniform")
            }
            GeometryError::NonPositiveHeight { height } => {
                write!(f, "prism height {height} is not positive")
            }
            GeometryError::Prism(inner) => write!(f, "prism: {inner}"),
        }
    }
}

impl Error for GeometryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GeometryError::Prism(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Numeric failure or misuse, reported at evaluation.
#[derive(Debug)]
pub enum NumericError {
    /// A face-level series expansion did not converge within the term limit.
    FaceSeriesDiverged,
    /// The body-level series expansion did not converge within the term limit.
    BodySeriesDiverged,
    /// The in-plane form factor was called with an out-of-plane wavevector.
    OutOfPlaneQ,
    /// Error raised while evaluating a prism.
    Prism(Box<NumericError>),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::FaceSeriesDiverged => {
                write!(f, "face form-factor series did not converge")
            }
            NumericError::BodySeriesDiverged => {
                write!(f, "polyhedron form-factor series did not converge")
            }
            NumericError::OutOfPlaneQ => write!(
                f,
                "2D form factor called with a wavevector that has an out-of-plane component"
            ),
            NumericError::Prism(inner) => write!(f, "prism: {inner}"),
        }
    }
}

impl Error for NumericError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NumericError::Prism(inner) => Some(inner),
            _ => None,
        }
    }
}
