//! The polyhedral form-factor kernel.
//!
//! Layering, leaves first:
//! - [`Edge`]: a directed polygon edge with its moment integral.
//! - [`Face`]: a planar convex polygon; computes its contribution to the
//!   3D form factor and the 2D form factor of a prism base.
//! - [`Polyhedron`] and [`Prism`]: assemble faces, enforce the body-level
//!   invariants, and pick the series or analytic branch per evaluation.
//!
//! Construction validates all geometric invariants and fails loudly with a
//! [`GeometryError`]; evaluation can fail only with a [`NumericError`]
//! (series non-convergence, or a misused in-plane evaluation). Constructed
//! bodies are immutable.

mod cfg;
mod edge;
mod error;
mod face;
mod polyhedron;
mod prism;
mod topology;

pub use edge::Edge;
pub use error::{GeometryError, NumericError};
pub use face::Face;
pub use polyhedron::Polyhedron;
pub use prism::Prism;
pub use topology::{PolygonalTopology, PolyhedralTopology};
