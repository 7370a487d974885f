//! Scattering form factors of convex polyhedra and prisms.
//!
//! The form factor of a body P is the Fourier transform of its characteristic
//! function,
//!
//! ```text
//!     F(q) = ∫_P exp(i q·r) dV,
//! ```
//!
//! evaluated here for convex polyhedra given as oriented vertex rings, and for
//! prisms (extruded planar polygons). The kernel stays numerically stable
//! across roughly fifteen orders of magnitude in |q| by switching between a
//! convergent power series at small reduced |q| and a closed-form sum over
//! face edges at large reduced |q|, and by exploiting declared point-group
//! symmetries (a two-fold axis per face, inversion symmetry per body).
//!
//! Evaluation is pure: a [`Polyhedron`] or [`Prism`] is immutable once
//! constructed and may be evaluated from many threads concurrently; repeated
//! evaluations at the same q return bitwise-identical results.

pub mod factorial;
pub mod math;
pub mod poly;
pub mod shapes;

#[cfg(feature = "diagnosis")]
pub mod diagnosis;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use math::{Complex64, C3, R3};
pub use poly::{
    Edge, Face, GeometryError, NumericError, Polyhedron, PolygonalTopology, PolyhedralTopology,
    Prism,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::math::{exp_i, mul_i, sinc, to_c3, Complex64, C3, R3, I};
    pub use crate::poly::{
        Face, GeometryError, NumericError, Polyhedron, PolygonalTopology, PolyhedralTopology,
        Prism,
    };
    pub use crate::shapes;
}
