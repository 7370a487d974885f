//! Shape catalog: literal `(topology, vertices)` tables for named bodies.
//!
//! Each shape comes as a triple of pure functions: a `*_topology()` with the
//! literal face table, a `*_vertices(params)` producing the vertex list, and
//! a convenience constructor assembling the [`Polyhedron`](crate::Polyhedron).
//! There is no shape hierarchy; a catalog entry is nothing but these tables.
//!
//! All bodies are centered so that the origin coincides with the center of
//! mass; symmetry flags in the topologies are exactly the ones the vertex
//! tables exhibit.

pub mod cuboid;
pub mod penta;
pub mod platonic;
pub mod tri;

pub use cuboid::{cube, pave};
pub use penta::{capped_pentagonal_prism, decahedron, elongated_decahedron, pentagonal_bifrustum};
pub use platonic::{octahedron, tetrahedron};
pub use tri::{elongated_triangular_bipyramid, triangular_bifrustum, triangular_bipyramid};
