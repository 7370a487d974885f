//! Pentagonal shapes: decahedra, bifrustum, capped prism.
//!
//! The pentagon constants are fixed literals shared by all entries:
//! `COEFF` is the circumradius of the unit-edge pentagon, the others are
//! cos/sin of 72° and 144°.

use crate::math::R3;
use crate::poly::{GeometryError, Polyhedron, PolyhedralTopology};

const COEFF: f64 = 0.8506508083520399;
const C5: f64 = 0.30901699437494745;
const S5: f64 = 0.9510565162951535;
const C25: f64 = -0.8090169943749475;
const S25: f64 = 0.5877852522924731;

/// The five corners of a pentagon with circumradius `a`, at height `z`.
fn pentagon_ring(a: f64, z: f64) -> [R3; 5] {
    [
        R3::new(a, 0.0, z),
        R3::new(a * C5, a * S5, z),
        R3::new(a * C25, a * S25, z),
        R3::new(a * C25, -a * S25, z),
        R3::new(a * C5, -a * S5, z),
    ]
}

fn decahedron_topology_impl() -> PolyhedralTopology {
    PolyhedralTopology::new(
        &[
            (&[0, 1, 5], false),
            (&[1, 2, 5], false),
            (&[2, 3, 5], false),
            (&[3, 4, 5], false),
            (&[4, 0, 5], false),
            (&[1, 0, 6], false),
            (&[2, 1, 6], false),
            (&[3, 2, 6], false),
            (&[4, 3, 6], false),
            (&[0, 4, 6], false),
        ],
        false,
    )
}

/// Face table of the regular decahedron (pentagonal bipyramid).
pub fn decahedron_topology() -> PolyhedralTopology {
    decahedron_topology_impl()
}

/// Vertices of the regular decahedron with the given edge. The apex height
/// `edge·sqrt(1 - COEFF²)` makes all ten faces equilateral.
pub fn decahedron_vertices(edge: f64) -> Vec<R3> {
    let a = edge * COEFF;
    let height = edge * (1.0 - COEFF * COEFF).sqrt();

    let mut v = pentagon_ring(a, 0.0).to_vec();
    v.push(R3::new(0.0, 0.0, height));
    v.push(R3::new(0.0, 0.0, -height));
    v
}

/// Regular decahedron with the given edge.
pub fn decahedron(edge: f64) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(&decahedron_topology(), &decahedron_vertices(edge))
}

/// Face table of the elongated decahedron.
pub fn elongated_decahedron_topology() -> PolyhedralTopology {
    decahedron_topology_impl()
}

/// Vertices of the decahedron with independent apex height.
pub fn elongated_decahedron_vertices(edge: f64, height: f64) -> Vec<R3> {
    let a = edge * COEFF;
    let mut v = pentagon_ring(a, 0.0).to_vec();
    v.push(R3::new(0.0, 0.0, height));
    v.push(R3::new(0.0, 0.0, -height));
    v
}

/// Decahedron with independent apex height.
pub fn elongated_decahedron(edge: f64, height: f64) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(
        &elongated_decahedron_topology(),
        &elongated_decahedron_vertices(edge, height),
    )
}

/// Face table of the pentagonal bifrustum.
pub fn pentagonal_bifrustum_topology() -> PolyhedralTopology {
    PolyhedralTopology::new(
        &[
            // top face
            (&[5, 6, 7, 8, 9], false),
            // upper row
            (&[0, 1, 6, 5], false),
            (&[1, 2, 7, 6], false),
            (&[2, 3, 8, 7], false),
            (&[3, 4, 9, 8], false),
            (&[4, 0, 5, 9], false),
            // lower row
            (&[1, 0, 10, 11], false),
            (&[2, 1, 11, 12], false),
            (&[3, 2, 12, 13], false),
            (&[4, 3, 13, 14], false),
            (&[0, 4, 14, 10], false),
            // bottom face
            (&[14, 13, 12, 11, 10], false),
        ],
        false,
    )
}

/// Vertices of the pentagonal bifrustum: a bipyramid of the given edge and
/// apex height, truncated at the fraction `trunc` (in (0,1)).
pub fn pentagonal_bifrustum_vertices(edge: f64, height: f64, trunc: f64) -> Vec<R3> {
    let a = edge * COEFF;
    let z = trunc;
    let h = height;

    let mut v = pentagon_ring(a, 0.0).to_vec();
    v.extend(pentagon_ring(a * (1.0 - z), z * h));
    v.extend(pentagon_ring(a * (1.0 - z), -z * h));
    v
}

/// Pentagonal bifrustum.
pub fn pentagonal_bifrustum(
    edge: f64,
    height: f64,
    trunc: f64,
) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(
        &pentagonal_bifrustum_topology(),
        &pentagonal_bifrustum_vertices(edge, height, trunc),
    )
}

/// Face table of the capped pentagonal prism (nanorod). The prism mantle
/// faces are rectangles and carry the S2 flag.
pub fn capped_pentagonal_prism_topology() -> PolyhedralTopology {
    PolyhedralTopology::new(
        &[
            // top pyramid
            (&[0, 1, 10], false),
            (&[1, 2, 10], false),
            (&[2, 3, 10], false),
            (&[3, 4, 10], false),
            (&[4, 0, 10], false),
            // central prism
            (&[5, 6, 1, 0], true),
            (&[6, 7, 2, 1], true),
            (&[7, 8, 3, 2], true),
            (&[8, 9, 4, 3], true),
            (&[9, 5, 0, 4], true),
            // bottom pyramid
            (&[6, 5, 11], false),
            (&[7, 6, 11], false),
            (&[8, 7, 11], false),
            (&[9, 8, 11], false),
            (&[5, 9, 11], false),
        ],
        false,
    )
}

/// Vertices of the capped pentagonal prism: prism length `height`, pyramid
/// caps of height `capsize` on both ends.
pub fn capped_pentagonal_prism_vertices(edge: f64, height: f64, capsize: f64) -> Vec<R3> {
    let a = edge * COEFF;
    let z = capsize;
    let h = height / 2.0;

    let mut v = pentagon_ring(a, h).to_vec();
    v.extend(pentagon_ring(a, -h));
    v.push(R3::new(0.0, 0.0, h + z));
    v.push(R3::new(0.0, 0.0, -h - z));
    v
}

/// Capped pentagonal prism.
pub fn capped_pentagonal_prism(
    edge: f64,
    height: f64,
    capsize: f64,
) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(
        &capped_pentagonal_prism_topology(),
        &capped_pentagonal_prism_vertices(edge, height, capsize),
    )
}
