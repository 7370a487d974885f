//! Cuboids: cube and rectangular pave.
//!
//! Every face of a cuboid has a two-fold axis, so all faces carry the S2
//! flag. The face list is not inversion-ordered, hence no Ci declaration.

use crate::math::R3;
use crate::poly::{GeometryError, Polyhedron, PolyhedralTopology};

fn cuboid_topology() -> PolyhedralTopology {
    PolyhedralTopology::new(
        &[
            (&[3, 2, 1, 0], true),
            (&[1, 2, 6, 5], true),
            (&[0, 1, 5, 4], true),
            (&[3, 0, 4, 7], true),
            (&[2, 3, 7, 6], true),
            (&[4, 5, 6, 7], true),
        ],
        false,
    )
}

/// Face table of the cube.
pub fn cube_topology() -> PolyhedralTopology {
    cuboid_topology()
}

/// Vertices of the cube with the given edge, centered at the origin.
pub fn cube_vertices(edge: f64) -> Vec<R3> {
    let a = edge / 2.0;
    vec![
        R3::new(a, -a, -a),
        R3::new(a, a, -a),
        R3::new(-a, a, -a),
        R3::new(-a, -a, -a),
        R3::new(a, -a, a),
        R3::new(a, a, a),
        R3::new(-a, a, a),
        R3::new(-a, -a, a),
    ]
}

/// Cube with the given edge.
pub fn cube(edge: f64) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(&cube_topology(), &cube_vertices(edge))
}

/// Face table of the rectangular pave.
pub fn pave_topology() -> PolyhedralTopology {
    cuboid_topology()
}

/// Vertices of the rectangular pave with the given edges, centered at the
/// origin.
pub fn pave_vertices(edge_a: f64, edge_b: f64, edge_c: f64) -> Vec<R3> {
    let a = edge_a / 2.0;
    let b = edge_b / 2.0;
    let c = edge_c / 2.0;
    vec![
        R3::new(a, -b, -c),
        R3::new(a, b, -c),
        R3::new(-a, b, -c),
        R3::new(-a, -b, -c),
        R3::new(a, -b, c),
        R3::new(a, b, c),
        R3::new(-a, b, c),
        R3::new(-a, -b, c),
    ]
}

/// Rectangular pave with the given edges.
pub fn pave(edge_a: f64, edge_b: f64, edge_c: f64) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(&pave_topology(), &pave_vertices(edge_a, edge_b, edge_c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_volume_and_radius() {
        let c = cube(2.0).unwrap();
        assert!((c.volume() - 8.0).abs() < 1e-13);
        assert!((c.radius() - 3f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn pave_volume() {
        let p = pave(1.0, 2.0, 3.0).unwrap();
        assert!((p.volume() - 6.0).abs() < 1e-13);
    }
}
