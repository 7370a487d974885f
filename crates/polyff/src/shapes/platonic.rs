//! Platonic solids.

use crate::math::R3;
use crate::poly::{GeometryError, Polyhedron, PolyhedralTopology};

/// Face table of the regular tetrahedron.
pub fn tetrahedron_topology() -> PolyhedralTopology {
    PolyhedralTopology::new(
        &[
            (&[2, 1, 0], false),
            (&[0, 1, 3], false),
            (&[1, 2, 3], false),
            (&[2, 0, 3], false),
        ],
        false,
    )
}

/// Vertices of the regular tetrahedron with the given edge, centered at the
/// center of mass.
pub fn tetrahedron_vertices(edge: f64) -> Vec<R3> {
    let a = edge;
    let a_s = a / 2.0;
    let a_c = a / 3f64.sqrt() / 2.0;
    let a_h = a / 3f64.sqrt();
    let height = (2.0 / 3.0f64).sqrt() * edge;
    let zcom = height / 4.0;

    vec![
        R3::new(-a_c, a_s, -zcom),
        R3::new(-a_c, -a_s, -zcom),
        R3::new(a_h, 0.0, -zcom),
        R3::new(0.0, 0.0, height - zcom),
    ]
}

/// Regular tetrahedron with the given edge.
pub fn tetrahedron(edge: f64) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(&tetrahedron_topology(), &tetrahedron_vertices(edge))
}

/// Face table of the regular octahedron; centrosymmetric, faces paired for
/// inversion.
pub fn octahedron_topology() -> PolyhedralTopology {
    PolyhedralTopology::new(
        &[
            (&[0, 2, 1], false),
            (&[0, 3, 2], false),
            (&[0, 4, 3], false),
            (&[0, 1, 4], false),
            (&[2, 3, 5], false),
            (&[1, 2, 5], false),
            (&[4, 1, 5], false),
            (&[3, 4, 5], false),
        ],
        true,
    )
}

/// Vertices of the regular octahedron with the given edge.
pub fn octahedron_vertices(edge: f64) -> Vec<R3> {
    let a = edge / 2.0;
    let h = a * 2f64.sqrt();

    vec![
        R3::new(0.0, 0.0, -h),
        R3::new(-a, -a, 0.0),
        R3::new(a, -a, 0.0),
        R3::new(a, a, 0.0),
        R3::new(-a, a, 0.0),
        R3::new(0.0, 0.0, h),
    ]
}

/// Regular octahedron with the given edge.
pub fn octahedron(edge: f64) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(&octahedron_topology(), &octahedron_vertices(edge))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tetrahedron_volume() {
        let t = tetrahedron(1.0).unwrap();
        let reference = 2f64.sqrt() / 12.0;
        assert!((t.volume() - reference).abs() < 1e-15);
        t.assert_platonic().unwrap();
    }

    #[test]
    fn octahedron_volume() {
        let o = octahedron(1.0).unwrap();
        let reference = 2f64.sqrt() / 3.0;
        assert!((o.volume() - reference).abs() < 1e-15);
        o.assert_platonic().unwrap();
    }

    #[test]
    fn volumes_scale_cubically() {
        let v1 = octahedron(1.0).unwrap().volume();
        let v2 = octahedron(2.0).unwrap().volume();
        assert!((v2 - 8.0 * v1).abs() < 1e-13);
    }
}
