//! Trigonal shapes: bipyramids and bifrusta over a triangular base.

use crate::math::R3;
use crate::poly::{GeometryError, Polyhedron, PolyhedralTopology};

fn bipyramid_topology() -> PolyhedralTopology {
    PolyhedralTopology::new(
        &[
            (&[0, 1, 3], false),
            (&[1, 2, 3], false),
            (&[2, 0, 3], false),
            (&[1, 0, 4], false),
            (&[2, 1, 4], false),
            (&[0, 2, 4], false),
        ],
        false,
    )
}

/// Face table of the triangular bipyramid.
pub fn triangular_bipyramid_topology() -> PolyhedralTopology {
    bipyramid_topology()
}

/// Vertices of the regular triangular bipyramid with the given edge of the
/// base triangle.
pub fn triangular_bipyramid_vertices(edge: f64) -> Vec<R3> {
    let a = edge / 3f64.sqrt();
    let x = a / 2.0;
    let y = 3f64.sqrt() * a / 2.0;
    let h = 2f64.sqrt() * a;

    vec![
        R3::new(-x, y, 0.0),
        R3::new(-x, -y, 0.0),
        R3::new(a, 0.0, 0.0),
        R3::new(0.0, 0.0, h),
        R3::new(0.0, 0.0, -h),
    ]
}

/// Regular triangular bipyramid with the given edge.
pub fn triangular_bipyramid(edge: f64) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(
        &triangular_bipyramid_topology(),
        &triangular_bipyramid_vertices(edge),
    )
}

/// Face table of the elongated triangular bipyramid.
pub fn elongated_triangular_bipyramid_topology() -> PolyhedralTopology {
    bipyramid_topology()
}

/// Vertices of the triangular bipyramid with independent apex height.
pub fn elongated_triangular_bipyramid_vertices(edge: f64, height: f64) -> Vec<R3> {
    let a = edge / 3f64.sqrt();
    let x = a / 2.0;
    let y = 3f64.sqrt() * a / 2.0;
    let h = height;

    vec![
        R3::new(-x, y, 0.0),
        R3::new(-x, -y, 0.0),
        R3::new(a, 0.0, 0.0),
        R3::new(0.0, 0.0, h),
        R3::new(0.0, 0.0, -h),
    ]
}

/// Triangular bipyramid with independent apex height.
pub fn elongated_triangular_bipyramid(
    edge: f64,
    height: f64,
) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(
        &elongated_triangular_bipyramid_topology(),
        &elongated_triangular_bipyramid_vertices(edge, height),
    )
}

/// Face table of the triangular bifrustum.
pub fn triangular_bifrustum_topology() -> PolyhedralTopology {
    PolyhedralTopology::new(
        &[
            (&[0, 1, 4, 3], false),
            (&[1, 2, 5, 4], false),
            (&[2, 0, 3, 5], false),
            (&[1, 0, 6, 7], false),
            (&[2, 1, 7, 8], false),
            (&[0, 2, 8, 6], false),
            (&[3, 4, 5], false),
            (&[7, 6, 8], false),
        ],
        false,
    )
}

/// Vertices of the triangular bifrustum: a bipyramid of the given edge and
/// total half-height, truncated at the fraction `trunc` (in (0,1)) of the
/// apex height.
pub fn triangular_bifrustum_vertices(edge: f64, height: f64, trunc: f64) -> Vec<R3> {
    let a = edge / 3f64.sqrt();
    let z = trunc;
    let x = 0.5 * a;
    let y = 3f64.sqrt() * a / 2.0;
    let h = height;

    vec![
        // middle plane
        R3::new(-x, y, 0.0),
        R3::new(-x, -y, 0.0),
        R3::new(a, 0.0, 0.0),
        // top plane
        R3::new(-x * (1.0 - z), y * (1.0 - z), z * h),
        R3::new(-x * (1.0 - z), -y * (1.0 - z), z * h),
        R3::new((1.0 - z) * a, 0.0, z * h),
        // bottom plane
        R3::new(-x * (1.0 - z), y * (1.0 - z), -z * h),
        R3::new(-x * (1.0 - z), -y * (1.0 - z), -z * h),
        R3::new((1.0 - z) * a, 0.0, -z * h),
    ]
}

/// Triangular bifrustum.
pub fn triangular_bifrustum(
    edge: f64,
    height: f64,
    trunc: f64,
) -> Result<Polyhedron, GeometryError> {
    Polyhedron::try_new(
        &triangular_bifrustum_topology(),
        &triangular_bifrustum_vertices(edge, height, trunc),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bipyramid_volume_is_twice_the_tetrahedral_cone() {
        let b = triangular_bipyramid(1.0).unwrap();
        // base triangle area √3/4, apex height √2/√3
        let base_area = 3f64.sqrt() / 4.0;
        let apex = (2f64 / 3.0).sqrt();
        let reference = 2.0 * base_area * apex / 3.0;
        assert!((b.volume() - reference).abs() < 1e-14);
    }

    #[test]
    fn bifrustum_volume_approaches_bipyramid() {
        let full = elongated_triangular_bipyramid(1.0, 0.8).unwrap();
        let cut = triangular_bifrustum(1.0, 0.8, 0.999).unwrap();
        assert!(cut.volume() < full.volume());
        assert!((cut.volume() - full.volume()).abs() < 1e-2 * full.volume());
    }
}
