//! Combinatorial description of a polyhedron, decoupled from coordinates.

/// One face of a polyhedral topology.
///
/// `vertex_indices` lists the face's corners in an orientation such that the
/// right-hand rule yields the outward normal. `symmetry_s2` declares a
/// two-fold rotation axis perpendicular to the face plane; construction
/// verifies the claim.
#[derive(Clone, Debug)]
pub struct PolygonalTopology {
    pub vertex_indices: Vec<usize>,
    pub symmetry_s2: bool,
}

/// Face list plus body-level symmetry declaration.
///
/// If `symmetry_ci` is set, the body must be centrosymmetric with face k the
/// inversion image of face N-1-k; construction verifies the pairing.
#[derive(Clone, Debug)]
pub struct PolyhedralTopology {
    pub faces: Vec<PolygonalTopology>,
    pub symmetry_ci: bool,
}

impl PolyhedralTopology {
    /// Convenience constructor for the literal face tables of the shape
    /// catalog.
    pub fn new(faces: &[(&[usize], bool)], symmetry_ci: bool) -> Self {
        Self {
            faces: faces
                .iter()
                .map(|(indices, symmetry_s2)| PolygonalTopology {
                    vertex_indices: indices.to_vec(),
                    symmetry_s2: *symmetry_s2,
                })
                .collect(),
            symmetry_ci,
        }
    }
}
