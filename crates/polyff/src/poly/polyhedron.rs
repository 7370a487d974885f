//! A closed convex polyhedron and its form factor.

use num_complex::Complex64;

use crate::math::{mul_i, C3, R3};

use super::cfg::{EPS, N_LIMIT_SERIES, Q_LIMIT_SERIES};
use super::error::{GeometryError, NumericError};
use super::face::Face;
use super::topology::PolyhedralTopology;

/// A polyhedron assembled from oriented faces.
///
/// Immutable after construction. If the topology declared inversion symmetry,
/// only the first half of the faces is stored; each stored face then also
/// stands in for its inversion image during evaluation.
#[derive(Clone, Debug)]
pub struct Polyhedron {
    sym_ci: bool,
    faces: Vec<Face>,
    /// Radius of the enclosing sphere.
    radius: f64,
    volume: f64,
}

impl Polyhedron {
    /// Builds a polyhedron from a topology and a vertex list.
    ///
    /// Ridiculously small faces (diameter below `1e-14` of the body
    /// diameter) are dropped; at least four faces must remain. With
    /// `symmetry_ci` declared, face k must be the inversion image of face
    /// N-1-k; the pairing is verified and the redundant half discarded.
    pub fn try_new(
        topology: &PolyhedralTopology,
        vertices: &[R3],
    ) -> Result<Self, GeometryError> {
        let mut diameter: f64 = 0.0;
        for j in 0..vertices.len() {
            for jj in j + 1..vertices.len() {
                diameter = diameter.max((vertices[j] - vertices[jj]).norm());
            }
        }

        let mut faces = Vec::with_capacity(topology.faces.len());
        for face_topology in &topology.faces {
            let mut corners = Vec::with_capacity(face_topology.vertex_indices.len());
            for &index in &face_topology.vertex_indices {
                corners.push(*vertices.get(index).ok_or(
                    GeometryError::VertexIndexOutOfRange {
                        index,
                        count: vertices.len(),
                    },
                )?);
            }
            if Face::diameter(&corners) <= 1e-14 * diameter {
                continue;
            }
            faces.push(Face::try_new(&corners, face_topology.symmetry_s2)?);
        }
        if faces.len() < 4 {
            return Err(GeometryError::TooFewFaces { count: faces.len() });
        }

        let mut radius: f64 = 0.0;
        let mut volume = 0.0;
        for face in &faces {
            radius = radius.max(face.radius_3d());
            volume += face.pyramidal_volume();
        }

        if topology.symmetry_ci {
            if faces.len() & 1 == 1 {
                return Err(GeometryError::OddFaceCountCi { count: faces.len() });
            }
            let half = faces.len() / 2;
            // the pairing test relies on the face order of the topology
            for k in 0..half {
                faces[k].assert_ci(&faces[2 * half - 1 - k])?;
            }
            faces.truncate(half);
        }

        Ok(Self {
            sym_ci: topology.symmetry_ci,
            faces,
            radius,
            volume,
        })
    }

    /// Volume of the body.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Radius of the enclosing sphere.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Checks that all faces subtend the same pyramidal volume, as they must
    /// for a platonic solid centered at the origin.
    pub fn assert_platonic(&self) -> Result<(), GeometryError> {
        let mean = self
            .faces
            .iter()
            .map(Face::pyramidal_volume)
            .sum::<f64>()
            / self.faces.len() as f64;
        for face in &self.faces {
            if (face.pyramidal_volume() - mean).abs() > 160.0 * EPS * mean {
                return Err(GeometryError::NotPlatonic);
            }
        }
        Ok(())
    }

    /// The form factor F(q), with the body centered at the origin.
    ///
    /// Below the reduced-momentum threshold the value comes from a power
    /// series around F(0) = volume; above it from the closed-form edge sums
    /// of the faces. Fails only if a series does not converge.
    pub fn formfactor(&self, q: &C3) -> Result<Complex64, NumericError> {
        #[cfg(feature = "diagnosis")]
        crate::diagnosis::reset();
        let q_red = self.radius * q.norm();
        if q_red == 0.0 {
            return Ok(Complex64::from(self.volume));
        }
        if q_red < Q_LIMIT_SERIES {
            #[cfg(feature = "diagnosis")]
            crate::diagnosis::note_algo(crate::diagnosis::algo::BODY_SERIES);
            let mut sum = Complex64::new(0.0, 0.0);
            let sign = if self.sym_ci { -2.0 } else { -1.0 };
            let mut n_fac = Complex64::from(sign / q.norm_squared());
            let mut streak = 0;
            for n in 2..N_LIMIT_SERIES {
                // for a centrosymmetric body the odd orders vanish; they are
                // skipped without touching n_fac, whose sign flip after each
                // even order absorbs the collapsed i^n pattern
                if self.sym_ci && n & 1 == 1 {
                    continue;
                }
                #[cfg(feature = "diagnosis")]
                crate::diagnosis::note_order(n as u32);
                let mut term = Complex64::new(0.0, 0.0);
                for face in &self.faces {
                    term += face.ff_n(n + 1, q);
                }
                term *= n_fac;
                sum += term;
                if term.norm() <= EPS * sum.norm() || sum.norm() < EPS * self.volume {
                    streak += 1;
                } else {
                    streak = 0;
                }
                if streak > 2 {
                    return Ok(self.volume + sum);
                }
                n_fac = if self.sym_ci { -n_fac } else { mul_i(n_fac) };
            }
            return Err(NumericError::BodySeriesDiverged);
        }
        #[cfg(feature = "diagnosis")]
        crate::diagnosis::note_algo(crate::diagnosis::algo::BODY_ANALYTIC);
        let mut sum = Complex64::new(0.0, 0.0);
        for face in &self.faces {
            let qn = face.normal_projection_conj(q);
            if qn.norm() < EPS * q.norm() {
                continue;
            }
            sum += qn * face.ff(q, self.sym_ci)?;
        }
        Ok(sum / mul_i(Complex64::from(q.norm_squared())))
    }
}
