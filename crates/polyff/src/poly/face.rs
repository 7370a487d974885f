//! A planar convex polygon and its form-factor contributions.
//!
//! A `Face` carries everything the kernel needs about one polygon: its
//! directed edges, averaged unit normal, signed distance from the origin,
//! enclosing 2D/3D radii, and signed area. On top of that it implements the
//! three evaluation entry points:
//! - `ff_n`: one term of the body-level power series,
//! - `ff`: the face's contribution to the 3D form factor,
//! - `ff_2d`: the 2D form factor of the polygon, for use as a prism base.
//!
//! Small reduced in-plane momentum is handled by a power series over edge
//! moment integrals; everything else by a closed-form sum over the edges.

use num_complex::Complex64;

use crate::factorial::rf;
use crate::math::{cross_rc, dot_cr, dot_rc, exp_i, mul_i, sinc, C3, R3, I};

use super::cfg::{EPS, N_LIMIT_SERIES, QPA_LIMIT_SERIES};
use super::edge::Edge;
use super::error::{GeometryError, NumericError};

/// A planar polygon, derived from an oriented vertex ring.
#[derive(Clone, Debug)]
pub struct Face {
    /// Two-fold rotation axis perpendicular to the plane; if set, only the
    /// first half of the edges is stored and the other half is implied by
    /// inversion through the face center.
    sym_s2: bool,
    edges: Vec<Edge>,
    area: f64,
    /// Averaged unit normal of the polygon's plane.
    normal: R3,
    /// Signed distance of the plane from the origin, along `normal`.
    rperp: f64,
    /// Radius of the enclosing cylinder.
    radius_2d: f64,
    /// Radius of the enclosing sphere.
    radius_3d: f64,
}

impl Face {
    /// Diameter of the smallest circle that contains all given points.
    pub fn diameter(v: &[R3]) -> f64 {
        let mut diameter: f64 = 0.0;
        for j in 0..v.len() {
            for jj in j + 1..v.len() {
                diameter = diameter.max((v[j] - v[jj]).norm());
            }
        }
        diameter
    }

    /// Builds a face from an oriented vertex ring.
    ///
    /// Vertex order must follow the right-hand rule with respect to the
    /// outward normal. With `sym_s2` set, the polygon must map to itself
    /// under a two-fold rotation about the normal through the face center;
    /// the redundant half of the edges is verified and then dropped.
    pub fn try_new(v: &[R3], sym_s2: bool) -> Result<Self, GeometryError> {
        let nv = v.len();
        if nv == 0 {
            return Err(GeometryError::NoVertices);
        }
        if nv < 3 {
            return Err(GeometryError::TooFewVertices { count: nv });
        }

        let radius_2d = Self::diameter(v) / 2.0;
        let radius_3d = v.iter().map(|p| p.norm()).fold(0.0, f64::max);

        // Vertices closer than the relative threshold do not yield an edge.
        // TODO merge near-coincident vertices up front instead of dropping
        // the short edge; dropping leaves a tiny gap in the ring.
        let mut edges = Vec::with_capacity(nv);
        for j in 0..nv {
            let jj = (j + 1) % nv;
            if (v[j] - v[jj]).norm() < 1e-14 * radius_2d {
                continue;
            }
            edges.push(Edge::try_new(v[j], v[jj])?);
        }
        let ne = edges.len();
        if ne < 3 {
            return Err(GeometryError::TooFewEdges { count: ne });
        }

        // Averaged unit normal over consecutive edge pairs; the average is
        // not re-normalized.
        let mut normal_acc = R3::zeros();
        for j in 0..ne {
            let jj = (j + 1) % ne;
            let ee = edges[j].e().cross(&edges[jj].e());
            if ee.norm_squared() == 0.0 {
                return Err(GeometryError::ParallelEdges);
            }
            normal_acc += ee.normalize();
        }
        let normal = normal_acc / ne as f64;

        let mut rperp = 0.0;
        for p in v {
            rperp += p.dot(&normal);
        }
        rperp /= nv as f64;
        for p in &v[1..] {
            if (p.dot(&normal) - rperp).abs() > 1e-14 * radius_3d {
                return Err(GeometryError::NotPlanar);
            }
        }

        let mut area = 0.0;
        for j in 0..nv {
            let jj = (j + 1) % nv;
            area += normal.dot(&v[j].cross(&v[jj])) / 2.0;
        }

        if sym_s2 {
            if ne & 1 == 1 {
                return Err(GeometryError::OddEdgeCountS2 { count: ne });
            }
            let half = ne / 2;
            let center = rperp * normal;
            for j in 0..half {
                let r_sum = (edges[j].r() - center) + (edges[j + half].r() - center);
                if r_sum.norm() > 1e-12 * radius_2d {
                    return Err(GeometryError::EdgeCentersViolateS2);
                }
                if (edges[j].e() + edges[j + half].e()).norm() > 1e-12 * radius_2d {
                    return Err(GeometryError::EdgeVectorsViolateS2);
                }
            }
            edges.truncate(half);
        }

        Ok(Self {
            sym_s2,
            edges,
            area,
            normal,
            rperp,
            radius_2d,
            radius_3d,
        })
    }

    /// Signed area (positive when the vertex order matches the normal).
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Signed volume of the pyramid spanned by the origin and this face.
    #[inline]
    pub fn pyramidal_volume(&self) -> f64 {
        self.rperp * self.area / 3.0
    }

    /// Radius of the enclosing sphere.
    #[inline]
    pub fn radius_3d(&self) -> f64 {
        self.radius_3d
    }

    /// conj(q)·normal.
    #[inline]
    pub fn normal_projection_conj(&self, q: &C3) -> Complex64 {
        dot_cr(q, self.normal)
    }

    /// Splits q into the component along the normal and the in-plane rest.
    ///
    /// The in-plane part is re-orthogonalized once against the normal, and
    /// zeroed outright when it is negligible against the normal component so
    /// that downstream branch guards see an exact zero.
    fn decompose_q(&self, q: &C3) -> (Complex64, C3) {
        let qperp = dot_rc(self.normal, q);
        let mut qpa = q - self.normal.map(|x| qperp * x);
        let residue = dot_rc(self.normal, &qpa);
        qpa -= self.normal.map(|x| residue * x);
        if qpa.norm() < EPS * qperp.norm() {
            qpa = C3::zeros();
        }
        (qperp, qpa)
    }

    /// Weighted sum of edge moment integrals of order `m + 1`; the core of
    /// one series term.
    fn ff_n_core(&self, m: usize, qpa: &C3, qperp: Complex64) -> Complex64 {
        // conjugation of the prefactor happens inside dot_cr
        let prevec = cross_rc(2.0 * self.normal, qpa);
        let qrperp = qperp * self.rperp;
        let mut result = Complex64::new(0.0, 0.0);
        for e in &self.edges {
            let vfac = dot_cr(&prevec, e.e());
            result += vfac * e.contrib(m + 1, qpa, qrperp);
        }
        result
    }

    /// One term of the body-level power series: the contribution qn·f_n, of
    /// order q^(n+1), from this face.
    pub fn ff_n(&self, n: usize, q: &C3) -> Complex64 {
        let qn = dot_cr(q, self.normal);
        if qn.norm() < EPS * q.norm() {
            return Complex64::new(0.0, 0.0);
        }
        let (qperp, qpa) = self.decompose_q(q);
        let qpa_mag2 = qpa.norm_squared();
        if qpa_mag2 == 0.0 {
            return qn * (qperp * self.rperp).powu(n as u32) * self.area * rf(n);
        }
        if self.sym_s2 {
            // restore the dropped half of the edges by inverting qpa
            return qn * (self.ff_n_core(n, &qpa, qperp) + self.ff_n_core(n, &(-qpa), qperp))
                / qpa_mag2;
        }
        qn * self.ff_n_core(n, &qpa, qperp) / qpa_mag2
    }

    /// Sum of the n >= 1 terms of the small-q∥ expansion of the 2D form
    /// factor.
    ///
    /// Terminates once three consecutive terms are negligible against the
    /// running sum or against `abslevel`; otherwise the series is declared
    /// non-convergent.
    fn expansion(
        &self,
        fac_even: Complex64,
        fac_odd: Complex64,
        qpa: &C3,
        abslevel: f64,
    ) -> Result<Complex64, NumericError> {
        #[cfg(feature = "diagnosis")]
        crate::diagnosis::note_algo(crate::diagnosis::algo::FACE_EXPANSION);
        let qpa_mag2 = qpa.norm_squared();
        let mut sum = Complex64::new(0.0, 0.0);
        let mut n_fac = I;
        let mut streak = 0;
        for n in 1..N_LIMIT_SERIES {
            #[cfg(feature = "diagnosis")]
            crate::diagnosis::note_order(n as u32);
            let fac = if n & 1 == 1 { fac_odd } else { fac_even };
            let term = n_fac * fac * self.ff_n_core(n, qpa, Complex64::new(0.0, 0.0)) / qpa_mag2;
            sum += term;
            if term.norm() <= EPS * sum.norm() || sum.norm() < EPS * abslevel {
                streak += 1;
            } else {
                streak = 0;
            }
            if streak > 2 {
                return Ok(sum);
            }
            n_fac = mul_i(n_fac);
        }
        Err(NumericError::FaceSeriesDiverged)
    }

    /// Closed-form edge sum underlying the analytic branch.
    ///
    /// The per-edge weight of the last edge is replaced by the negative sum
    /// of the preceding ones, which enforces Σ weights = 0 in finite
    /// precision (exactly true for a closed ring). With `sym_s2` the stored
    /// half-ring already sums to the inverted other half, so no replacement
    /// is needed there.
    fn edge_sum_ff(&self, q: &C3, qpa: &C3, sym_ci: bool) -> Complex64 {
        let prevec = cross_rc(self.normal, qpa);
        let ne = self.edges.len();
        let mut sum = Complex64::new(0.0, 0.0);
        let mut vfacsum = Complex64::new(0.0, 0.0);
        for (i, e) in self.edges.iter().enumerate() {
            let q_e = e.q_e(qpa);
            let q_r = e.q_r(qpa);
            let rfac = if self.sym_s2 {
                q_r.sin()
            } else if sym_ci {
                e.q_r(q).cos()
            } else {
                exp_i(q_r)
            };
            let vfac = if self.sym_s2 || i + 1 < ne {
                let v = dot_cr(&prevec, e.e());
                vfacsum += v;
                v
            } else {
                -vfacsum
            };
            sum += vfac * sinc(q_e) * rfac;
        }
        sum
    }

    /// The contribution of this face to the form factor of a polyhedron.
    ///
    /// `sym_ci` states whether the containing body is centrosymmetric, in
    /// which case this face also stands in for its inversion image.
    pub fn ff(&self, q: &C3, sym_ci: bool) -> Result<Complex64, NumericError> {
        let (qperp, qpa) = self.decompose_q(q);
        let qpa_red = self.radius_2d * qpa.norm();
        let qr_perp = qperp * self.rperp;
        let phase = if sym_ci {
            2.0 * mul_i(qr_perp.sin())
        } else {
            exp_i(qr_perp)
        };
        let ff0 = phase * self.area;
        if qpa_red == 0.0 {
            return Ok(ff0);
        }
        if qpa_red < QPA_LIMIT_SERIES && !self.sym_s2 {
            let (fac_even, fac_odd) = if sym_ci {
                (2.0 * mul_i(qr_perp.sin()), 2.0 * qr_perp.cos())
            } else {
                let fac = exp_i(qr_perp);
                (fac, fac)
            };
            return Ok(ff0 + self.expansion(fac_even, fac_odd, &qpa, ff0.norm())?);
        }
        let prefac = if self.sym_s2 {
            if sym_ci {
                -8.0 * qr_perp.sin()
            } else {
                4.0 * mul_i(exp_i(qr_perp))
            }
        } else if sym_ci {
            Complex64::new(4.0, 0.0)
        } else {
            2.0 * exp_i(qr_perp)
        };
        Ok(prefac * self.edge_sum_ff(q, &qpa, sym_ci) / mul_i(Complex64::from(qpa.norm_squared())))
    }

    /// 2D form factor from the power series; exposed for threshold
    /// cross-checks.
    pub fn ff_2d_expanded(&self, qpa: &C3) -> Result<Complex64, NumericError> {
        let one = Complex64::new(1.0, 0.0);
        Ok(self.area + self.expansion(one, one, qpa, self.area.abs())?)
    }

    /// 2D form factor from the closed-form edge sum; exposed for threshold
    /// cross-checks.
    pub fn ff_2d_direct(&self, qpa: &C3) -> Complex64 {
        let prefac = if self.sym_s2 {
            Complex64::new(4.0, 0.0)
        } else {
            -2.0 * I
        };
        prefac * self.edge_sum_ff(qpa, qpa, false) / qpa.norm_squared()
    }

    /// The 2D form factor of this polygon, for use as a prism base.
    ///
    /// `qpa` must lie in the face plane.
    pub fn ff_2d(&self, qpa: &C3) -> Result<Complex64, NumericError> {
        if dot_cr(qpa, self.normal).norm() > EPS * qpa.norm() {
            return Err(NumericError::OutOfPlaneQ);
        }
        let qpa_red = self.radius_2d * qpa.norm();
        if qpa_red == 0.0 {
            return Ok(Complex64::from(self.area));
        }
        if qpa_red < QPA_LIMIT_SERIES && !self.sym_s2 {
            return self.ff_2d_expanded(qpa);
        }
        Ok(self.ff_2d_direct(qpa))
    }

    /// Checks that `other` is the inversion image of this face. Compares the
    /// plane distance, area, and orientation only; vertices are not revisited.
    pub(crate) fn assert_ci(&self, other: &Face) -> Result<(), GeometryError> {
        if (self.rperp - other.rperp).abs() > 1e-15 * (self.rperp + other.rperp) {
            return Err(GeometryError::CiDistanceMismatch);
        }
        if (self.area - other.area).abs() > 1e-15 * (self.area + other.area) {
            return Err(GeometryError::CiAreaMismatch);
        }
        if (self.normal + other.normal).norm() > 1e-14 {
            return Err(GeometryError::CiOrientationMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::to_c3;

    // Equilateral triangle with unit edge, centered on the z axis.
    fn unit_triangle() -> Vec<R3> {
        let a = 1.0;
        let a_s = a / 2.0;
        let a_c = a / 3f64.sqrt() / 2.0;
        let a_h = a / 3f64.sqrt();
        vec![
            R3::new(-a_c, a_s, 0.0),
            R3::new(-a_c, -a_s, 0.0),
            R3::new(a_h, 0.0, 0.0),
        ]
    }

    #[test]
    fn triangle_area_and_normal() {
        let face = Face::try_new(&unit_triangle(), false).unwrap();
        assert!((face.area() - 3f64.sqrt() / 4.0).abs() < 1e-15);
        assert!((face.normal - R3::new(0.0, 0.0, 1.0)).norm() < 1e-15);
        assert!(face.rperp.abs() < 1e-15);
    }

    #[test]
    fn coplanarity_is_enforced() {
        let v = vec![
            R3::new(0.0, 0.0, 0.0),
            R3::new(1.0, 0.0, 0.0),
            R3::new(1.0, 1.0, 0.3),
            R3::new(0.0, 1.0, 0.0),
        ];
        assert!(matches!(
            Face::try_new(&v, false),
            Err(GeometryError::NotPlanar)
        ));
    }

    #[test]
    fn collinear_ring_is_rejected() {
        let v = vec![
            R3::new(0.0, 0.0, 0.0),
            R3::new(1.0, 0.0, 0.0),
            R3::new(2.0, 0.0, 0.0),
        ];
        assert!(matches!(
            Face::try_new(&v, false),
            Err(GeometryError::ParallelEdges)
        ));
    }

    #[test]
    fn too_few_vertices() {
        assert!(matches!(
            Face::try_new(&[], false),
            Err(GeometryError::NoVertices)
        ));
        let v = vec![R3::new(0.0, 0.0, 0.0), R3::new(1.0, 0.0, 0.0)];
        assert!(matches!(
            Face::try_new(&v, false),
            Err(GeometryError::TooFewVertices { count: 2 })
        ));
    }

    #[test]
    fn s2_claim_is_verified() {
        // rectangle: genuine S2
        let rect = vec![
            R3::new(1.0, 0.5, 0.0),
            R3::new(-1.0, 0.5, 0.0),
            R3::new(-1.0, -0.5, 0.0),
            R3::new(1.0, -0.5, 0.0),
        ];
        let face = Face::try_new(&rect, true).unwrap();
        assert_eq!(face.edges.len(), 2);
        assert!((face.area().abs() - 2.0).abs() < 1e-14);

        // trapezoid: no S2
        let trap = vec![
            R3::new(1.0, 0.5, 0.0),
            R3::new(-2.0, 0.5, 0.0),
            R3::new(-1.0, -0.5, 0.0),
            R3::new(1.0, -0.5, 0.0),
        ];
        assert!(Face::try_new(&trap, true).is_err());

        // pentagon: odd edge count
        let pent = vec![
            R3::new(1.0, 0.0, 0.0),
            R3::new(0.3, 0.95, 0.0),
            R3::new(-0.8, 0.59, 0.0),
            R3::new(-0.8, -0.59, 0.0),
            R3::new(0.3, -0.95, 0.0),
        ];
        assert!(matches!(
            Face::try_new(&pent, true),
            Err(GeometryError::OddEdgeCountS2 { count: 5 })
        ));
    }

    #[test]
    fn ff_2d_rejects_out_of_plane_q() {
        let face = Face::try_new(&unit_triangle(), false).unwrap();
        let q = to_c3(R3::new(0.1, 0.2, 0.5));
        assert!(matches!(face.ff_2d(&q), Err(NumericError::OutOfPlaneQ)));
    }

    #[test]
    fn ff_2d_at_zero_is_area() {
        let face = Face::try_new(&unit_triangle(), false).unwrap();
        let q = C3::zeros();
        let ff = face.ff_2d(&q).unwrap();
        assert_eq!(ff, Complex64::from(face.area()));
    }

    #[test]
    fn s2_face_matches_plain_face() {
        // The same rectangle evaluated with and without the declared
        // two-fold axis must give the same 2D form factor.
        let rect = vec![
            R3::new(1.0, 0.5, 0.0),
            R3::new(-1.0, 0.5, 0.0),
            R3::new(-1.0, -0.5, 0.0),
            R3::new(1.0, -0.5, 0.0),
        ];
        let sym = Face::try_new(&rect, true).unwrap();
        let plain = Face::try_new(&rect, false).unwrap();
        for t in [0.05, 0.3, 1.7, 20.0] {
            let q = to_c3(R3::new(0.6 * t, 0.8 * t, 0.0));
            let a = sym.ff_2d(&q).unwrap();
            let b = plain.ff_2d(&q).unwrap();
            assert!(
                (a - b).norm() <= 1e-12 * b.norm().max(1e-6),
                "t={t}: {a} vs {b}"
            );
        }
    }
}
