//! A directed polygon edge and its moment integral.

use num_complex::Complex64;

use crate::factorial::rf;
use crate::math::{dot_rc, C3, R3};

use super::error::GeometryError;

/// One directed edge of a polygon.
///
/// Stores the half-vector `E = (V_hi - V_lo)/2` pointing from the midpoint to
/// the upper vertex, and the midpoint `R = (V_hi + V_lo)/2`.
#[derive(Clone, Debug)]
pub struct Edge {
    e: R3,
    r: R3,
}

impl Edge {
    pub(crate) fn try_new(v_lo: R3, v_hi: R3) -> Result<Self, GeometryError> {
        let e = (v_hi - v_lo) / 2.0;
        if e.norm_squared() == 0.0 {
            return Err(GeometryError::ZeroLengthEdge);
        }
        Ok(Self {
            e,
            r: (v_hi + v_lo) / 2.0,
        })
    }

    /// Half-vector from the edge midpoint to the upper vertex.
    #[inline]
    pub fn e(&self) -> R3 {
        self.e
    }

    /// Position of the edge midpoint.
    #[inline]
    pub fn r(&self) -> R3 {
        self.r
    }

    /// E·q.
    #[inline]
    pub fn q_e(&self, q: &C3) -> Complex64 {
        dot_rc(self.e, q)
    }

    /// R·q.
    #[inline]
    pub fn q_r(&self, q: &C3) -> Complex64 {
        dot_rc(self.r, q)
    }

    /// Moment integral of order `m` for this edge:
    ///
    /// ```text
    ///     Σ_{l=0}^{m/2} u^{2l} v^{m-2l} / [(2l+1)! (m-2l)!]  -  v1^m / m!
    /// ```
    ///
    /// with `u = E·q∥`, `v2 = R·q∥`, `v1 = q_rperp`, `v = v1 + v2`. The
    /// counter-term `v1^m/m!` is independent of the edge and cancels in the
    /// weighted sum over a closed polygon (where Σ E = 0); subtracting it
    /// here keeps that cancellation exact instead of leaving it to the
    /// accumulated sum.
    ///
    /// The equality tests against zero are intentional: each of them
    /// short-circuits a limit that is exact at the literal zero bit pattern.
    pub(crate) fn contrib(&self, m: usize, qpa: &C3, qrperp: Complex64) -> Complex64 {
        let u = self.q_e(qpa);
        let v2 = self.q_r(qpa);
        let v1 = qrperp;
        let v = v2 + v1;
        let zero = Complex64::new(0.0, 0.0);
        if v == zero {
            // only the 2l = m term survives
            if m & 1 == 1 {
                return zero;
            }
            return rf(m) * (u.powu(m as u32) / (m as f64 + 1.0) - v1.powu(m as u32));
        }
        let mut result = zero;
        // The l = 0 term, minus the counter-term v1^m/m!.
        if v1 == zero {
            result = rf(m) * v2.powu(m as u32);
        } else if v2 == zero {
            // l = 0 cancels against the counter-term entirely
        } else {
            // binomial expansion of (v1+v2)^m/m!, with the mm = 0 summand
            // omitted: it equals the counter-term
            for mm in 1..=m {
                result += rf(mm) * rf(m - mm) * v2.powu(mm as u32) * v1.powu((m - mm) as u32);
            }
        }
        if u == zero {
            return result;
        }
        for l in 1..=m / 2 {
            result += rf(m - 2 * l) * rf(2 * l + 1) * u.powu(2 * l as u32) * v.powu((m - 2 * l) as u32);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::to_c3;

    fn edge(lo: (f64, f64, f64), hi: (f64, f64, f64)) -> Edge {
        Edge::try_new(R3::new(lo.0, lo.1, lo.2), R3::new(hi.0, hi.1, hi.2)).unwrap()
    }

    #[test]
    fn rejects_zero_length() {
        let v = R3::new(0.5, -1.0, 2.0);
        assert!(matches!(
            Edge::try_new(v, v),
            Err(GeometryError::ZeroLengthEdge)
        ));
    }

    #[test]
    fn midpoint_and_half_vector() {
        let e = edge((0.0, 0.0, 0.0), (2.0, 4.0, 0.0));
        assert_eq!(e.e(), R3::new(1.0, 2.0, 0.0));
        assert_eq!(e.r(), R3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn contrib_v_zero_branch() {
        // qpa perpendicular to R and qrperp = 0 makes v = 0 exactly
        let e = edge((1.0, -1.0, 0.0), (1.0, 1.0, 0.0));
        let qpa = to_c3(R3::new(0.0, 0.7, 0.0));
        let zero = Complex64::new(0.0, 0.0);
        // odd order vanishes
        assert_eq!(e.contrib(3, &qpa, zero), zero);
        // even order: rf(m) * u^m/(m+1), with v1 = 0
        let u = e.q_e(&qpa);
        let expect = rf(2) * u * u / 3.0;
        let d = e.contrib(2, &qpa, zero) - expect;
        assert!(d.norm() < 1e-18);
    }

    #[test]
    fn counter_term_cancels_over_closed_triangle() {
        // For a closed polygon the per-edge weights vfac = w·E sum to zero,
        // so Σ vfac * (counter-term) = 0; the moment integrals with and
        // without the counter-term therefore give the same weighted sum.
        let v = [
            R3::new(0.0, 0.0, 1.0),
            R3::new(1.0, 0.0, 1.0),
            R3::new(0.0, 1.0, 1.0),
        ];
        let edges: Vec<Edge> = (0..3)
            .map(|j| Edge::try_new(v[j], v[(j + 1) % 3]).unwrap())
            .collect();
        let w = R3::new(0.3, -0.8, 0.0);
        let qpa = to_c3(R3::new(0.11, 0.07, 0.0));
        let qrperp = Complex64::new(0.23, 0.0);
        let m = 4;
        let with: Complex64 = edges
            .iter()
            .map(|e| Complex64::from(w.dot(&e.e())) * e.contrib(m, &qpa, qrperp))
            .sum();
        let without: Complex64 = edges
            .iter()
            .map(|e| {
                let plain = e.contrib(m, &qpa, qrperp) + rf(m) * qrperp.powu(m as u32);
                Complex64::from(w.dot(&e.e())) * plain
            })
            .sum();
        assert!((with - without).norm() <= 1e-16);
    }
}
