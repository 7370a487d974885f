//! A prism: a planar polygon extruded along z.

use num_complex::Complex64;

use crate::math::{sinc, C3, R3};

use super::error::{GeometryError, NumericError};
use super::face::Face;

/// A prism of given height over a planar base polygon, centered at z = 0.
///
/// A centrosymmetric base cross-section (`symmetry_ci` of the 2D polygon)
/// is a two-fold axis of the base face, so it is passed down as the base's
/// `sym_s2`.
#[derive(Clone, Debug)]
pub struct Prism {
    base: Face,
    height: f64,
}

impl Prism {
    pub fn try_new(
        symmetry_ci: bool,
        height: f64,
        vertices: &[R3],
    ) -> Result<Self, GeometryError> {
        if !(height > 0.0) {
            return Err(GeometryError::NonPositiveHeight { height });
        }
        let base = Face::try_new(vertices, symmetry_ci)
            .map_err(|e| GeometryError::Prism(Box::new(e)))?;
        Ok(Self { base, height })
    }

    /// Area of the base polygon.
    #[inline]
    pub fn area(&self) -> f64 {
        self.base.area()
    }

    /// Extrusion height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The form factor F(q): the 2D form factor of the base times the
    /// longitudinal sinc factor.
    pub fn formfactor(&self, q: &C3) -> Result<Complex64, NumericError> {
        #[cfg(feature = "diagnosis")]
        {
            crate::diagnosis::reset();
            crate::diagnosis::note_algo(crate::diagnosis::algo::PRISM);
        }
        let qxy = C3::new(q.x, q.y, Complex64::new(0.0, 0.0));
        let base = self
            .base
            .ff_2d(&qxy)
            .map_err(|e| NumericError::Prism(Box::new(e)))?;
        Ok(self.height * sinc(q.z * (self.height / 2.0)) * base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::to_c3;

    fn square(a: f64) -> Vec<R3> {
        let h = a / 2.0;
        vec![
            R3::new(h, -h, 0.0),
            R3::new(h, h, 0.0),
            R3::new(-h, h, 0.0),
            R3::new(-h, -h, 0.0),
        ]
    }

    #[test]
    fn rejects_non_positive_height() {
        assert!(matches!(
            Prism::try_new(false, 0.0, &square(1.0)),
            Err(GeometryError::NonPositiveHeight { .. })
        ));
        assert!(Prism::try_new(false, -2.0, &square(1.0)).is_err());
    }

    #[test]
    fn base_errors_carry_prism_context() {
        // trapezoid falsely declared centrosymmetric
        let trap = vec![
            R3::new(1.0, 0.5, 0.0),
            R3::new(-2.0, 0.5, 0.0),
            R3::new(-1.0, -0.5, 0.0),
            R3::new(1.0, -0.5, 0.0),
        ];
        let err = Prism::try_new(true, 1.0, &trap).unwrap_err();
        assert!(matches!(err, GeometryError::Prism(_)));
        assert!(err.to_string().starts_with("prism: "));
    }

    #[test]
    fn in_plane_evaluation_drops_the_sinc_factor() {
        let prism = Prism::try_new(true, 2.5, &square(1.0)).unwrap();
        let q = to_c3(R3::new(0.4, -0.9, 0.0));
        let full = prism.formfactor(&q).unwrap();
        let base = Face::try_new(&square(1.0), true)
            .unwrap()
            .ff_2d(&q)
            .unwrap();
        let d = full - 2.5 * base;
        assert!(d.norm() <= 1e-15 * full.norm());
    }

    #[test]
    fn area_is_base_area() {
        let prism = Prism::try_new(true, 1.0, &square(3.0)).unwrap();
        assert!((prism.area().abs() - 9.0).abs() < 1e-13);
    }
}
