//! Real and complex 3-vectors, and elementary complex helpers.
//!
//! The kernel works with one generic vector shape, `nalgebra::Vector3<T>`,
//! instantiated over `f64` ([`R3`]) and `Complex64` ([`C3`]). The inner
//! product convention is antilinear in the left operand, `a·b = conj(a)ᵀ b`;
//! the helpers below spell out the two mixed real/complex cases the kernel
//! needs, so that no call site has to remember where the conjugation sits.

pub use num_complex::Complex64;

/// Real vector in R³.
pub type R3 = nalgebra::Vector3<f64>;
/// Complex vector in C³ (wavevectors may have imaginary parts, e.g. for
/// absorbing media).
pub type C3 = nalgebra::Vector3<Complex64>;

/// The imaginary unit.
pub const I: Complex64 = Complex64 { re: 0.0, im: 1.0 };

/// Returns i·z without going through a complex multiplication.
#[inline]
pub fn mul_i(z: Complex64) -> Complex64 {
    Complex64::new(-z.im, z.re)
}

/// Returns exp(i·z).
#[inline]
pub fn exp_i(z: Complex64) -> Complex64 {
    mul_i(z).exp()
}

/// Cardinal sine sin(z)/z.
///
/// The equality test against the literal zero is intentional, not a
/// floating-point bug: for any nonzero z, sin(z)/z is computed at full
/// precision, and exactly at z = 0 the limit value 1 is returned.
#[inline]
pub fn sinc(z: Complex64) -> Complex64 {
    if z == Complex64::new(0.0, 0.0) {
        return Complex64::new(1.0, 0.0);
    }
    z.sin() / z
}

/// Promotes a real vector to a complex one.
#[inline]
pub fn to_c3(v: R3) -> C3 {
    v.map(Complex64::from)
}

/// Bilinear dot product of a real and a complex vector, Σ aᵢ bᵢ.
///
/// A real left operand is its own conjugate, so this is also the antilinear
/// product a·b for real a.
#[inline]
pub fn dot_rc(a: R3, b: &C3) -> Complex64 {
    b.x * a.x + b.y * a.y + b.z * a.z
}

/// Antilinear-left dot product conj(a)·b of a complex and a real vector.
#[inline]
pub fn dot_cr(a: &C3, b: R3) -> Complex64 {
    a.x.conj() * b.x + a.y.conj() * b.y + a.z.conj() * b.z
}

/// Cross product of a real with a complex vector (linear in both arguments).
#[inline]
pub fn cross_rc(a: R3, b: &C3) -> C3 {
    C3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}
