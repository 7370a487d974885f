//! Reciprocal factorials 1/n!, precomputed once.
//!
//! Every series expansion in the kernel draws its coefficients from this
//! table. The values are produced by the plain IEEE-754 recurrence
//! `rf[0] = 1, rf[n] = rf[n-1]/n`, which keeps them reproducible bit for bit
//! across platforms; `tgamma`-style evaluations do not.

use std::sync::LazyLock;

/// Table length; 1/170! is the last reciprocal factorial above f64 underflow.
pub const TABLE_LEN: usize = 171;

/// The table `RECIPROCAL_FACTORIAL[n] = 1/n!` for `0 <= n <= 170`.
pub static RECIPROCAL_FACTORIAL: LazyLock<[f64; TABLE_LEN]> = LazyLock::new(|| {
    let mut table = [0.0; TABLE_LEN];
    table[0] = 1.0;
    for n in 1..TABLE_LEN {
        table[n] = table[n - 1] / n as f64;
    }
    table
});

/// Returns 1/n!.
#[inline]
pub fn rf(n: usize) -> f64 {
    RECIPROCAL_FACTORIAL[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_orders_are_exact() {
        assert_eq!(RECIPROCAL_FACTORIAL.len(), 171);
        assert_eq!(rf(0), 1.0);
        assert_eq!(rf(1), 1.0);
        assert_eq!(rf(2), 0.5);
        assert_eq!(rf(3), 1.0 / 6.0);
    }

    #[test]
    fn high_order_matches_reference() {
        let reference = 1.75027620692601519e-263;
        assert!((rf(150) - reference).abs() < 1e-14 * reference);
    }

    #[test]
    fn strictly_decreasing_and_positive() {
        for n in 1..TABLE_LEN {
            assert!(rf(n) > 0.0);
            assert!(rf(n) < rf(n - 1));
        }
    }
}
