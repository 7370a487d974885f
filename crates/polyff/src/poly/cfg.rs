//! Numeric policy constants.
//!
//! These are fixed once for the whole kernel and are not tunable per call
//! site. Published results depend on the exact branch thresholds, so changing
//! any of them is a breaking change in all but name.

/// Relative machine tolerance used in branch guards and convergence tests.
pub(crate) const EPS: f64 = 2e-16;

/// Reduced in-plane momentum below which a face is evaluated by power series.
pub(crate) const QPA_LIMIT_SERIES: f64 = 1e-2;

/// Reduced momentum below which a body is evaluated by power series.
pub(crate) const Q_LIMIT_SERIES: f64 = 1e-2;

/// Maximum number of series terms before giving up on convergence.
pub(crate) const N_LIMIT_SERIES: usize = 20;
