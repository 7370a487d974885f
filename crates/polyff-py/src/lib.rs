//! PyO3 bindings for selected polyff evaluations.
//!
//! Kept thin and predictable: plain tuples in, plain floats out. The full
//! topology-level API stays Rust-only; these entry points cover the catalog
//! evaluations that Python callers actually plot.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use polyff::math::{to_c3, R3};
use polyff::shapes;

fn value_err<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Form factor of a cube with the given edge, as a (re, im) pair.
#[pyfunction]
fn cube_formfactor(edge: f64, q: (f64, f64, f64)) -> PyResult<(f64, f64)> {
    let body = shapes::cube(edge).map_err(value_err)?;
    let f = body
        .formfactor(&to_c3(R3::new(q.0, q.1, q.2)))
        .map_err(value_err)?;
    Ok((f.re, f.im))
}

/// Form factor of a regular decahedron with the given edge, as a (re, im)
/// pair.
#[pyfunction]
fn decahedron_formfactor(edge: f64, q: (f64, f64, f64)) -> PyResult<(f64, f64)> {
    let body = shapes::decahedron(edge).map_err(value_err)?;
    let f = body
        .formfactor(&to_c3(R3::new(q.0, q.1, q.2)))
        .map_err(value_err)?;
    Ok((f.re, f.im))
}

/// Volume of a regular decahedron with the given edge.
#[pyfunction]
fn decahedron_volume(edge: f64) -> PyResult<f64> {
    Ok(shapes::decahedron(edge).map_err(value_err)?.volume())
}

/// Scattering intensity of a rectangular pave in solution, in cm⁻¹, from
/// the squared amplitude times the contrast and particle volume.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn pave_intensity(
    qa: f64,
    qb: f64,
    qc: f64,
    sld: f64,
    solvent_sld: f64,
    edge_a: f64,
    edge_b: f64,
    edge_c: f64,
) -> PyResult<f64> {
    let body = shapes::pave(edge_a, edge_b, edge_c).map_err(value_err)?;
    let amplitude = body
        .formfactor(&to_c3(R3::new(qa, qb, qc)))
        .map_err(value_err)?
        .norm();
    let scale = (sld - solvent_sld) * (edge_a * edge_b * edge_c);
    // convert from 1e-12 Å⁻¹ to cm⁻¹
    Ok(1.0e-4 * (scale * amplitude) * (scale * amplitude))
}

#[pymodule]
fn polyff_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cube_formfactor, m)?)?;
    m.add_function(wrap_pyfunction!(decahedron_formfactor, m)?)?;
    m.add_function(wrap_pyfunction!(decahedron_volume, m)?)?;
    m.add_function(wrap_pyfunction!(pave_intensity, m)?)?;
    Ok(())
}
