//! Python bindings for the Poincaré ball gyrovector library.
//!
//! This module exposes the gyrovector operations to Python under the same
//! names and argument order as the Rust API, with NumPy arrays standing in
//! for nalgebra vectors. The binding layer contributes no algorithmic
//! logic; it only converts arrays and maps errors to Python exceptions.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

mod array_utils;
mod error;

use array_utils::{dvector_to_pyarray, numpy_to_dvector};
use error::to_py_err;

/// Perform Möbius addition on the Poincaré ball.
#[pyfunction]
fn mobius_add<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'_, f64>,
    y: PyReadonlyArray1<'_, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let x = numpy_to_dvector(&x)?;
    let y = numpy_to_dvector(&y)?;
    let result = poincare_ball::mobius_add(&x, &y).map_err(to_py_err)?;
    Ok(dvector_to_pyarray(py, &result))
}

/// Perform Möbius scalar multiplication.
#[pyfunction]
fn mobius_scalar_multiply<'py>(
    py: Python<'py>,
    r: f64,
    x: PyReadonlyArray1<'_, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let x = numpy_to_dvector(&x)?;
    let result = poincare_ball::mobius_scalar_multiply(r, &x).map_err(to_py_err)?;
    Ok(dvector_to_pyarray(py, &result))
}

/// Compute the exponential map at point x.
#[pyfunction]
fn exp_map<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'_, f64>,
    v: PyReadonlyArray1<'_, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let x = numpy_to_dvector(&x)?;
    let v = numpy_to_dvector(&v)?;
    let result = poincare_ball::exp_map(&x, &v).map_err(to_py_err)?;
    Ok(dvector_to_pyarray(py, &result))
}

/// Compute the logarithmic map at point x.
#[pyfunction]
fn log_map<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'_, f64>,
    y: PyReadonlyArray1<'_, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let x = numpy_to_dvector(&x)?;
    let y = numpy_to_dvector(&y)?;
    let result = poincare_ball::log_map(&x, &y).map_err(to_py_err)?;
    Ok(dvector_to_pyarray(py, &result))
}

/// Compute the hyperbolic distance between two points on the Poincaré ball.
#[pyfunction]
fn distance(x: PyReadonlyArray1<'_, f64>, y: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    let x = numpy_to_dvector(&x)?;
    let y = numpy_to_dvector(&y)?;
    poincare_ball::distance(&x, &y).map_err(to_py_err)
}

/// Compute the Euclidean norm of a vector.
#[pyfunction]
fn norm(x: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    let x = numpy_to_dvector(&x)?;
    Ok(poincare_ball::norm(&x))
}

/// Compute the dot product of two vectors.
#[pyfunction]
fn dot_product(x: PyReadonlyArray1<'_, f64>, y: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    let x = numpy_to_dvector(&x)?;
    let y = numpy_to_dvector(&y)?;
    poincare_ball::dot_product(&x, &y).map_err(to_py_err)
}

/// Check if a vector is in the unit ball.
#[pyfunction]
#[pyo3(signature = (x, epsilon = 1e-10))]
fn is_in_ball(x: PyReadonlyArray1<'_, f64>, epsilon: f64) -> PyResult<bool> {
    let x = numpy_to_dvector(&x)?;
    Ok(poincare_ball::is_in_ball(&x, epsilon))
}

/// Normalize a vector to have unit norm.
#[pyfunction]
fn normalize<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'_, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let x = numpy_to_dvector(&x)?;
    Ok(dvector_to_pyarray(py, &poincare_ball::normalize(&x)))
}

/// Get the library version string.
#[pyfunction]
fn get_version() -> &'static str {
    poincare_ball::version::VERSION
}

/// Get the major version number.
#[pyfunction]
fn get_version_major() -> u32 {
    poincare_ball::version::VERSION_MAJOR
}

/// Get the minor version number.
#[pyfunction]
fn get_version_minor() -> u32 {
    poincare_ball::version::VERSION_MINOR
}

/// Get the patch version number.
#[pyfunction]
fn get_version_patch() -> u32 {
    poincare_ball::version::VERSION_PATCH
}

/// Poincaré ball gyrovector algebra for Python.
#[pymodule]
fn _poincare(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", poincare_ball::version::VERSION)?;

    m.add_function(wrap_pyfunction!(get_version, m)?)?;
    m.add_function(wrap_pyfunction!(get_version_major, m)?)?;
    m.add_function(wrap_pyfunction!(get_version_minor, m)?)?;
    m.add_function(wrap_pyfunction!(get_version_patch, m)?)?;

    m.add_function(wrap_pyfunction!(mobius_add, m)?)?;
    m.add_function(wrap_pyfunction!(mobius_scalar_multiply, m)?)?;
    m.add_function(wrap_pyfunction!(exp_map, m)?)?;
    m.add_function(wrap_pyfunction!(log_map, m)?)?;
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_function(wrap_pyfunction!(norm, m)?)?;
    m.add_function(wrap_pyfunction!(dot_product, m)?)?;
    m.add_function(wrap_pyfunction!(is_in_ball, m)?)?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;

    Ok(())
}
