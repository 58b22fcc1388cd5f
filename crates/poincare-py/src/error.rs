//! Error conversion between gyrovector errors and Python exceptions.
//!
//! Precondition violations (dimension mismatch, out-of-ball points, empty
//! vectors) map to `ValueError`; numerical instability maps to
//! `RuntimeError`.

use poincare_ball::GyrovectorError;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyErr;

/// Converts a gyrovector error into the corresponding Python exception.
pub fn to_py_err(err: GyrovectorError) -> PyErr {
    match &err {
        GyrovectorError::DimensionMismatch { .. }
        | GyrovectorError::InvalidPoint { .. }
        | GyrovectorError::InvalidArgument { .. } => PyValueError::new_err(err.to_string()),
        GyrovectorError::NumericalError { .. } => PyRuntimeError::new_err(err.to_string()),
    }
}
