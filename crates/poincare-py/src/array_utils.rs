//! Conversion between 1-D NumPy arrays and nalgebra vectors.

use nalgebra::DVector;
use numpy::{PyArray1, PyReadonlyArray1, PyUntypedArrayMethods};
use pyo3::prelude::*;

/// Converts a 1-D NumPy array to a nalgebra `DVector`.
///
/// C-contiguous arrays are read through a direct slice reference;
/// non-contiguous arrays fall back to an element-wise copy.
pub fn numpy_to_dvector(array: &PyReadonlyArray1<'_, f64>) -> PyResult<DVector<f64>> {
    if array.is_c_contiguous() {
        let slice = array.as_slice()?;
        Ok(DVector::from_row_slice(slice))
    } else {
        let view = array.as_array();
        Ok(DVector::from_iterator(view.len(), view.iter().copied()))
    }
}

/// Converts a nalgebra `DVector` to a new 1-D NumPy array.
pub fn dvector_to_pyarray<'py>(
    py: Python<'py>,
    vector: &DVector<f64>,
) -> Bound<'py, PyArray1<f64>> {
    PyArray1::from_slice_bound(py, vector.as_slice())
}
