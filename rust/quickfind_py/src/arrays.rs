use numpy::{PyArrayDyn, PyArrayMethods};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use quickfind_core::{flatten, Order, SamplerError};

/// Copies a float array of any shape into a flat vector walked in `order`.
/// Anything else (lists, nested lists, integer arrays) goes through
/// `numpy.asarray(obj, dtype="float64")` first so shape and order still apply.
pub fn extract_f64_vec(obj: &Bound<'_, PyAny>, order: Order) -> PyResult<Vec<f64>> {
    if let Ok(array) = obj.downcast::<PyArrayDyn<f64>>() {
        return Ok(flatten(array.readonly().as_array(), order));
    }

    if let Ok(array32) = obj.downcast::<PyArrayDyn<f32>>() {
        return Ok(flatten(array32.readonly().as_array(), order));
    }

    let py = obj.py();
    let np = py.import_bound("numpy")?;
    let kwargs = PyDict::new_bound(py);
    kwargs.set_item("dtype", "float64")?;
    let converted = np
        .call_method("asarray", (obj,), Some(&kwargs))
        .map_err(|e| PyTypeError::new_err(format!("expected a float array or a sequence of floats: {e}")))?;
    let array = converted.downcast::<PyArrayDyn<f64>>()?;
    Ok(flatten(array.readonly().as_array(), order))
}

pub fn parse_order(order: &str) -> PyResult<Order> {
    Order::parse(order).map_err(sampler_error)
}

pub fn sampler_error(err: SamplerError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}
