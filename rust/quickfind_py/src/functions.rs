use numpy::{IntoPyArray, PyArray1};
use pyo3::prelude::*;
use quickfind_core::Order;
use tracing::debug;

use crate::arrays::{extract_f64_vec, parse_order, sampler_error};
use crate::config::SamplerConfig;

/// index = quickfind(weights, total, draw)
///
/// Returns the 1-based index selected by `draw * total` as a float, or 0.0.
#[pyfunction]
#[pyo3(signature=(weights, total, draw, order="C"))]
pub fn quickfind(py: Python<'_>, weights: &Bound<'_, PyAny>, total: f64, draw: f64, order: &str) -> PyResult<f64> {
    let weights = extract_f64_vec(weights, parse_order(order)?)?;
    let index = py.allow_threads(|| quickfind_core::quickfind(&weights, total, draw));
    Ok(index as f64)
}

#[pyfunction]
#[pyo3(signature=(weights, total, draw, order="C"))]
pub fn quickfind_checked(py: Python<'_>, weights: &Bound<'_, PyAny>, total: f64, draw: f64, order: &str) -> PyResult<usize> {
    let weights = extract_f64_vec(weights, parse_order(order)?)?;
    py.allow_threads(|| quickfind_core::quickfind_checked(&weights, total, draw))
        .map_err(sampler_error)
}

#[pyfunction]
#[pyo3(signature=(weights, total, draws, config=None))]
pub fn quickfind_many<'py>(
    py: Python<'py>,
    weights: &Bound<'py, PyAny>,
    total: f64,
    draws: &Bound<'py, PyAny>,
    config: Option<SamplerConfig>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let cfg = config.unwrap_or_default().settings()?;
    let weights = extract_f64_vec(weights, cfg.order)?;
    let draws = extract_f64_vec(draws, Order::C)?;
    let options = cfg.batch_options();
    debug!(weights = weights.len(), draws = draws.len(), validate = cfg.validate, "quickfind_many");

    let indices = py.allow_threads(|| {
        if cfg.validate {
            quickfind_core::quickfind_many_checked(&weights, total, &draws, &options)
        } else {
            Ok(quickfind_core::quickfind_many(&weights, total, &draws, &options))
        }
    });
    let indices = indices.map_err(sampler_error)?;

    let as_float: Vec<f64> = indices.into_iter().map(|i| i as f64).collect();
    Ok(as_float.into_pyarray_bound(py))
}
