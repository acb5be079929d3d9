use numpy::{IntoPyArray, PyArray1};
use pyo3::prelude::*;
use quickfind_core::{BatchOptions, CumulativeWeights, Order};

use crate::arrays::{extract_f64_vec, parse_order, sampler_error};

/// Reusable running-sum table for drawing many indices from one weight array.
#[pyclass(name = "WeightedIndex")]
pub struct WeightedIndex {
    inner: CumulativeWeights,
}

#[pymethods]
impl WeightedIndex {
    #[new]
    #[pyo3(signature=(weights, order="C"))]
    pub fn new(weights: &Bound<'_, PyAny>, order: &str) -> PyResult<Self> {
        let weights = extract_f64_vec(weights, parse_order(order)?)?;
        let inner = CumulativeWeights::new(&weights).map_err(sampler_error)?;
        Ok(Self { inner })
    }

    /// 1-based index as a float, 0.0 when nothing is selected. `total`
    /// defaults to the table's own sum.
    #[pyo3(signature=(draw, total=None))]
    pub fn find(&self, draw: f64, total: Option<f64>) -> f64 {
        let total = total.unwrap_or(self.inner.total());
        self.inner.find(total, draw) as f64
    }

    #[pyo3(signature=(draws, total=None))]
    pub fn find_many<'py>(
        &self,
        py: Python<'py>,
        draws: &Bound<'py, PyAny>,
        total: Option<f64>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let draws = extract_f64_vec(draws, Order::C)?;
        let total = total.unwrap_or(self.inner.total());
        let table = &self.inner;
        let indices = py.allow_threads(|| table.find_many(total, &draws, &BatchOptions::default()));
        let as_float: Vec<f64> = indices.into_iter().map(|i| i as f64).collect();
        Ok(as_float.into_pyarray_bound(py))
    }

    #[getter]
    pub fn total(&self) -> f64 {
        self.inner.total()
    }

    pub fn prefix_sums<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.prefix_sums().to_vec().into_pyarray_bound(py)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("WeightedIndex(len={}, total={})", self.inner.len(), self.inner.total())
    }
}
