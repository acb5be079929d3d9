use pyo3::prelude::*;
use quickfind_core::{SamplerSettings, DEFAULT_PARALLEL_THRESHOLD};

use crate::arrays::{parse_order, sampler_error};

#[derive(Debug, Clone)]
#[pyclass]
pub struct SamplerConfig {
    #[pyo3(get, set)]
    pub order: String, // "C" or "F"
    #[pyo3(get, set)]
    pub validate: bool,
    #[pyo3(get, set)]
    pub parallel_threshold: usize,
}

#[pymethods]
impl SamplerConfig {
    #[new]
    #[pyo3(signature=(order="C", validate=false, parallel_threshold=DEFAULT_PARALLEL_THRESHOLD))]
    fn new(order: &str, validate: bool, parallel_threshold: usize) -> PyResult<Self> {
        Ok(SamplerSettings {
            order: parse_order(order)?,
            validate,
            parallel_threshold,
        }
        .into())
    }

    fn to_json(&self) -> PyResult<String> {
        self.settings()?.to_json().map_err(sampler_error)
    }

    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        Ok(SamplerSettings::from_json(json).map_err(sampler_error)?.into())
    }

    fn __repr__(&self) -> String {
        format!(
            "SamplerConfig(order={:?}, validate={}, parallel_threshold={})",
            self.order,
            if self.validate { "True" } else { "False" },
            self.parallel_threshold
        )
    }
}

impl SamplerConfig {
    /// Fields are settable from Python, so the order is re-checked here.
    pub fn settings(&self) -> PyResult<SamplerSettings> {
        Ok(SamplerSettings {
            order: parse_order(&self.order)?,
            validate: self.validate,
            parallel_threshold: self.parallel_threshold,
        })
    }
}

impl From<SamplerSettings> for SamplerConfig {
    fn from(settings: SamplerSettings) -> Self {
        SamplerConfig {
            order: settings.order.as_str().to_string(),
            validate: settings.validate,
            parallel_threshold: settings.parallel_threshold,
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerSettings::default().into()
    }
}
