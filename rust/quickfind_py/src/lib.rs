//! Python extension exposing cumulative-sum weighted index selection.

use pyo3::prelude::*;

#[cfg(not(target_os = "windows"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod arrays;
mod config;
mod functions;
mod logging;
mod sampler;

#[pymodule]
#[pyo3(name = "quickfind")]
fn quickfind_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(functions::quickfind, m)?)?;
    m.add_function(wrap_pyfunction!(functions::quickfind_checked, m)?)?;
    m.add_function(wrap_pyfunction!(functions::quickfind_many, m)?)?;
    m.add_function(wrap_pyfunction!(logging::init_logging, m)?)?;
    m.add_class::<config::SamplerConfig>()?;
    m.add_class::<sampler::WeightedIndex>()?;
    Ok(())
}
