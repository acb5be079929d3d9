use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs a stderr tracing subscriber. `RUST_LOG` wins over `level`.
/// Calling it again once a subscriber is installed does nothing.
#[pyfunction]
#[pyo3(signature=(level="info"))]
pub fn init_logging(level: &str) -> PyResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| PyValueError::new_err(e.to_string()))?,
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        debug!("tracing subscriber already installed");
    }
    Ok(())
}
