use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    #[error("weight sequence is empty")]
    Empty,
    #[error("weight at index {index} is {value}, expected a finite non-negative value")]
    InvalidWeight { index: usize, value: f64 },
    #[error("total must be finite and positive, got {0}")]
    InvalidTotal(f64),
    #[error("draw must lie in [0, 1], got {0}")]
    DrawOutOfRange(f64),
    #[error("declared total {declared} does not match the sum of weights {actual}")]
    TotalMismatch { declared: f64, actual: f64 },
    #[error("order must be 'C' or 'F', got {0:?}")]
    InvalidOrder(String),
    #[error("invalid sampler config: {0}")]
    InvalidConfig(String),
}
