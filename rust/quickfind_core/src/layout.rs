use ndarray::{ArrayView, Dimension};
use serde::{Deserialize, Serialize};

use crate::error::SamplerError;

/// Flattening order for multi-dimensional weight arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Order {
    /// Row-major, NumPy's default.
    #[default]
    C,
    /// Column-major, as MATLAB stores matrices.
    F,
}

impl Order {
    pub fn parse(order: &str) -> Result<Self, SamplerError> {
        match order {
            "C" | "c" => Ok(Order::C),
            "F" | "f" => Ok(Order::F),
            other => Err(SamplerError::InvalidOrder(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Order::C => "C",
            Order::F => "F",
        }
    }
}

/// Copies every element of `view` into a flat `f64` vector, walking the
/// array in `order`. The length is the product of the dimensions.
pub fn flatten<T, D>(view: ArrayView<'_, T, D>, order: Order) -> Vec<f64>
where
    T: Copy + Into<f64>,
    D: Dimension,
{
    match order {
        Order::C => view.iter().map(|&v| v.into()).collect(),
        Order::F => view.reversed_axes().iter().map(|&v| v.into()).collect(),
    }
}
