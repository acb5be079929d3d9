use rayon::prelude::*;
use tracing::debug;

use crate::checked::{validate_draw, validate_inputs};
use crate::cumulative::CumulativeWeights;
use crate::error::SamplerError;
use crate::scan::quickfind;

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Batches with at least this many draws are spread over the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// One [`quickfind`] result per draw.
///
/// Well-formed weights are turned into a [`CumulativeWeights`] table once and
/// binary searched; anything else (negative or non-finite weights) falls back
/// to a full scan per draw so results match the single-draw call exactly.
pub fn quickfind_many(weights: &[f64], total: f64, draws: &[f64], options: &BatchOptions) -> Vec<usize> {
    match CumulativeWeights::new(weights) {
        Ok(table) => table.find_many(total, draws, options),
        Err(err) => {
            debug!(%err, draws = draws.len(), "falling back to linear scans");
            if draws.len() >= options.parallel_threshold {
                draws.par_iter().map(|&draw| quickfind(weights, total, draw)).collect()
            } else {
                draws.iter().map(|&draw| quickfind(weights, total, draw)).collect()
            }
        }
    }
}

/// Validating counterpart of [`quickfind_many`]: the weights and total are
/// checked once, then every draw must lie in `[0, 1]`.
pub fn quickfind_many_checked(
    weights: &[f64],
    total: f64,
    draws: &[f64],
    options: &BatchOptions,
) -> Result<Vec<usize>, SamplerError> {
    validate_inputs(weights, total)?;
    for &draw in draws {
        validate_draw(draw)?;
    }
    let table = CumulativeWeights::new(weights)?;
    Ok(table.find_many(total, draws, options))
}
