use rayon::prelude::*;
use tracing::debug;

use crate::batch::BatchOptions;
use crate::error::SamplerError;
use crate::scan::prefix_sums;

/// Precomputed running sums for answering many draws against one weight vector.
///
/// Only finite, non-negative weights are accepted so the running sums are
/// non-decreasing and can be binary searched. Every lookup returns the same
/// index as [`crate::quickfind`] would for the same weights.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeWeights {
    cumulative: Vec<f64>,
    total: f64,
}

impl CumulativeWeights {
    pub fn new(weights: &[f64]) -> Result<Self, SamplerError> {
        for (index, &value) in weights.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(SamplerError::InvalidWeight { index, value });
            }
        }

        let cumulative = prefix_sums(weights);
        let total = cumulative.last().copied().unwrap_or(0.0);
        debug!(len = cumulative.len(), total, "built cumulative weights");
        Ok(Self { cumulative, total })
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Sum of all weights, accumulated in index order.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn prefix_sums(&self) -> &[f64] {
        &self.cumulative
    }

    /// 1-based index for `draw` scaled by a caller-declared `total`, `0` if
    /// the threshold lies above every running sum.
    pub fn find(&self, total: f64, draw: f64) -> usize {
        let threshold = draw * total;
        let index = self.cumulative.partition_point(|&sum| sum < threshold);
        // A NaN threshold leaves `index` at 0 with a failing comparison.
        match self.cumulative.get(index) {
            Some(&sum) if sum >= threshold => index + 1,
            _ => 0,
        }
    }

    /// Same as [`find`](Self::find) using the table's own total.
    pub fn find_scaled(&self, draw: f64) -> usize {
        self.find(self.total, draw)
    }

    pub fn find_many(&self, total: f64, draws: &[f64], options: &BatchOptions) -> Vec<usize> {
        if draws.len() >= options.parallel_threshold {
            draws.par_iter().map(|&draw| self.find(total, draw)).collect()
        } else {
            draws.iter().map(|&draw| self.find(total, draw)).collect()
        }
    }
}
