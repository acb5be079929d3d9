use tracing::trace;

/// Returns the 1-based index of the first weight at which the running sum
/// reaches `draw * total`, or `0` when the scan ends below the threshold.
///
/// `total` is trusted as given. Empty input, a total that overstates the real
/// sum, NaNs and rounding at the last element all fall through to `0`.
pub fn quickfind(weights: &[f64], total: f64, draw: f64) -> usize {
    let threshold = draw * total;
    let mut cumsum = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumsum += w;
        if cumsum >= threshold {
            return i + 1;
        }
    }
    trace!(len = weights.len(), threshold, cumsum, "threshold not reached");
    0
}

/// Running sums in index order, accumulated exactly as [`quickfind`] does.
pub fn prefix_sums(weights: &[f64]) -> Vec<f64> {
    let mut sums = Vec::with_capacity(weights.len());
    let mut total = 0.0;
    for w in weights {
        total += w;
        sums.push(total);
    }
    sums
}
