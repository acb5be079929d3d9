//! Weighted index selection by cumulative sum.
//!
//! Given weights `w`, a caller-declared total and a draw in `[0, 1)`, the
//! selected entry is the smallest 1-based `i` with `w[0] + .. + w[i-1] >= draw * total`.
//! `0` means no entry reached the threshold.

mod batch;
mod checked;
mod config;
mod cumulative;
mod error;
mod layout;
mod scan;

pub use batch::{quickfind_many, quickfind_many_checked, BatchOptions, DEFAULT_PARALLEL_THRESHOLD};
pub use checked::{quickfind_checked, validate_draw, validate_inputs, TOTAL_RELATIVE_TOLERANCE};
pub use config::SamplerSettings;
pub use cumulative::CumulativeWeights;
pub use error::SamplerError;
pub use layout::{flatten, Order};
pub use scan::{prefix_sums, quickfind};
