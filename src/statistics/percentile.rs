//! Percentile computation by linear interpolation between order statistics.
//!
//! For a sorted sample `x` of size `n` at percentile `p` in `[0, 100]`:
//! ```text
//! idx = (p / 100) * (n - 1)
//! q = x[floor(idx)] + (idx - floor(idx)) * (x[ceil(idx)] - x[floor(idx)])
//! ```
//!
//! This is the "linear interpolation between closest ranks" estimator (the
//! default `'linear'` method in NumPy). The acceptance-rate computation in
//! this module depends on exactly this formula: a nearest-rank or midpoint
//! variant would shift thresholds and change reported rates.

use crate::constants::DECILES;
use crate::types::{Direction, Vector9};

/// Compute a percentile from an ascending-sorted slice.
///
/// `p` is clamped to `[0, 100]` before use. Returns `None` for empty input.
/// At an integral rank the order statistic is returned exactly; between
/// ranks the two adjacent order statistics are linearly interpolated.
///
/// The caller must ensure the data is sorted. No verification is performed.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let p = p.clamp(0.0, 100.0);
    let idx = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = idx - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Fraction of values accepted by a one-sided threshold rule.
///
/// For [`Direction::Above`] counts `v >= threshold`; for
/// [`Direction::Below`] counts `v <= threshold`. Returns `None` for empty
/// input. The slice does not need to be sorted for the count itself, but
/// thresholds produced by [`percentile`] assume the same sorted data.
pub fn acceptance_rate(sorted: &[f64], threshold: f64, direction: Direction) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let accepted = match direction {
        Direction::Above => sorted.iter().filter(|&&v| v >= threshold).count(),
        Direction::Below => sorted.iter().filter(|&&v| v <= threshold).count(),
    };
    Some(accepted as f64 / sorted.len() as f64)
}

/// Decile summary (10th through 90th percentile) of an ascending-sorted
/// slice, or `None` for empty input.
pub fn compute_deciles(sorted: &[f64]) -> Option<Vector9> {
    if sorted.is_empty() {
        return None;
    }
    Some(Vector9::from_fn(|i, _| {
        percentile(sorted, DECILES[i]).unwrap_or(f64::NAN)
    }))
}
