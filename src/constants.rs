//! Shared numeric constants.

/// Percentile grid for decile summaries (10th through 90th percentile).
pub const DECILES: [f64; 9] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

/// Default percentile grid for sweep exports.
pub const DEFAULT_SWEEP: [f64; 5] = [50.0, 75.0, 80.0, 90.0, 95.0];

/// Upper clamp for the detection target power.
///
/// A target of exactly 1.0 is unreachable for any plan with at least one
/// non-defective item, so the solver caps the target just below certainty
/// to guarantee termination at a meaningful sample size.
pub const MAX_TARGET_POWER: f64 = 0.9999;

/// Upper clamp for per-tail trimming, in percent.
pub const MAX_TRIM_PCT: f64 = 20.0;

/// Default number of bins for distribution previews.
pub const DEFAULT_HISTOGRAM_BINS: usize = 24;

/// Minimum numeric values for a delimited column to qualify as data.
pub const MIN_COLUMN_VALUES: usize = 3;
