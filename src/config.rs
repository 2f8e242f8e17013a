//! Configuration for threshold tuning.

use crate::constants::{DEFAULT_SWEEP, MAX_TRIM_PCT};
use crate::types::Direction;

/// Configuration options for [`ThresholdTuner`](crate::ThresholdTuner).
///
/// All numeric settings clamp to their valid range instead of rejecting
/// input: the tuner is wired into interactive surfaces where a bad knob
/// position should degrade the display, never crash it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Percentile that sets the decision threshold.
    ///
    /// Clamped to `[0, 100]`. Default: 90.
    pub percentile: f64,

    /// Side of the threshold that counts as accepted.
    ///
    /// Default: [`Direction::Above`] (accept values at or above the
    /// threshold).
    pub direction: Direction,

    /// Per-tail trim percentage applied before analysis.
    ///
    /// Values beyond the trimmed order statistics are capped, not dropped.
    /// Clamped to `[0, 20]`. Default: 0 (disabled).
    pub trim_pct: f64,

    /// Apply a base-10 log to positive values before analysis.
    ///
    /// Default: false.
    pub log_scale: bool,

    /// Percentile grid used by sweep exports.
    ///
    /// Entries outside `[0, 100]` are skipped at evaluation time.
    /// Default: 50, 75, 80, 90, 95.
    pub sweep: Vec<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            percentile: 90.0,
            direction: Direction::Above,
            trim_pct: 0.0,
            log_scale: false,
            sweep: DEFAULT_SWEEP.to_vec(),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the threshold percentile (clamped to `[0, 100]`).
    pub fn percentile(mut self, p: f64) -> Self {
        self.percentile = p.clamp(0.0, 100.0);
        self
    }

    /// Set the acceptance direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the per-tail trim percentage (clamped to `[0, 20]`).
    pub fn trim_pct(mut self, pct: f64) -> Self {
        self.trim_pct = pct.clamp(0.0, MAX_TRIM_PCT);
        self
    }

    /// Enable or disable the base-10 log transform.
    pub fn log_scale(mut self, enabled: bool) -> Self {
        self.log_scale = enabled;
        self
    }

    /// Set the sweep percentile grid.
    pub fn sweep(mut self, percentiles: Vec<f64>) -> Self {
        self.sweep = percentiles;
        self
    }

    /// Check if the configuration is valid.
    ///
    /// Returns an error message if a directly-constructed configuration
    /// carries out-of-range values the builder methods would have clamped.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.percentile) {
            return Err("percentile must be in [0, 100]".to_string());
        }
        if !(0.0..=MAX_TRIM_PCT).contains(&self.trim_pct) {
            return Err(format!("trim_pct must be in [0, {MAX_TRIM_PCT}]"));
        }
        Ok(())
    }
}
