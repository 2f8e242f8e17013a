//! Threshold tuner: from raw score text to a percentile decision rule.
//!
//! The pipeline is fixed: parse (or take) values, trim tails, apply the log
//! transform, sort ascending, compute the percentile threshold, then report
//! the acceptance rate the threshold implies. Degenerate input flows through
//! as `None` fields in the report; nothing in the pipeline panics on user
//! data.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::DEFAULT_HISTOGRAM_BINS;
use crate::parse::parse_numbers;
use crate::report::SweepRow;
use crate::statistics::{
    acceptance_rate, apply_transforms, compute_deciles, percentile, Histogram,
};
use crate::types::{Direction, Vector9};

/// Entry point for threshold tuning.
///
/// # Example
///
/// ```ignore
/// use sampling_oracle::{Direction, ThresholdTuner};
///
/// let report = ThresholdTuner::new()
///     .parse_text("56, 61, 63, 65, 70, 82, 90")
///     .percentile(90.0)
///     .direction(Direction::Above)
///     .analyze();
/// println!("threshold: {:?}", report.threshold);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThresholdTuner {
    config: Config,
    values: Vec<f64>,
}

impl ThresholdTuner {
    /// Create a tuner with default configuration and no data.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            values: Vec::new(),
        }
    }

    /// Create a tuner from an existing configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            values: Vec::new(),
        }
    }

    /// Supply data values directly.
    pub fn values(mut self, values: &[f64]) -> Self {
        self.values = values.to_vec();
        self
    }

    /// Parse data values from free-form text (see
    /// [`parse_numbers`](crate::parse_numbers)).
    pub fn parse_text(mut self, text: &str) -> Self {
        self.values = parse_numbers(text);
        self
    }

    /// Set the threshold percentile (clamped to `[0, 100]`).
    pub fn percentile(mut self, p: f64) -> Self {
        self.config = self.config.percentile(p);
        self
    }

    /// Set the acceptance direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config = self.config.direction(direction);
        self
    }

    /// Set the per-tail trim percentage (clamped to `[0, 20]`).
    pub fn trim_pct(mut self, pct: f64) -> Self {
        self.config = self.config.trim_pct(pct);
        self
    }

    /// Enable or disable the base-10 log transform.
    pub fn log_scale(mut self, enabled: bool) -> Self {
        self.config = self.config.log_scale(enabled);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Transformed, ascending-sorted copy of the data.
    fn prepared(&self) -> Vec<f64> {
        let mut out = apply_transforms(&self.values, self.config.log_scale, self.config.trim_pct);
        out.sort_by(|a, b| a.total_cmp(b));
        out
    }

    /// Run the pipeline and assemble a report.
    pub fn analyze(&self) -> ThresholdReport {
        let sorted = self.prepared();
        let threshold = percentile(&sorted, self.config.percentile);
        let rate =
            threshold.and_then(|t| acceptance_rate(&sorted, t, self.config.direction));
        let summary = DataSummary::from_sorted(&sorted);
        let histogram = Histogram::build(&sorted, DEFAULT_HISTOGRAM_BINS);
        ThresholdReport {
            samples: sorted.len(),
            percentile: self.config.percentile,
            direction: self.config.direction,
            threshold,
            acceptance_rate: rate,
            log_scale: self.config.log_scale,
            trim_pct: self.config.trim_pct,
            summary,
            histogram,
        }
    }

    /// Evaluate a grid of percentiles over the same prepared data.
    ///
    /// Entries outside `[0, 100]` are skipped, not clamped: a sweep is an
    /// export of explicitly-requested grid points, unlike the single
    /// interactive percentile which degrades gracefully.
    pub fn sweep(&self, percentiles: &[f64]) -> Vec<SweepRow> {
        let sorted = self.prepared();
        percentiles
            .iter()
            .copied()
            .filter(|p| (0.0..=100.0).contains(p))
            .map(|p| {
                let threshold = percentile(&sorted, p);
                let rate =
                    threshold.and_then(|t| acceptance_rate(&sorted, t, self.config.direction));
                SweepRow {
                    percentile: p,
                    threshold,
                    acceptance_rate: rate,
                    samples: sorted.len(),
                    direction: self.config.direction,
                    log_scale: self.config.log_scale,
                    trim_pct: self.config.trim_pct,
                }
            })
            .collect()
    }

    /// Evaluate the configured sweep grid.
    pub fn sweep_configured(&self) -> Vec<SweepRow> {
        self.sweep(&self.config.sweep)
    }
}

/// Distribution summary of the prepared data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    /// Number of values after parsing and transforms.
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Decile profile (10th through 90th percentile).
    pub deciles: Vector9,
}

impl DataSummary {
    /// Summarise an ascending-sorted slice, or `None` for empty input.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let deciles = compute_deciles(sorted)?;
        Some(Self {
            count: sorted.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            deciles,
        })
    }
}

/// Result of a threshold tuning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdReport {
    /// Number of values the thresholds were computed over.
    pub samples: usize,
    /// Percentile the threshold was taken at.
    pub percentile: f64,
    /// Acceptance direction in force.
    pub direction: Direction,
    /// Decision threshold, `None` for empty data.
    pub threshold: Option<f64>,
    /// Acceptance rate at the threshold, `None` for empty data.
    pub acceptance_rate: Option<f64>,
    /// Whether the log transform was applied.
    pub log_scale: bool,
    /// Per-tail trim percentage in force.
    pub trim_pct: f64,
    /// Distribution summary, `None` for empty data.
    pub summary: Option<DataSummary>,
    /// Distribution preview histogram.
    pub histogram: Histogram,
}

impl ThresholdReport {
    /// Convert the report into a single export row.
    pub fn to_row(&self) -> SweepRow {
        SweepRow {
            percentile: self.percentile,
            threshold: self.threshold,
            acceptance_rate: self.acceptance_rate,
            samples: self.samples,
            direction: self.direction,
            log_scale: self.log_scale,
            trim_pct: self.trim_pct,
        }
    }
}
