//! # sampling-oracle
//!
//! Plan audit samples and tune percentile decision thresholds.
//!
//! This crate provides two small, pure numeric engines:
//!
//! - **Sampling plans**: exact hypergeometric detection probabilities for
//!   sampling without replacement, and the minimum sample size that catches
//!   at least one defective item with a target probability.
//! - **Percentile thresholds**: linearly-interpolated percentiles over
//!   free-form numeric data, with the acceptance rate implied by a
//!   one-sided accept-above/accept-below rule.
//!
//! Both engines are synchronous, allocation-light, and deterministic: the
//! same inputs always produce the same outputs, so callers may cache by
//! input equality at their own discretion. Degenerate input (empty data,
//! zero population, unparseable text) yields `None` or a documented sentinel
//! value; out-of-range parameters clamp to the nearest valid boundary. The
//! engines never panic on user data.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sampling_oracle::{Direction, SamplingPlan, ThresholdTuner};
//!
//! // How many items must an audit sample to catch a 0.5% defect rate
//! // with 95% probability?
//! let plan = SamplingPlan::new(10_000)
//!     .defect_rate_pct(0.5)
//!     .target_power(0.95)
//!     .solve();
//! println!("{plan}");
//!
//! // Where does the 90th-percentile threshold land on these scores, and
//! // what fraction would an accept-above rule let through?
//! let report = ThresholdTuner::new()
//!     .parse_text("56, 61, 63, 65, 66, 68, 70, 72, 73, 75")
//!     .percentile(90.0)
//!     .direction(Direction::Above)
//!     .analyze();
//! println!("threshold {:?}, rate {:?}", report.threshold, report.acceptance_rate);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod parse;
mod plan;
mod report;
mod tuner;
mod types;

// Functional modules
pub mod combinatorics;
pub mod ingest;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use combinatorics::{binomial_coefficient, minimum_sample_size, probability_zero_defects};
pub use config::Config;
pub use constants::{
    DECILES, DEFAULT_HISTOGRAM_BINS, DEFAULT_SWEEP, MAX_TARGET_POWER, MAX_TRIM_PCT,
    MIN_COLUMN_VALUES,
};
pub use ingest::{scan_delimited, ColumnScan, ScanWarning};
pub use parse::parse_numbers;
pub use plan::{PlanReport, SamplingPlan};
pub use report::{rows_to_csv, SweepRow, CSV_HEADER};
pub use tuner::{DataSummary, ThresholdReport, ThresholdTuner};
pub use types::{Direction, Vector9};
