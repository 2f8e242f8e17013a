//! Statistical methods for threshold tuning.
//!
//! This module provides the numeric core behind the threshold tuner:
//! - Percentile computation by linear interpolation between order statistics
//! - Acceptance rates for one-sided decision rules
//! - Decile summaries for distribution previews
//! - Tail trimming and log-scale transforms
//! - Fixed-bin histograms

mod histogram;
mod percentile;
mod transform;

pub use histogram::Histogram;
pub use percentile::{acceptance_rate, compute_deciles, percentile};
pub use transform::{apply_transforms, log10_scale, trim_tails};
