//! Fixed-bin histograms for distribution previews.

use serde::{Deserialize, Serialize};

/// Equal-width histogram over a numeric sample.
///
/// Holds `bins + 1` edge positions and one count per bin. An empty sample
/// produces an empty histogram (no edges, no counts) rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edge positions, `counts.len() + 1` entries (empty for empty input).
    pub edges: Vec<f64>,
    /// Per-bin value counts.
    pub counts: Vec<usize>,
    /// Smallest input value (0 for empty input).
    pub min: f64,
    /// Largest input value (0 for empty input).
    pub max: f64,
}

impl Histogram {
    /// Build a histogram with the requested number of bins (at least 1).
    ///
    /// The bin width is `(max - min) / bins`; constant data gets a unit
    /// width so every value lands in the first bin instead of dividing by
    /// zero. Values on the upper boundary are counted in the last bin.
    pub fn build(values: &[f64], bins: usize) -> Self {
        if values.is_empty() {
            return Self {
                edges: Vec::new(),
                counts: Vec::new(),
                min: 0.0,
                max: 0.0,
            };
        }
        let bins = bins.max(1);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = if max - min > 0.0 { max - min } else { 1.0 };
        let edges: Vec<f64> = (0..=bins)
            .map(|i| min + (i as f64 * width) / bins as f64)
            .collect();
        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - min) / width) * bins as f64).floor();
            let idx = if idx < 0.0 {
                0
            } else if idx >= bins as f64 {
                bins - 1
            } else {
                idx as usize
            };
            counts[idx] += 1;
        }
        Self {
            edges,
            counts,
            min,
            max,
        }
    }

    /// True when the histogram was built from an empty sample.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Largest single bin count (0 for an empty histogram).
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
