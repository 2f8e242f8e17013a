//! CSV export of threshold sweep results.

use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// Column header shared by single-row and sweep exports.
pub const CSV_HEADER: &str =
    "percentile,threshold,acceptance_rate,samples,direction,log_scale,trim_pct";

/// One evaluated percentile in a threshold sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    /// Percentile this row was evaluated at.
    pub percentile: f64,
    /// Computed threshold, `None` for empty data.
    pub threshold: Option<f64>,
    /// Acceptance rate at the threshold, `None` for empty data.
    pub acceptance_rate: Option<f64>,
    /// Sample count the row was computed over.
    pub samples: usize,
    /// Acceptance direction in force.
    pub direction: Direction,
    /// Whether the log transform was applied.
    pub log_scale: bool,
    /// Per-tail trim percentage in force.
    pub trim_pct: f64,
}

impl SweepRow {
    /// Render the row in export format: thresholds with 6 decimals,
    /// acceptance as a percentage with 4 decimals, empty fields for
    /// missing values.
    fn to_csv_line(&self) -> String {
        let threshold = match self.threshold {
            Some(t) => format!("{t:.6}"),
            None => String::new(),
        };
        let acceptance = match self.acceptance_rate {
            Some(r) => format!("{:.4}%", r * 100.0),
            None => String::new(),
        };
        format!(
            "{},{},{},{},{},{},{}",
            self.percentile,
            threshold,
            acceptance,
            self.samples,
            self.direction.as_str(),
            self.log_scale,
            self.trim_pct
        )
    }
}

/// Serialise sweep rows to CSV text with a header line.
pub fn rows_to_csv(rows: &[SweepRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(rows.iter().map(SweepRow::to_csv_line));
    lines.join("\n")
}
