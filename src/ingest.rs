//! Delimited numeric column extraction.
//!
//! Recovers a usable numeric series from pasted CSV/TSV-style text without
//! asking the user for a schema: every candidate delimiter is tried, the
//! column with the most numeric cells wins, and as a last resort the text is
//! scanned for bare numeric literals. Anything below three values is
//! rejected as noise rather than data.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_COLUMN_VALUES;

/// Delimiters tried during a column scan, in preference order.
pub const SCAN_DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

/// Result of scanning delimited text for numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnScan {
    /// Numeric cells per column, for the winning delimiter.
    pub columns: Vec<Vec<f64>>,
    /// Index of the column with the most numeric cells.
    pub best: usize,
}

impl ColumnScan {
    /// Values of the winning column.
    pub fn best_values(&self) -> &[f64] {
        &self.columns[self.best]
    }

    /// Human-readable status line for the scan.
    pub fn status(&self) -> String {
        format!(
            "Loaded {} values from column {}",
            self.best_values().len(),
            self.best + 1
        )
    }
}

/// Warning from a failed column scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanWarning {
    /// No delimiter produced a numeric column with enough values, and the
    /// literal fallback also came up short.
    NoNumericColumn {
        /// Minimum values a column needs to qualify.
        required: usize,
    },
}

impl ScanWarning {
    /// Check if this warning means no data could be loaded at all.
    pub fn is_critical(&self) -> bool {
        matches!(self, ScanWarning::NoNumericColumn { .. })
    }

    /// Get a human-readable description of the warning.
    pub fn description(&self) -> String {
        match self {
            ScanWarning::NoNumericColumn { required } => format!(
                "No numeric column detected (a column needs at least {required} \
                 numeric values to qualify)."
            ),
        }
    }
}

/// Scan delimited text for the best numeric column.
///
/// Lines are split on each delimiter in [`SCAN_DELIMITERS`]; per delimiter,
/// cells that parse to finite numbers are collected per column. A delimiter
/// qualifies when any of its columns reaches [`MIN_COLUMN_VALUES`] values,
/// and the delimiter whose best column holds the most values wins overall.
/// When no delimiter qualifies, the whole text is scanned for bare numeric
/// literals instead. Returns a warning when even the fallback finds fewer
/// than [`MIN_COLUMN_VALUES`] values.
pub fn scan_delimited(text: &str) -> Result<ColumnScan, ScanWarning> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();

    let mut best: Option<ColumnScan> = None;
    for delim in SCAN_DELIMITERS {
        let mut columns: Vec<Vec<f64>> = Vec::new();
        for line in &lines {
            for (idx, cell) in line.split(delim).enumerate() {
                if columns.len() <= idx {
                    columns.resize_with(idx + 1, Vec::new);
                }
                if let Some(num) = parse_finite(cell) {
                    columns[idx].push(num);
                }
            }
        }
        if !columns.iter().any(|c| c.len() >= MIN_COLUMN_VALUES) {
            continue;
        }
        // Best column for this delimiter: most numeric cells, first on ties.
        let local_best = columns
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.len().cmp(&b.len()).then(ib.cmp(ia)))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let local_len = columns[local_best].len();
        let current_len = best.as_ref().map_or(0, |s| s.best_values().len());
        if local_len > current_len {
            best = Some(ColumnScan {
                columns,
                best: local_best,
            });
        }
    }

    if let Some(scan) = best {
        return Ok(scan);
    }

    // Fallback: harvest bare numeric literals from the raw text.
    let literals = extract_literals(text);
    if literals.len() >= MIN_COLUMN_VALUES {
        return Ok(ColumnScan {
            columns: vec![literals],
            best: 0,
        });
    }

    Err(ScanWarning::NoNumericColumn {
        required: MIN_COLUMN_VALUES,
    })
}

fn parse_finite(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Extract numeric literals (optional sign, decimal digits with optional
/// fraction, optional exponent) from arbitrary text.
fn extract_literals(text: &str) -> Vec<f64> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        let mut j = i;
        if bytes[j] == b'+' || bytes[j] == b'-' {
            j += 1;
        }
        let int_len = digit_run(bytes, j);
        j += int_len;
        let mut frac_len = 0;
        if j < bytes.len() && bytes[j] == b'.' {
            frac_len = digit_run(bytes, j + 1);
            if frac_len > 0 {
                j += 1 + frac_len;
            }
        }
        if int_len == 0 && frac_len == 0 {
            // No digits here; move past one byte and retry.
            i = start + 1;
            continue;
        }
        if j < bytes.len() && (bytes[j] == b'e' || bytes[j] == b'E') {
            let mut k = j + 1;
            if k < bytes.len() && (bytes[k] == b'+' || bytes[k] == b'-') {
                k += 1;
            }
            let exp_len = digit_run(bytes, k);
            if exp_len > 0 {
                j = k + exp_len;
            }
        }
        if let Some(num) = parse_finite(&text[start..j]) {
            out.push(num);
        }
        i = j;
    }
    out
}

fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes[from.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}
