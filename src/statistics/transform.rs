//! Pre-analysis data transforms: tail trimming and log scaling.

/// Winsorize both tails by `trim_pct` percent.
///
/// Values beyond the per-tail bound are capped (not dropped), so the sample
/// size is preserved while extreme outliers stop dominating the percentile
/// grid. The bounds are the order statistics `trim_pct` percent in from each
/// end: `k = floor(trim_pct / 100 * len)`, low bound at index `k`, high
/// bound at index `len - 1 - k`. With `trim_pct <= 0` (or empty input) the
/// data passes through unchanged. Output preserves input order.
pub fn trim_tails(values: &[f64], trim_pct: f64) -> Vec<f64> {
    if trim_pct <= 0.0 || values.is_empty() {
        return values.to_vec();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let k = ((trim_pct / 100.0) * n as f64).floor() as usize;
    let low = sorted[k.min(n - 1)];
    let high = sorted[n - 1 - k.min(n - 1)];
    values.iter().map(|&v| v.min(high).max(low)).collect()
}

/// Replace each positive value with its base-10 logarithm.
///
/// Zero and negative values pass through unchanged, so mixed-sign data does
/// not collapse into NaN.
pub fn log10_scale(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v > 0.0 { v.log10() } else { v })
        .collect()
}

/// Apply the configured transforms in analysis order: trim first, then log.
pub fn apply_transforms(values: &[f64], log_scale: bool, trim_pct: f64) -> Vec<f64> {
    let trimmed = trim_tails(values, trim_pct);
    if log_scale {
        log10_scale(&trimmed)
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_trim_passes_through() {
        let data = vec![5.0, 1.0, 9.0];
        assert_eq!(trim_tails(&data, 0.0), data);
        assert_eq!(trim_tails(&data, -3.0), data);
    }

    #[test]
    fn trim_caps_extremes() {
        // 10 values, 10% trim: k = 1, bounds at sorted[1] = 2 and sorted[8] = 9.
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let trimmed = trim_tails(&data, 10.0);
        assert_eq!(trimmed[0], 2.0);
        assert_eq!(trimmed[9], 9.0);
        assert_eq!(&trimmed[1..9], &data[1..9]);
    }

    #[test]
    fn trim_preserves_order_and_length() {
        let data = vec![100.0, 1.0, 50.0, 2.0, 99.0];
        let trimmed = trim_tails(&data, 20.0);
        assert_eq!(trimmed.len(), data.len());
        // k = 1: bounds at sorted[1] = 2 and sorted[3] = 99.
        assert_eq!(trimmed, vec![99.0, 2.0, 50.0, 2.0, 99.0]);
    }

    #[test]
    fn heavy_trim_collapses_to_low_bound() {
        // 3 values, 40% trim: k = 1, low = sorted[1], high = sorted[1].
        let data = vec![1.0, 5.0, 9.0];
        let trimmed = trim_tails(&data, 40.0);
        assert_eq!(trimmed, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn log_scale_skips_non_positive() {
        let data = vec![100.0, 0.0, -10.0, 1000.0];
        let scaled = log10_scale(&data);
        assert_eq!(scaled, vec![2.0, 0.0, -10.0, 3.0]);
    }

    #[test]
    fn transforms_apply_trim_before_log() {
        let data = vec![1.0, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1e6, 1e7, 1e8, 1e9];
        let out = apply_transforms(&data, true, 10.0);
        // k = 1: low = 10, high = 1e8; the 1 caps to 10 and the 1e9 to 1e8
        // before the log is applied.
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 1.0);
        assert_eq!(out[9], 8.0);
    }

    #[test]
    fn empty_input() {
        assert!(apply_transforms(&[], true, 10.0).is_empty());
    }
}
