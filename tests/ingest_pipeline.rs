//! Pasted-file ingestion feeding the threshold tuner.

use sampling_oracle::{scan_delimited, ScanWarning, ThresholdTuner};

/// A scores CSV flows from raw text to a threshold report.
#[test]
fn csv_to_threshold_report() {
    let text = "\
name,score
alpha,56
beta,61
gamma,63
delta,65
epsilon,92
";
    let scan = scan_delimited(text).expect("numeric column expected");
    assert_eq!(scan.status(), "Loaded 5 values from column 2");

    let report = ThresholdTuner::new()
        .values(scan.best_values())
        .percentile(50.0)
        .analyze();
    assert_eq!(report.samples, 5);
    assert_eq!(report.threshold, Some(63.0));
}

/// Tab-separated exports work without any configuration.
#[test]
fn tsv_to_threshold_report() {
    let text = "ts\tlatency_ms\n1\t12.5\n2\t14.0\n3\t11.0\n4\t90.0";
    let scan = scan_delimited(text).expect("numeric column expected");
    // Two numeric columns of equal length: the first one wins.
    assert_eq!(scan.best, 0);
    assert_eq!(scan.columns.len(), 2);
    assert_eq!(scan.columns[1], vec![12.5, 14.0, 11.0, 90.0]);
}

/// Prose falls back to bare literal extraction.
#[test]
fn prose_fallback() {
    let text = "latencies today: 12.5ms, 14ms and 11ms (p99 was 90ms)";
    let scan = scan_delimited(text).expect("fallback expected");
    assert!(scan.best_values().len() >= 4);
}

/// Unusable input reports a warning the caller can display.
#[test]
fn unusable_input_warns() {
    let err = scan_delimited("header only\n").unwrap_err();
    assert_eq!(
        err,
        ScanWarning::NoNumericColumn { required: 3 }
    );
    assert!(err.is_critical());
    assert!(!err.description().is_empty());
}
