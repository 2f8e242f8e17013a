//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::plan::PlanReport;
use crate::statistics::Histogram;
use crate::tuner::ThresholdReport;
use crate::types::Direction;

/// Format a PlanReport for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing. The headline shows the solved
/// sample size; the detection probability line is colored by whether the
/// target was actually reached (an unreachable target falls back to
/// sampling the whole population).
pub fn format_plan_report(report: &PlanReport) -> String {
    let mut output = String::new();

    let target_met = report.achieved_power >= report.target_power;
    let header = if target_met {
        format!(
            "{} {}",
            "\u{2713}".green().bold(),
            format!("SAMPLE {} ITEMS", report.min_sample_size).green().bold()
        )
    } else {
        format!(
            "{} {}",
            "\u{26A0}".yellow().bold(),
            "TARGET UNREACHABLE".yellow().bold()
        )
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let population_str = format!(
        "Population: {} ({} defective)",
        report.population, report.defectives
    );
    output.push_str(&format_box_line(&population_str));

    let target_str = format!("Target power: {:.1}%", report.target_power * 100.0);
    output.push_str(&format_box_line(&target_str));

    let achieved_pct = report.achieved_power * 100.0;
    let achieved_str = format!("Achieved power: {achieved_pct:.2}%");
    let achieved_colored = if target_met {
        achieved_str.green()
    } else {
        achieved_str.yellow()
    };
    output.push_str(&format_box_line(&achieved_colored.to_string()));

    output.push_str(&format_box_bottom());

    output.push_str(&format!(
        "\n{}\n",
        "Note: the plan assumes the defective count is exact; derived counts are floored."
            .dimmed()
            .italic()
    ));

    output
}

/// Format a ThresholdReport for human-readable terminal output.
///
/// Shows the threshold headline, the acceptance rate, sample counts, the
/// transform settings in force, and a block-character preview of the value
/// distribution. Empty data renders placeholders instead of failing.
pub fn format_threshold_report(report: &ThresholdReport) -> String {
    let mut output = String::new();

    let header = match report.threshold {
        Some(threshold) => format!(
            "{} {}",
            "\u{2713}".green().bold(),
            format!("THRESHOLD {threshold:.2} @ P{}", report.percentile)
                .green()
                .bold()
        ),
        None => format!(
            "{} {}",
            "\u{26A0}".yellow().bold(),
            "NO DATA".yellow().bold()
        ),
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let rule = match report.direction {
        Direction::Above => "accept >= threshold",
        Direction::Below => "accept <= threshold",
    };
    output.push_str(&format_box_line(&format!("Decision rule: {rule}")));

    let rate_str = match report.acceptance_rate {
        Some(rate) => format!("Acceptance rate: {:.1}%", rate * 100.0),
        None => "Acceptance rate: \u{2014}".to_string(),
    };
    output.push_str(&format_box_line(&rate_str));

    output.push_str(&format_box_line(&format!("Samples: {}", report.samples)));

    let transforms = format!(
        "Transforms: trim {}% per tail, log scale {}",
        report.trim_pct,
        if report.log_scale { "on" } else { "off" }
    );
    output.push_str(&format_box_line(&transforms.dimmed().to_string()));

    if let Some(ref summary) = report.summary {
        output.push_str(&format_box_separator());
        let range_str = format!("Range: {:.2} .. {:.2}", summary.min, summary.max);
        output.push_str(&format_box_line(&range_str));
        output.push_str(&format_box_line(&format!(
            "Distribution: {}",
            sparkline(&report.histogram)
        )));
    }

    output.push_str(&format_box_bottom());
    output
}

/// Render histogram counts as a block-character sparkline.
fn sparkline(histogram: &Histogram) -> String {
    const BLOCKS: [char; 8] = [
        '\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}',
        '\u{2588}',
    ];
    let max = histogram.max_count();
    if max == 0 {
        return String::new();
    }
    histogram
        .counts
        .iter()
        .map(|&c| {
            if c == 0 {
                ' '
            } else {
                let level = (c * (BLOCKS.len() - 1)).div_ceil(max).min(BLOCKS.len() - 1);
                BLOCKS[level]
            }
        })
        .collect()
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::SamplingPlan;
    use crate::tuner::ThresholdTuner;

    #[test]
    fn plan_report_shows_sample_size() {
        let report = SamplingPlan::new(1000).defect_rate_pct(1.0).solve();
        let output = format_plan_report(&report);
        assert!(output.contains("SAMPLE 258 ITEMS"));
        assert!(output.contains("1000 (10 defective)"));
        assert!(output.contains("Target power: 95.0%"));
    }

    #[test]
    fn plan_report_flags_unreachable_target() {
        let report = SamplingPlan::new(100).solve();
        let output = format_plan_report(&report);
        assert!(output.contains("TARGET UNREACHABLE"));
        assert!(output.contains("Achieved power: 0.00%"));
    }

    #[test]
    fn threshold_report_shows_threshold_and_rate() {
        let report = ThresholdTuner::new()
            .parse_text("56, 61, 63, 65, 66, 68, 70, 72, 73, 75")
            .percentile(50.0)
            .analyze();
        let output = format_threshold_report(&report);
        assert!(output.contains("THRESHOLD 67.00 @ P50"));
        assert!(output.contains("Acceptance rate: 50.0%"));
        assert!(output.contains("Samples: 10"));
    }

    #[test]
    fn threshold_report_handles_empty_data() {
        let report = ThresholdTuner::new().parse_text("").analyze();
        let output = format_threshold_report(&report);
        assert!(output.contains("NO DATA"));
        assert!(output.contains("\u{2014}"));
    }

    #[test]
    fn sparkline_scales_counts() {
        let histogram = Histogram::build(&[0.0, 0.0, 0.0, 0.0, 5.0, 9.0], 3);
        let line = sparkline(&histogram);
        assert_eq!(line.chars().count(), 3);
        assert_eq!(line.chars().next(), Some('\u{2588}'));
    }

    #[test]
    fn strip_ansi_codes_removes_color() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }
}
