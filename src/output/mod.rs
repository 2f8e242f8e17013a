//! Output formatting for plan and threshold reports.

mod terminal;

pub use terminal::{format_plan_report, format_threshold_report};
