//! Free-form numeric input parsing.

/// Parse a delimited list of numbers from free-form text.
///
/// Splits on any run of space, comma, newline, tab, or semicolon, trims the
/// tokens, and keeps every token that parses to a finite number. Tokens that
/// do not parse (or parse to NaN/infinity) are dropped silently rather than
/// reported. Values come back in input order; sorting is the caller's job.
pub fn parse_numbers(input: &str) -> Vec<f64> {
    input
        .split(|c: char| matches!(c, ' ' | ',' | '\n' | '\t' | ';'))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect()
}
