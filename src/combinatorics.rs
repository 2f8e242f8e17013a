//! Binomial coefficients and hypergeometric detection probabilities.
//!
//! This module answers the sampling-without-replacement questions behind a
//! sampling plan: if a population of `N` items hides `K` defective ones, how
//! likely is a sample of `n` items to contain none of them, and how large
//! must `n` be for the sample to catch at least one defect with a target
//! probability?
//!
//! The zero-defect probability is the hypergeometric mass at zero:
//! ```text
//! P(X = 0) = C(N - K, n) / C(N, n)
//! ```
//!
//! Coefficients are computed with an incremental multiply/divide loop over
//! floating-point accumulators, reducing the running numerator/denominator
//! pair by their GCD at every step. The reduction keeps both accumulators
//! exact until the coefficient itself outgrows the 53-bit mantissa, which
//! covers the population sizes this tool targets. Past roughly `1e308` the
//! running numerator saturates to infinity and ratios of such coefficients
//! degenerate; see [`binomial_coefficient`] for the resulting contract.

/// Greatest common divisor by the Euclidean algorithm on absolute values.
///
/// Returns 1 when both inputs are 0, so callers can divide by the result
/// unconditionally. Non-finite inputs fall out of the remainder loop and
/// yield the last finite operand (or 1).
pub fn gcd(a: f64, b: f64) -> f64 {
    let mut a = a.abs();
    let mut b = b.abs();
    while b > 0.0 {
        let t = b;
        b = a % t;
        a = t;
    }
    if a > 0.0 {
        a
    } else {
        1.0
    }
}

/// Binomial coefficient `C(n, r)` as a floating-point value.
///
/// Returns 0 for `r < 0` or `r > n`, and 1 for `r == 0` or `r == n`.
/// Otherwise applies the symmetric reduction `r = min(r, n - r)` and runs
/// the GCD-reduced accumulator loop described in the module docs.
///
/// Results are exact while `C(n, r)` fits in 53 bits and accurate to double
/// precision well beyond that. Very large coefficients saturate to
/// `f64::INFINITY`; downstream ratios of two saturated coefficients are NaN.
/// That saturation behavior is part of the observable contract of
/// [`probability_zero_defects`] and is deliberately not "fixed" here.
pub fn binomial_coefficient(n: u64, r: i64) -> f64 {
    if r < 0 || r as u64 > n {
        return 0.0;
    }
    let r = r as u64;
    if r == 0 || r == n {
        return 1.0;
    }
    let r = r.min(n - r);
    let mut numer = 1.0_f64;
    let mut denom = 1.0_f64;
    for i in 1..=r {
        numer *= (n - r + i) as f64;
        denom *= i as f64;
        let g = gcd(numer, denom);
        numer /= g;
        denom /= g;
    }
    numer / denom
}

/// Probability that a sample of `sample` items drawn without replacement
/// from `population` contains none of the `defective` marked items.
///
/// Edge cases, applied in order:
///
/// - `sample > population` → 0. This is a compatibility convention, not a
///   hypergeometric identity: drawing more than the population is not a
///   meaningful without-replacement experiment, and the tool has always
///   reported certain detection for it. Kept as-is so displayed results
///   do not drift.
/// - `defective == 0` → 1 (nothing to find).
/// - `sample > population - defective` → 0 (the sample cannot avoid every
///   defective item).
/// - Otherwise `C(population - defective, sample) / C(population, sample)`.
///
/// A `defective` count larger than the population is clamped down to it.
pub fn probability_zero_defects(population: u64, defective: u64, sample: u64) -> f64 {
    let defective = defective.min(population);
    if sample > population {
        return 0.0;
    }
    if defective == 0 {
        return 1.0;
    }
    if sample > population - defective {
        return 0.0;
    }
    binomial_coefficient(population - defective, sample as i64)
        / binomial_coefficient(population, sample as i64)
}

/// Smallest sample size whose detection probability reaches `target_power`.
///
/// Scans `n = 1..=population` and returns the first `n` with
/// `1 - P(X = 0) >= target_power`. When no sample size satisfies the target
/// (for example `defective == 0` with a positive target), the search
/// exhausts and returns `population`.
///
/// `population` is clamped to at least 1 and `target_power` to
/// `[0, MAX_TARGET_POWER]` so the search always terminates with a defined
/// result. The scan is linear on purpose: detection probability is
/// non-decreasing in `n` over the exact regime, but the saturated-coefficient
/// regime breaks the strict monotonicity a bisection would rely on.
pub fn minimum_sample_size(population: u64, defective: u64, target_power: f64) -> u64 {
    let population = population.max(1);
    let target_power = target_power.clamp(0.0, crate::constants::MAX_TARGET_POWER);
    for n in 1..=population {
        let p0 = probability_zero_defects(population, defective, n);
        if 1.0 - p0 >= target_power {
            return n;
        }
    }
    population
}
