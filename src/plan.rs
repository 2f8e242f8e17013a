//! Sampling plan construction and solving.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combinatorics::{minimum_sample_size, probability_zero_defects};
use crate::constants::MAX_TARGET_POWER;

/// Builder for a hypergeometric sampling plan.
///
/// Describes a population with a known (or estimated) number of defective
/// items and a detection target, then solves for the smallest sample that
/// meets the target when drawing without replacement.
///
/// # Example
///
/// ```ignore
/// use sampling_oracle::SamplingPlan;
///
/// let report = SamplingPlan::new(10_000)
///     .defect_rate_pct(0.5)
///     .target_power(0.95)
///     .solve();
/// println!("{report}");
/// ```
#[derive(Debug, Clone)]
pub struct SamplingPlan {
    population: u64,
    defect_rate_pct: f64,
    defective_count: u64,
    target_power: f64,
}

impl SamplingPlan {
    /// Create a plan for a population of the given size.
    ///
    /// Defaults: no explicit defective count, a 0% defect rate, and a 95%
    /// detection target.
    pub fn new(population: u64) -> Self {
        Self {
            population,
            defect_rate_pct: 0.0,
            defective_count: 0,
            target_power: 0.95,
        }
    }

    /// Set the assumed defect rate as a percentage of the population.
    ///
    /// Used only when no explicit defective count is set; negative rates
    /// are treated as 0.
    pub fn defect_rate_pct(mut self, pct: f64) -> Self {
        self.defect_rate_pct = pct;
        self
    }

    /// Set an explicit defective count, overriding the rate when positive.
    pub fn defective_count(mut self, count: u64) -> Self {
        self.defective_count = count;
        self
    }

    /// Set the target probability of detecting at least one defect.
    ///
    /// Clamped to `[0, 0.9999]` at solve time.
    pub fn target_power(mut self, power: f64) -> Self {
        self.target_power = power;
        self
    }

    /// Population size after sanitisation (at least 1).
    pub fn resolved_population(&self) -> u64 {
        self.population.max(1)
    }

    /// Defective count after sanitisation.
    ///
    /// An explicit positive count wins; otherwise the count is derived from
    /// the defect rate as `floor(rate / 100 * population)`. Either way the
    /// result is clamped into `[0, population]`.
    pub fn resolved_defectives(&self) -> u64 {
        let population = self.resolved_population();
        let count = if self.defective_count > 0 {
            self.defective_count
        } else {
            let rate = self.defect_rate_pct.max(0.0) / 100.0;
            (rate * population as f64).floor() as u64
        };
        count.min(population)
    }

    /// Detection target after sanitisation.
    pub fn resolved_target_power(&self) -> f64 {
        self.target_power.clamp(0.0, MAX_TARGET_POWER)
    }

    /// Probability that a sample of `sample` items finds at least one
    /// defect, or `None` for an unset (zero) sample size.
    pub fn detection_probability(&self, sample: u64) -> Option<f64> {
        if sample == 0 {
            return None;
        }
        let p0 = probability_zero_defects(
            self.resolved_population(),
            self.resolved_defectives(),
            sample,
        );
        Some(1.0 - p0)
    }

    /// Solve for the minimum sample size meeting the detection target.
    pub fn solve(&self) -> PlanReport {
        let population = self.resolved_population();
        let defectives = self.resolved_defectives();
        let target_power = self.resolved_target_power();
        let min_sample_size = minimum_sample_size(population, defectives, target_power);
        let achieved_power =
            1.0 - probability_zero_defects(population, defectives, min_sample_size);
        PlanReport {
            population,
            defectives,
            target_power,
            min_sample_size,
            achieved_power,
        }
    }
}

/// Result of solving a sampling plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Sanitised population size.
    pub population: u64,
    /// Sanitised defective count.
    pub defectives: u64,
    /// Sanitised detection target.
    pub target_power: f64,
    /// Smallest sample size meeting the target (population if unreachable).
    pub min_sample_size: u64,
    /// Detection probability achieved at `min_sample_size`.
    pub achieved_power: f64,
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sampling plan:")?;
        writeln!(
            f,
            "  Population: {} ({} defective)",
            self.population, self.defectives
        )?;
        writeln!(
            f,
            "  Target detection power: {:.1}%",
            self.target_power * 100.0
        )?;
        writeln!(f, "  Minimum sample size: {}", self.min_sample_size)?;
        write!(
            f,
            "  Detection probability at minimum: {:.2}%",
            self.achieved_power * 100.0
        )
    }
}
