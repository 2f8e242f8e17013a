//! Monte Carlo cross-validation of the hypergeometric engine.
//!
//! Draws repeated samples without replacement from a reference
//! hypergeometric distribution and compares the empirical zero-defect
//! frequency against `probability_zero_defects`. Seeds are fixed so runs
//! are deterministic; tolerances sit several standard errors above the
//! binomial sampling noise at the chosen trial counts.

use rand::SeedableRng;
use rand_distr::{Distribution, Hypergeometric};
use rand_xoshiro::Xoshiro256PlusPlus;

use sampling_oracle::{minimum_sample_size, probability_zero_defects};

const TRIALS: usize = 20_000;

fn empirical_zero_defect_rate(
    population: u64,
    defective: u64,
    sample: u64,
    seed: u64,
) -> f64 {
    let dist = Hypergeometric::new(population, defective, sample)
        .expect("valid hypergeometric parameters");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let zero_draws = (0..TRIALS)
        .filter(|_| dist.sample(&mut rng) == 0)
        .count();
    zero_draws as f64 / TRIALS as f64
}

#[test]
fn zero_defect_probability_matches_simulation() {
    // (population, defective, sample) in regimes with non-trivial mass at 0.
    let cases = [
        (100u64, 5u64, 20u64),
        (50, 10, 5),
        (1000, 10, 100),
        (200, 3, 40),
    ];
    for (i, (population, defective, sample)) in cases.into_iter().enumerate() {
        let exact = probability_zero_defects(population, defective, sample);
        let empirical =
            empirical_zero_defect_rate(population, defective, sample, 0x5EED_0000 + i as u64);
        assert!(
            (exact - empirical).abs() < 0.02,
            "N={population} K={defective} n={sample}: exact {exact}, empirical {empirical}"
        );
    }
}

#[test]
fn detection_power_at_solved_size_matches_simulation() {
    // Solve a plan, then verify the detection probability empirically.
    let (population, defective, target) = (500u64, 25u64, 0.90f64);
    let n = minimum_sample_size(population, defective, target);
    assert_eq!(n, 43);

    let exact_detect = 1.0 - probability_zero_defects(population, defective, n);
    let empirical_detect =
        1.0 - empirical_zero_defect_rate(population, defective, n, 0xD37EC7);
    assert!(
        (exact_detect - empirical_detect).abs() < 0.02,
        "exact {exact_detect}, empirical {empirical_detect}"
    );
    // The empirical rate should comfortably clear the target too.
    assert!(empirical_detect > target - 0.02);
}

#[test]
fn certain_outcomes_simulate_exactly() {
    // No defects: every draw is defect-free.
    assert_eq!(probability_zero_defects(100, 0, 10), 1.0);
    assert_eq!(empirical_zero_defect_rate(100, 0, 10, 1), 1.0);

    // Sample too large to avoid the defective items: never defect-free.
    assert_eq!(probability_zero_defects(100, 60, 50), 0.0);
    assert_eq!(empirical_zero_defect_rate(100, 60, 50, 2), 0.0);
}
