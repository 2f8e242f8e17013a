use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sampling_oracle::{minimum_sample_size, parse_numbers, probability_zero_defects, ThresholdTuner};

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    group.bench_function("probability_zero_defects_1k", |b| {
        b.iter(|| probability_zero_defects(black_box(1000), black_box(10), black_box(258)));
    });

    group.bench_function("minimum_sample_size_1k", |b| {
        b.iter(|| minimum_sample_size(black_box(1000), black_box(10), black_box(0.95)));
    });

    group.finish();
}

fn bench_thresholds(c: &mut Criterion) {
    let mut group = c.benchmark_group("thresholds");

    // 10,000 pseudo-random-ish values from a fixed recurrence; keeps the
    // bench deterministic without pulling an RNG into the measurement loop.
    let values: Vec<f64> = (0..10_000).map(|i| ((i * 7919) % 104_729) as f64).collect();
    let text: String = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    group.bench_function("parse_numbers_10k", |b| {
        b.iter(|| parse_numbers(black_box(&text)));
    });

    group.bench_function("analyze_10k", |b| {
        let tuner = ThresholdTuner::new().values(&values).percentile(90.0);
        b.iter(|| tuner.analyze());
    });

    group.bench_function("sweep_10k", |b| {
        let tuner = ThresholdTuner::new().values(&values);
        let grid: Vec<f64> = (0..=20).map(|i| (i * 5) as f64).collect();
        b.iter(|| tuner.sweep(black_box(&grid)));
    });

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_thresholds);
criterion_main!(benches);
