use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use periodica::projection::detect_periodicity;

/// Synthetic projection profile: bright baseline, a 12-px comb, and a slow
/// sinusoidal illumination ripple.
fn synthetic_profile(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let comb = if i % 12 == 0 { 40.0 } else { 0.0 };
            120.0 + comb + 6.0 * (0.23 * t).sin()
        })
        .collect()
}

fn detect_periodicity_bench(c: &mut Criterion) {
    for &n in &[256usize, 1024, 4096] {
        let profile = synthetic_profile(n);
        c.bench_with_input(
            BenchmarkId::new("detect_periodicity", n),
            &profile,
            |bench, p| bench.iter(|| detect_periodicity(black_box(p), 3)),
        );
    }
}

criterion_group!(benches, detect_periodicity_bench);
criterion_main!(benches);
