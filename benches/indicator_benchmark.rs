//! Benchmark for windowta indicator throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use windowta::indicators::momentum::rsi;
use windowta::indicators::volatility::prox_to_bollinger_bands;
use windowta::{IndicatorConfig, IndicatorPanel};

/// Generate a trending, oscillating close series.
fn generate_close(n: usize) -> Vec<f64> {
    let mut close = vec![100.0; n];
    for i in 1..n {
        close[i] = close[i - 1] + (i as f64 * 0.1).sin() * 2.0;
    }
    close
}

fn bench_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsi");

    for size in [1000, 5000, 10000, 50000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let close = generate_close(size);

            b.iter(|| {
                let result = rsi(black_box(&close), black_box(14));
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_bollinger_proximity(c: &mut Criterion) {
    let mut group = c.benchmark_group("bollinger_proximity");

    for size in [1000, 5000, 10000, 50000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let close = generate_close(size);

            b.iter(|| {
                let result = prox_to_bollinger_bands(black_box(&close), black_box(20), 2.0);
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_panel(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel");
    let config = IndicatorConfig::default();

    for size in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let close = generate_close(size);

            b.iter(|| {
                let result = IndicatorPanel::compute(black_box(&close), &config);
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rsi, bench_bollinger_proximity, bench_panel);
criterion_main!(benches);
