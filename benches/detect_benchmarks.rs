//! Benchmarks for peak detection
//!
//! Measures:
//! - find_peaks across series lengths and window widths
//! - full detect (prominence + spacing) on noisy multi-wave signals
//! - batch detection over many per-model series

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crestline::{detect, detect_many, find_peaks, PeakConfig};
use std::f64::consts::PI;

/// Generate a multi-wave signal resembling weekly incident cases
fn generate_waves(n: usize, period: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            100.0 + 80.0 * (2.0 * PI * t / period).sin()
        })
        .collect()
}

/// Generate a noisy multi-wave signal
fn generate_noisy_waves(n: usize, period: f64, noise_level: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let signal = 100.0 + 80.0 * (2.0 * PI * t / period).sin();
            // Deterministic pseudo-noise for reproducibility
            let noise = noise_level * ((17.3 * t).sin());
            signal + noise
        })
        .collect()
}

fn bench_find_peaks_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_peaks_length");
    for &n in &[64usize, 256, 1024, 4096] {
        let series = generate_noisy_waves(n, 26.0, 5.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, series| {
            b.iter(|| find_peaks(black_box(series), black_box(3)).unwrap())
        });
    }
    group.finish();
}

fn bench_find_peaks_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_peaks_window");
    let series = generate_noisy_waves(512, 26.0, 5.0);
    for &m in &[0usize, 1, 3, 8, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(m), &m, |b, &m| {
            b.iter(|| find_peaks(black_box(&series), black_box(m)).unwrap())
        });
    }
    group.finish();
}

fn bench_detect_with_prominence(c: &mut Criterion) {
    let series = generate_noisy_waves(512, 26.0, 5.0);
    let config = PeakConfig::default().window(3).min_prominence(10.0);
    c.bench_function("detect_with_prominence_512", |b| {
        b.iter(|| detect(black_box(&series), black_box(&config)).unwrap())
    });
}

fn bench_detect_many(c: &mut Criterion) {
    // One series per forecasting model
    let batch: Vec<Vec<f64>> = (0..32)
        .map(|k| generate_waves(256, 20.0 + k as f64))
        .collect();
    let config = PeakConfig::default().window(3);
    c.bench_function("detect_many_32x256", |b| {
        b.iter(|| detect_many(black_box(&batch), black_box(&config)))
    });
}

criterion_group!(
    benches,
    bench_find_peaks_lengths,
    bench_find_peaks_windows,
    bench_detect_with_prominence,
    bench_detect_many
);
criterion_main!(benches);
