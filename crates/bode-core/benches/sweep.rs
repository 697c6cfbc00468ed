//! Benchmarks for frequency sweeps
//!
//! Tests performance of the full 1000-point sweep and of raw evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bode_core::frequency::FrequencyRange;
use bode_core::sweep::sweep_points;
use bode_core::{sweep, ModelOrder, TransferFunction};
use num_complex::Complex64;

fn first_order() -> TransferFunction {
    TransferFunction::new(ModelOrder::First, &[1e3], &[1e4]).unwrap()
}

fn second_order() -> TransferFunction {
    TransferFunction::new(ModelOrder::Second, &[1e2, 1e5], &[1e3, 1e6]).unwrap()
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let range = FrequencyRange::new(1.0, 1e9).unwrap();

    for (name, tf) in [("first_order", first_order()), ("second_order", second_order())] {
        group.bench_function(name, |b| b.iter(|| black_box(sweep(&tf, &range))));
    }

    group.finish();
}

fn bench_sweep_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_points");
    let range = FrequencyRange::new(1.0, 1e9).unwrap();
    let tf = second_order();

    for npoints in [100, 1000, 10000].iter() {
        let id = BenchmarkId::from_parameter(npoints);
        group.bench_with_input(id, npoints, |b, &n| {
            b.iter(|| black_box(sweep_points(&tf, &range, n)))
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let tf = second_order();
    let s = Complex64::new(0.0, 2.0 * std::f64::consts::PI * 1e4);
    c.bench_function("evaluate_second_order", |b| {
        b.iter(|| black_box(tf.evaluate(black_box(s))))
    });
}

criterion_group!(benches, bench_sweep, bench_sweep_points, bench_evaluate);
criterion_main!(benches);
