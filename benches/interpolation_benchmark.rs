// ============================================================================
// Interpolation Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Precision Core - Raw n-ary arithmetic folds
// 2. Normalization - The rounding primitive every operation routes through
// 3. Curve Sampling - Scalar and point-valued interpolants
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use precise_interp::numeric::{add, divide, multiply, pow, round_to_sigdig};
use precise_interp::prelude::*;

// ============================================================================
// Precision Core Benchmarks
// ============================================================================

fn benchmark_arithmetic_folds(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic_folds");

    for num_operands in [2, 8, 64].iter() {
        let operands: Vec<f64> = (0..*num_operands)
            .map(|i| 0.1 + f64::from(i) * 0.37)
            .collect();

        group.bench_with_input(
            BenchmarkId::new("add", num_operands),
            &operands,
            |b, operands| {
                b.iter(|| black_box(add(operands)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("multiply", num_operands),
            &operands,
            |b, operands| {
                b.iter(|| black_box(multiply(operands)));
            },
        );
    }

    group.bench_function("divide_pair", |b| {
        b.iter(|| black_box(divide(&[black_box(2.0), black_box(3.0)])));
    });

    group.bench_function("pow_tower", |b| {
        b.iter(|| black_box(pow(&[black_box(2.0), 2.0, 2.0])));
    });

    group.finish();
}

fn benchmark_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    group.bench_function("round_to_sigdig", |b| {
        b.iter(|| black_box(round_to_sigdig(black_box(0.123456789))));
    });

    group.finish();
}

// ============================================================================
// Curve Sampling Benchmarks
// ============================================================================

fn benchmark_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");

    group.bench_function("lerp_value", |b| {
        b.iter(|| black_box(lerp_value(black_box(0.0), black_box(10.0), black_box(0.37))));
    });

    group.bench_function("qbez_value", |b| {
        b.iter(|| {
            black_box(qbez_value(
                black_box(0.0),
                black_box(2.0),
                black_box(1.0),
                black_box(0.37),
            ))
        });
    });

    group.bench_function("cbez_value", |b| {
        b.iter(|| {
            black_box(cbez_value(
                black_box(0.0),
                black_box(0.5),
                black_box(1.5),
                black_box(1.0),
                black_box(0.37),
            ))
        });
    });

    let p0 = Point::new(0.0, 0.0);
    let c0 = Point::new(0.0, KAPPA);
    let c1 = Point::new(1.0 - KAPPA, 1.0);
    let p1 = Point::new(1.0, 1.0);

    group.bench_function("cbez_point_quarter_arc", |b| {
        b.iter(|| black_box(cbez_point(p0, c0, c1, p1, black_box(0.37))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic_folds,
    benchmark_normalization,
    benchmark_curve_sampling
);
criterion_main!(benches);
