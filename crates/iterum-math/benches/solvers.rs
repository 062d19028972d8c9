//! Benchmarks for the iterum-math solvers.
//!
//! Run with: cargo bench -p iterum-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;

use iterum_math::quadratic::quadratic;
use iterum_math::solvers::{
    aitken, bisection, fixed_point, modified_newton, muller, newton_raphson, regula_falsi, secant,
    steffensen, SolverConfig,
};

// =============================================================================
// TEST PROBLEM: x^3 - x - 1 = 0
// =============================================================================

fn f(x: f64) -> f64 {
    x * x * x - x - 1.0
}

fn df(x: f64) -> f64 {
    3.0 * x * x - 1.0
}

fn d2f(x: f64) -> f64 {
    6.0 * x
}

fn g(x: f64) -> f64 {
    (x + 1.0).cbrt()
}

fn fz(z: Complex64) -> Complex64 {
    z * z * z - z - 1.0
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_methods(c: &mut Criterion) {
    let config = SolverConfig::new(1e-12, 100);
    let mut group = c.benchmark_group("cubic");

    group.bench_function("bisection", |b| {
        b.iter(|| bisection(f, black_box(1.0), black_box(2.0), &config))
    });
    group.bench_function("regula_falsi", |b| {
        b.iter(|| regula_falsi(f, black_box(1.0), black_box(2.0), &config))
    });
    group.bench_function("fixed_point", |b| {
        b.iter(|| fixed_point(g, black_box(1.5), &config))
    });
    group.bench_function("newton", |b| {
        b.iter(|| newton_raphson(f, df, black_box(1.5), &config))
    });
    group.bench_function("modified_newton", |b| {
        b.iter(|| modified_newton(f, df, d2f, black_box(1.5), &config))
    });
    group.bench_function("secant", |b| {
        b.iter(|| secant(f, black_box(1.0), black_box(2.0), &config))
    });
    group.bench_function("steffensen", |b| {
        b.iter(|| steffensen(g, black_box(1.5), &config))
    });
    group.bench_function("muller", |b| {
        let start = |x: f64| Complex64::new(x, 0.0);
        b.iter(|| muller(fz, black_box(start(0.5)), start(1.0), start(1.5), &config))
    });

    group.finish();
}

fn bench_aitken_terms(c: &mut Criterion) {
    let mut group = c.benchmark_group("aitken_terms");

    for terms in [10u32, 100, 1000] {
        let config = SolverConfig::new(1e-12, terms);
        group.bench_with_input(BenchmarkId::from_parameter(terms), &config, |b, config| {
            b.iter(|| aitken(f64::cos, black_box(1.0), config))
        });
    }

    group.finish();
}

fn bench_quadratic(c: &mut Criterion) {
    c.bench_function("quadratic", |b| {
        b.iter(|| quadratic(black_box(1.0), black_box(-3.0), black_box(2.0)))
    });
}

criterion_group!(benches, bench_methods, bench_aitken_terms, bench_quadratic);
criterion_main!(benches);
