//! Criterion benchmarks for the matrix engine.
//! Focus: determinant and inverse per order (cofactor recursion depth 2–4),
//! plus the checked runtime-sized product.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geomath::matrix::ops;
use geomath::{Mat2, Mat3, Mat4, Matrix};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix<const N: usize>(seed: u64) -> Matrix<N> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::<N>::zeros();
    for v in m.as_mut_slice() {
        *v = rng.gen_range(-1.0..1.0);
    }
    m
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    let m2: Mat2 = random_matrix(41);
    let m3: Mat3 = random_matrix(42);
    let m4: Mat4 = random_matrix(43);

    group.bench_function(BenchmarkId::new("determinant", 2), |b| {
        b.iter(|| black_box(m2).determinant())
    });
    group.bench_function(BenchmarkId::new("determinant", 3), |b| {
        b.iter(|| black_box(m3).determinant())
    });
    group.bench_function(BenchmarkId::new("determinant", 4), |b| {
        b.iter(|| black_box(m4).determinant())
    });
    group.bench_function(BenchmarkId::new("inverse", 3), |b| {
        b.iter(|| black_box(m3).inverse())
    });
    group.bench_function(BenchmarkId::new("inverse", 4), |b| {
        b.iter(|| black_box(m4).inverse())
    });
    group.bench_function(BenchmarkId::new("product", 4), |b| {
        b.iter(|| black_box(m4) * black_box(m4))
    });
    group.bench_function(BenchmarkId::new("multiply_checked", 4), |b| {
        b.iter(|| ops::multiply(black_box(m4.as_slice()), 4, 4, m4.as_slice(), 4, 4))
    });
    group.finish();
}

criterion_group!(benches, bench_matrix);
criterion_main!(benches);
