//! Criterion benchmarks for 2D predicates over a fixed batch of random queries.
//! Sizes: n in {16, 256} segments/points per iteration.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geomath::geom2::{
    line_oriented_rectangle, line_rectangle, point_in_oriented_rectangle, Line2D,
    OrientedRectangle, Rectangle2D,
};
use geomath::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_lines(n: usize, seed: u64) -> Vec<Line2D> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pt = || Vec2::new(rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0));
    (0..n).map(|_| Line2D::new(pt(), pt())).collect()
}

fn bench_geom2(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom2");
    let aabb = Rectangle2D::new(Vec2::new(-1.0, -1.0), Vec2::new(2.0, 2.0));
    let obb = OrientedRectangle::new(Vec2::zeros(), Vec2::new(1.5, 0.5), 30.0);
    for &n in &[16usize, 256] {
        group.bench_with_input(BenchmarkId::new("line_rectangle", n), &n, |b, &n| {
            b.iter_batched(
                || random_lines(n, 7),
                |lines| lines.iter().filter(|l| line_rectangle(l, &aabb)).count(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(
            BenchmarkId::new("line_oriented_rectangle", n),
            &n,
            |b, &n| {
                b.iter_batched(
                    || random_lines(n, 8),
                    |lines| {
                        lines
                            .iter()
                            .filter(|l| line_oriented_rectangle(l, &obb))
                            .count()
                    },
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("point_in_oriented_rectangle", n),
            &n,
            |b, &n| {
                b.iter_batched(
                    || random_lines(n, 9),
                    |lines| {
                        lines
                            .iter()
                            .filter(|l| point_in_oriented_rectangle(l.start, &obb))
                            .count()
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_geom2);
criterion_main!(benches);
