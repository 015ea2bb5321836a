//! Criterion benchmarks for the divide-and-conquer hull.
//! Focus sizes: n in {100, 1_000, 10_000, 100_000}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::geom2::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
use hull2::compute_hull;

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        // Uniform clouds: a handful of hull vertices, merge work dominated
        // by interior-point discards.
        group.bench_with_input(BenchmarkId::new("uniform_square", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    draw_points(
                        CloudCfg {
                            count: n,
                            shape: CloudShape::UniformSquare { half_extent: 1.0 },
                        },
                        ReplayToken { seed: 43, index: 0 },
                    )
                },
                |pts| {
                    let _hull = compute_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        // Circle rims: every point survives to the top-level merge, the
        // worst case for the tangent walks.
        group.bench_with_input(BenchmarkId::new("circle_rim", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    draw_points(
                        CloudCfg {
                            count: n,
                            shape: CloudShape::CircleRim { radius: 1.0 },
                        },
                        ReplayToken { seed: 44, index: 0 },
                    )
                },
                |pts| {
                    let _hull = compute_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
