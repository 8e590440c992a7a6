//! Criterion microbenches for the sampler and the escape trial hot path.
//!
//! - `sample`: one uniform point from a rectangular domain.
//! - `escape`: full runs at a few iteration counts, seeded for stability.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use monte::escape::EscapeSimulator;
use monte::geom::Box2;
use monte::sample::{seeded, PointSampler};

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    group.bench_function("point_in_unit_box", |b| {
        b.iter_batched(
            || PointSampler::new(Box2::new(0.0, 0.0, 1.0, 1.0), seeded(42)),
            |mut sampler| {
                for _ in 0..1_000 {
                    let _ = sampler.sample();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");
    for iterations in [1_000u64, 10_000, 100_000] {
        group.bench_function(BenchmarkId::new("run", iterations), |b| {
            let sim = EscapeSimulator::new(0.0, 0.0, 1.0, 1.0, iterations);
            b.iter(|| sim.run(seeded(7)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sampler, bench_escape);
criterion_main!(benches);
