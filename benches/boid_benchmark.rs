/*
 * Boid Simulation Benchmark
 *
 * Measures the all-pairs decide phase on one thread and on the rayon pool,
 * the orientation frames fed to the renderer, and a full wrapped step.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use mindful_boids::{Flock, Mindset, Processing, Transform, WorldBounds};

const FLOCK_SIZES: [usize; 4] = [100, 500, 1000, 2000];
const HALF_EXTENT: f32 = 40.0;

// A flock that has already been moving for a while, so velocities are non-zero
fn warmed_flock(n: usize) -> Flock {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let mut flock = Flock::scattered(n, HALF_EXTENT, &mut rng);
    let bounds = WorldBounds::new(HALF_EXTENT);
    for _ in 0..3 {
        flock.step(&Mindset::default(), Processing::Parallel);
        flock.wrap(&bounds);
    }
    flock
}

fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");
    let mindset = Mindset::default();

    for n in FLOCK_SIZES {
        let flock = warmed_flock(n);
        for processing in [Processing::Sequential, Processing::Parallel] {
            group.bench_with_input(BenchmarkId::new(format!("{processing:?}"), n), &flock, |b, flock| {
                b.iter(|| black_box(flock.decide(&mindset, processing)));
            });
        }
    }

    group.finish();
}

fn bench_orientation_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation_frames");

    for n in FLOCK_SIZES {
        let flock = warmed_flock(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &flock, |b, flock| {
            b.iter(|| black_box(flock.orientation_frames().collect::<Vec<Transform>>()));
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    let mindset = Mindset::default();
    let bounds = WorldBounds::new(HALF_EXTENT);

    for n in FLOCK_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut flock = warmed_flock(n);
            b.iter(|| {
                flock.step(&mindset, Processing::Parallel);
                flock.wrap(&bounds);
                black_box(flock.len())
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_decide, bench_orientation_frames, bench_step
}

criterion_main!(benches);
