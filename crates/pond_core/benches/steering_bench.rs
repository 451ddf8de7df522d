use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use pond_core::engine::avoidance::avoidance_target;
use pond_core::engine::playfield::{Obstacle, Playfield};
use pond_core::engine::steering;
use pond_core::{AvoidanceParams, Vec2};

fn bench_force_conversion(c: &mut Criterion) {
    let desired = Vec2::new(3.0, 1.0);
    let current = Vec2::new(-1.0, 2.0);
    c.bench_function("desired_velocity_to_force", |b| {
        b.iter(|| {
            steering::desired_velocity_to_force(
                black_box(desired),
                black_box(current),
                1.0,
                0.25,
                6.0,
            )
        })
    });
}

fn bench_arrive(c: &mut Criterion) {
    c.bench_function("basic_arrive_inside_radius", |b| {
        b.iter(|| {
            steering::basic_arrive(black_box(Vec2::ZERO), black_box(Vec2::new(0.9, 0.0)), 1.5, 3.0)
        })
    });
}

fn bench_avoidance(c: &mut Criterion) {
    let mut group = c.benchmark_group("avoidance_target");
    let params = AvoidanceParams::default();

    // clear water: single direct probe
    let open = Playfield::default();
    group.bench_function("direct_clear", |b| {
        b.iter(|| {
            avoidance_target(&open, black_box(Vec2::ZERO), black_box(Vec2::new(6.0, 0.0)), &params)
        })
    });

    // wall on the line: sweeps a few candidates before clearing
    let walled = Playfield::new(vec![Obstacle::circle(Vec2::new(3.0, 0.0), 1.0)]);
    group.bench_function("wall_partial_sweep", |b| {
        b.iter(|| {
            avoidance_target(
                &walled,
                black_box(Vec2::ZERO),
                black_box(Vec2::new(6.0, 0.0)),
                &params,
            )
        })
    });

    // boxed in: every candidate blocked, the sweep runs to exhaustion
    let boxed_in = Playfield::new(vec![Obstacle::circle(Vec2::ZERO, 10.0)]);
    group.bench_function("boxed_in_full_sweep", |b| {
        b.iter(|| {
            avoidance_target(
                &boxed_in,
                black_box(Vec2::ZERO),
                black_box(Vec2::new(6.0, 0.0)),
                &params,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_force_conversion, bench_arrive, bench_avoidance);
criterion_main!(benches);
