//! 粒子更新性能基准测试
//!
//! 测试单粒子更新核、顺序与并行tick的吞吐

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::Vec3;
use verlet_fluid::config::SeedingConfig;
use verlet_fluid::simulation::{
    spherical_seeds, InitialMotion, ParticleKernel, RippleBowl, StateRing, StepParams,
    TickDispatcher,
};

fn seeded_ring(side: usize) -> StateRing {
    let seeds = spherical_seeds(side * side, &SeedingConfig::default());
    StateRing::new(side, &seeds, InitialMotion::default())
}

fn bench_kernel_step(c: &mut Criterion) {
    let params = StepParams::default();
    let surface = RippleBowl::default();
    let mut group = c.benchmark_group("kernel_step");

    // 自由下落和碰撞两条分支
    let cases = [
        ("free_fall", Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.99, 0.0)),
        ("collision", Vec3::new(0.1, -0.15, -0.2), Vec3::new(0.1, -0.2, -0.2)),
    ];

    for (name, previous, current) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(ParticleKernel::step(
                    black_box(previous),
                    black_box(current),
                    black_box(17),
                    &params,
                    &surface,
                ))
            });
        });
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let params = StepParams::default();
    let surface = RippleBowl::default();
    let mut group = c.benchmark_group("tick");

    let sequential = TickDispatcher::sequential();
    let parallel = TickDispatcher::parallel(0).expect("thread pool");

    for side in [64usize, 128, 256].iter() {
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", side), side, |b, &side| {
            let mut ring = seeded_ring(side);
            b.iter(|| black_box(sequential.tick(&mut ring, &params, &surface)));
        });

        group.bench_with_input(BenchmarkId::new("parallel", side), side, |b, &side| {
            let mut ring = seeded_ring(side);
            b.iter(|| black_box(parallel.tick(&mut ring, &params, &surface)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernel_step, bench_tick);
criterion_main!(benches);
