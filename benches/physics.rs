//! Benchmarks for tatters cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use tatters::*;

fn params() -> ClothParams<f32> {
    ClothConfig::new()
        .with_viewport(Vec2::new(1280.0, 720.0))
        .build()
        .unwrap()
}

fn bench_mesh_generation(c: &mut Criterion) {
    let params = params();
    c.bench_function("mesh_50x50_generate", |b| {
        b.iter(|| Mesh::reset(1280.0, &params));
    });
}

fn bench_relaxation(c: &mut Criterion) {
    let params = params();
    c.bench_function("mesh_50x50_relax_3_passes", |b| {
        let mut mesh = Mesh::reset(1280.0, &params);
        b.iter(|| mesh.relax(&params, &mut NoOpStepObserver));
    });
}

fn bench_simulation(c: &mut Criterion) {
    c.bench_function("cloth_50x50_drag_60_frames", |b| {
        b.iter(|| {
            let mut sim = Simulation::with_mesh(params(), 1280.0);
            let bounds = Vec2::new(1280.0, 720.0);
            let mut pointer = Pointer::new();
            pointer.move_to(Vec2::new(640.0, 300.0));
            sim.start(0.0, &pointer);
            pointer.press(Button::Primary);
            for frame in 1..=60 {
                pointer.move_to(Vec2::new(640.0 + frame as f32 * 4.0, 300.0));
                sim.advance(f64::from(frame) * 1000.0 / 60.0, &pointer, bounds, &mut NoOpStepObserver);
            }
            sim.mesh().positions()
        });
    });
}

criterion_group!(benches, bench_mesh_generation, bench_relaxation, bench_simulation);
criterion_main!(benches);
