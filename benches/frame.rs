//! Benchmarks for the CPU frame pipeline.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lorenz_trails::config::{ALPHA, RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH, SUBSTEP_DT};
use lorenz_trails::draw;
use lorenz_trails::present::HeadlessPresenter;
use lorenz_trails::{Color, IVec2, Lorenz, Renderer, Scene, Simulation, Surface};

fn bench_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("integration");

    group.bench_function("lorenz_step", |b| {
        let mut l = Lorenz::new(28.0, 10.0, 8.0 / 3.0).with_position(0.1, 0.0, 0.0);
        b.iter(|| {
            l.step(black_box(SUBSTEP_DT));
            black_box(l.position())
        })
    });

    group.bench_function("scene_step", |b| {
        let mut scene = Scene::reference();
        b.iter(|| scene.step(black_box(SUBSTEP_DT)))
    });

    group.finish();
}

fn bench_drawing(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawing");

    for radius in [1, RADIUS, 16] {
        group.bench_with_input(BenchmarkId::new("filled_circle", radius), &radius, |b, &r| {
            let mut screen = Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
            let color = Color::rgba(255, 0, 255, ALPHA);
            b.iter(|| {
                let mut lock = screen.lock();
                draw::filled_circle(&mut lock, black_box(IVec2::new(160, 120)), r, color);
            })
        });
    }

    group.bench_function("fade", |b| {
        let mut renderer = Renderer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut screen = Surface::filled(SCREEN_WIDTH, SCREEN_HEIGHT, Color::rgb(200, 100, 50));
        b.iter(|| renderer.fade(&mut screen))
    });

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    group.bench_function("render_frame", |b| {
        let mut renderer = Renderer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut scene = Scene::reference();
        let mut screen = Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        b.iter(|| renderer.render_frame(&mut screen, &mut scene, black_box(Some(60))))
    });

    group.bench_function("headless_loop", |b| {
        let mut frames = Simulation::new().with_fps_limit(0).frame_loop();
        let mut out = HeadlessPresenter::new();
        b.iter(|| frames.frame(Vec::new(), &mut out))
    });

    group.finish();
}

criterion_group!(benches, bench_integration, bench_drawing, bench_frame);
criterion_main!(benches);
