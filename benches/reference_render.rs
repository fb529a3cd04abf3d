use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mandelbrot_shader::core::data::complex::Complex;
use mandelbrot_shader::core::data::screen_size::ScreenSize;
use mandelbrot_shader::core::data::viewport::ViewportState;
use mandelbrot_shader::{render_reference_frame, MandelbrotConfig};

fn bench_reference_render(c: &mut Criterion) {
    let config = MandelbrotConfig::default();
    let screen = ScreenSize::new(480, 270).expect("bench screen size");
    let extent = config.view_extent(screen).expect("bench extent");

    let views = [
        ("home", ViewportState::default()),
        (
            "seahorse_valley",
            ViewportState {
                zoom: 0.01,
                center: Complex::new(-0.7453, 0.1127),
            },
        ),
    ];

    let mut group = c.benchmark_group("reference_render");
    group.sample_size(20);

    for (name, viewport) in views {
        group.bench_with_input(BenchmarkId::from_parameter(name), &viewport, |b, viewport| {
            b.iter(|| {
                render_reference_frame(
                    black_box(screen),
                    black_box(viewport),
                    &extent,
                    config.max_iterations,
                )
                .expect("reference render")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reference_render);
criterion_main!(benches);
