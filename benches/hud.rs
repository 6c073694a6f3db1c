use code_scanner::HudOverlay;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};

fn bench_hud_640x480(c: &mut Criterion) {
    let frame = RgbImage::from_pixel(640, 480, Rgb([128, 128, 128]));
    c.bench_function("hud_render_640x480", |b| {
        b.iter_batched_ref(
            || frame.clone(),
            |f| HudOverlay::new().render(f, black_box(29.97), black_box(42)),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_hud_1280x720(c: &mut Criterion) {
    let frame = RgbImage::from_pixel(1280, 720, Rgb([128, 128, 128]));
    c.bench_function("hud_render_1280x720", |b| {
        b.iter_batched_ref(
            || frame.clone(),
            |f| HudOverlay::new().render(f, black_box(29.97), black_box(42)),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_hud_1920x1080(c: &mut Criterion) {
    let frame = RgbImage::from_pixel(1920, 1080, Rgb([128, 128, 128]));
    c.bench_function("hud_render_1920x1080", |b| {
        b.iter_batched_ref(
            || frame.clone(),
            |f| HudOverlay::new().render(f, black_box(29.97), black_box(42)),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_hud_640x480,
    bench_hud_1280x720,
    bench_hud_1920x1080
);
criterion_main!(benches);
