use line_chart_rs::api::{LineChart, LineChartConfig};
use line_chart_rs::core::{
    DefaultTickLabeler, GeometryLayout, LinePlot, LinearScale, PointStore, ScreenPoint,
    ValueRange, Viewport, cardinal_spline_path, compute_geometry,
};
use line_chart_rs::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wave(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.01;
            100.0 + t.sin() * 25.0 + (t * 3.0).cos() * 5.0
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::guarded(ValueRange::new(0.0, 10_000.0));

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let normalized = scale.normalize(black_box(4_321.123));
            let _ = scale.denormalize(normalized);
        })
    });
}

fn bench_cardinal_spline_10k(c: &mut Criterion) {
    let points: Vec<ScreenPoint> = wave(10_000)
        .into_iter()
        .enumerate()
        .map(|(i, y)| ScreenPoint::new(i as f64 * 0.2, y))
        .collect();

    c.bench_function("cardinal_spline_10k", |b| {
        b.iter(|| {
            let _ = cardinal_spline_path(black_box(&points), 0.2);
        })
    });
}

fn bench_compute_geometry_10k(c: &mut Criterion) {
    let plot = LinePlot::new("wave", PointStore::from_values(&wave(10_000))).with_smoothing(0.2);
    let layout = GeometryLayout::new(Viewport::new(1920, 1080));

    c.bench_function("compute_geometry_10k", |b| {
        b.iter(|| {
            let _ = compute_geometry(black_box(&[&plot]), &layout, &DefaultTickLabeler);
        })
    });
}

fn bench_render_10k(c: &mut Criterion) {
    let mut chart = LineChart::new(
        NullRenderer::default(),
        Viewport::new(1920, 1080),
        LineChartConfig::default(),
    )
    .expect("chart init");
    chart.add_plot(LinePlot::new("wave", PointStore::from_values(&wave(10_000))));

    c.bench_function("reposition_and_render_10k", |b| {
        b.iter(|| {
            chart.reposition_plots().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_cardinal_spline_10k,
    bench_compute_geometry_10k,
    bench_render_10k
);
criterion_main!(benches);
