//! Criterion benchmarks for slider hot paths.
//!
//! Benchmarks:
//! 1. Drag move (session math + clamp) — runs once per pointer-move event
//! 2. Fit classification — runs 30 times per second per segment
//! 3. Sampler tick over a simulated drag — the per-frame composite cost

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use propslider_core::{
    classify_fit, DragController, FitMeasurement, FitSampler, PointerInput, ProportionPair,
    Span, TrackGeometry, SAMPLE_INTERVAL_MS,
};

fn bench_drag_move(c: &mut Criterion) {
    let geometry = TrackGeometry {
        origin: 0.0,
        track_width: 800.0,
        knob_span: 9.0,
    };
    let pair = ProportionPair::new(50.0, 50.0);
    let knob = Span::new(395.5, 404.5);

    let mut ctl = DragController::default();
    assert!(ctl.press(&PointerInput::Mouse { x: 400.0 }, knob, pair));

    c.bench_function("drag_move", |b| {
        let mut x = 0.0_f64;
        b.iter(|| {
            x = (x + 7.0) % 800.0;
            black_box(ctl.drag(&PointerInput::Mouse { x }, black_box(geometry)))
        })
    });
}

fn bench_classify_fit(c: &mut Criterion) {
    c.bench_function("classify_fit", |b| {
        let mut w = 0.0_f64;
        b.iter(|| {
            w = (w + 3.0) % 300.0;
            black_box(classify_fit(
                FitMeasurement {
                    primary_width: 60.0,
                    secondary_width: 32.0,
                    container_width: w,
                },
                5.0,
            ))
        })
    });
}

fn bench_sampler_tick(c: &mut Criterion) {
    c.bench_function("sampler_tick", |b| {
        let mut sampler = FitSampler::default();
        let mut w = 0.0_f64;
        b.iter(|| {
            w = (w + 3.0) % 300.0;
            black_box(sampler.tick(SAMPLE_INTERVAL_MS, || {
                Some(FitMeasurement {
                    primary_width: 60.0,
                    secondary_width: 32.0,
                    container_width: w,
                })
            }))
        })
    });
}

criterion_group!(benches, bench_drag_move, bench_classify_fit, bench_sampler_tick);
criterion_main!(benches);
