//! Benchmarks for classification and session tracking throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use face_circle_tracker::direction::{DirectionClassifier, Zone};
use face_circle_tracker::geometry::{DisplaySize, Rect, ReferenceCircle};
use face_circle_tracker::pipeline::{LivenessPipeline, PoseSample};
use face_circle_tracker::tracker::TrackerSession;
use std::time::{Duration, Instant};

/// Deterministic pose stream from a linear congruential generator
fn pose_stream(count: usize) -> Vec<(f32, f32)> {
    let mut state = 12345u32;
    let mut next = || {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        ((state / 65536) % 1000) as f32 / 1000.0 - 0.5
    };
    (0..count).map(|_| (next() * 120.0, next() * 80.0)).collect()
}

fn benchmark_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    let classifier = DirectionClassifier::default();
    let poses = pose_stream(100);

    group.bench_function("single_classify", |b| {
        b.iter(|| black_box(classifier.classify(black_box(-40.0), black_box(20.0))));
    });

    group.bench_with_input(BenchmarkId::new("sweep", poses.len()), &poses, |b, poses| {
        b.iter(|| {
            for &(yaw, pitch) in poses {
                black_box(classifier.classify(black_box(yaw), black_box(pitch)));
                black_box(classifier.is_center(black_box(yaw), black_box(pitch)));
            }
        });
    });

    group.finish();
}

fn benchmark_session_observe(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    let now = Instant::now();

    group.bench_function("observe_fresh_zone", |b| {
        b.iter(|| {
            let mut session = TrackerSession::new();
            black_box(session.observe(black_box(Some(Zone::Right)), false, now));
        });
    });

    group.bench_function("observe_done_zone", |b| {
        let mut session = TrackerSession::new();
        session.observe(Some(Zone::Right), false, now);
        b.iter(|| black_box(session.observe(black_box(Some(Zone::Right)), false, now)));
    });

    group.bench_function("full_session_sweep", |b| {
        b.iter(|| {
            let mut session = TrackerSession::new();
            for zone in Zone::ALL {
                session.observe(black_box(Some(zone)), zone == Zone::Center, now);
            }
            black_box(session.is_all_completed());
        });
    });

    group.bench_function("fill_sampling", |b| {
        let mut session = TrackerSession::new();
        session.observe(Some(Zone::Up), false, now);
        let redraw = now + Duration::from_millis(175);
        b.iter(|| black_box(session.fill(black_box(Zone::Up), black_box(redraw))));
    });

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let display = DisplaySize::new(1080, 1920);
    let circle = ReferenceCircle::new(540.0, 960.0, 400.0);
    let now = Instant::now();

    let samples: Vec<PoseSample> = pose_stream(100)
        .into_iter()
        .map(|(yaw, pitch)| PoseSample {
            yaw,
            pitch,
            face_box: Rect::new(190, 270, 100, 100),
            image_width: 480,
            image_height: 640,
        })
        .collect();

    group.bench_with_input(BenchmarkId::new("process_stream", samples.len()), &samples, |b, samples| {
        b.iter(|| {
            let mut pipeline = LivenessPipeline::default();
            for sample in samples {
                let _ = black_box(pipeline.process(black_box(sample), display, &circle, now));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_classifier, benchmark_session_observe, benchmark_pipeline);
criterion_main!(benches);
