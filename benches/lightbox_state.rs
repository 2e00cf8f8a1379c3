// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the viewer's hot state operations.
//!
//! Measures the performance of:
//! - Anchored zoom steps with pan clamping
//! - Repeated drag-pan updates
//! - Gallery index construction and coordinate resolution

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size, Vector};
use iced_lightbox::gallery::{GalleryIndex, Thumbnail};
use iced_lightbox::lightbox::transform::ViewportTransform;
use std::hint::black_box;

const VIEWPORT: Size = Size {
    width: 1024.0,
    height: 768.0,
};
const BASE: Size = Size {
    width: 1024.0,
    height: 576.0,
};

fn bench_zoom_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_transform");

    group.bench_function("zoom_sequence", |b| {
        b.iter(|| {
            let mut transform = ViewportTransform::new();
            for step in 0..8 {
                let anchor = Point::new(100.0 + step as f32 * 80.0, 300.0);
                transform.zoom_at(anchor, 1.2, VIEWPORT, BASE);
            }
            for _ in 0..8 {
                transform.zoom_at(Point::new(512.0, 384.0), 1.0 / 1.2, VIEWPORT, BASE);
            }
            black_box(&transform);
        });
    });

    group.bench_function("toggle_zoom", |b| {
        b.iter(|| {
            let mut transform = ViewportTransform::new();
            transform.toggle_at(Point::new(700.0, 200.0), VIEWPORT, BASE);
            transform.toggle_at(Point::new(700.0, 200.0), VIEWPORT, BASE);
            black_box(&transform);
        });
    });

    group.finish();
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_transform");

    group.bench_function("drag_pan_sequence", |b| {
        b.iter(|| {
            let mut transform = ViewportTransform::new();
            transform.zoom_at(Point::new(512.0, 384.0), 3.0, VIEWPORT, BASE);
            // Simulate a long drag as a stream of small deltas
            for _ in 0..200 {
                transform.pan_by(Vector::new(3.0, -2.0), VIEWPORT, BASE);
            }
            black_box(&transform);
        });
    });

    group.finish();
}

fn bench_gallery_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_index");

    let entries: Vec<Thumbnail> = (0..1_000)
        .map(|i| {
            Thumbnail::new(format!("/gallery/img_{i:04}.jpg"))
                .with_group(format!("group-{}", i % 10))
        })
        .collect();

    group.bench_function("build_1000_entries", |b| {
        b.iter(|| {
            let gallery = GalleryIndex::new(black_box(entries.clone()));
            black_box(gallery);
        });
    });

    let gallery = GalleryIndex::new(entries);
    group.bench_function("locate_and_entry", |b| {
        b.iter(|| {
            for flat_index in (0..1_000).step_by(37) {
                let Some((group_name, index)) = gallery.locate(flat_index) else {
                    continue;
                };
                black_box(gallery.entry(group_name, index));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_zoom_at, bench_pan, bench_gallery_index);
criterion_main!(benches);
