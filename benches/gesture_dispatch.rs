// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gesture dispatch.
//!
//! Measures the performance of:
//! - A full pinch gesture (many live updates, one commit)
//! - A drag while zoomed
//! - Page switching through the drawer

use criterion::{criterion_group, criterion_main, Criterion};
use magazine_lens::catalog::PageCatalog;
use magazine_lens::domain::page::PageId;
use magazine_lens::viewer::{GestureEvent, ViewerSession};
use std::hint::black_box;

/// Number of live updates fed per continuous gesture.
const UPDATES_PER_GESTURE: u16 = 120;

fn bench_pinch_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_dispatch");

    group.bench_function("pinch_gesture", |b| {
        let mut session = ViewerSession::new(PageCatalog::reference());
        b.iter(|| {
            for step in 0..UPDATES_PER_GESTURE {
                let magnitude = 1.0 + f32::from(step) / 20.0;
                let _ = session.handle(black_box(GestureEvent::PinchChanged { magnitude }));
            }
            let _ = black_box(session.handle(GestureEvent::PinchEnded));
        });
    });

    group.finish();
}

fn bench_zoomed_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_dispatch");

    group.bench_function("zoomed_drag", |b| {
        let mut session = ViewerSession::new(PageCatalog::reference());
        let _ = session.handle(GestureEvent::DoubleTap);
        b.iter(|| {
            for step in 0..UPDATES_PER_GESTURE {
                let dx = f32::from(step);
                let _ = session.handle(black_box(GestureEvent::DragChanged { dx, dy: -dx }));
            }
            let _ = black_box(session.handle(GestureEvent::DragEnded));
        });
    });

    group.finish();
}

fn bench_page_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_dispatch");
    let catalog = PageCatalog::reference();
    let ids: Vec<PageId> = catalog.iter().map(|page| page.id()).collect();

    group.bench_function("page_switch", |b| {
        let mut session = ViewerSession::new(catalog.clone());
        b.iter(|| {
            for &id in &ids {
                let _ = black_box(session.handle(GestureEvent::ThumbnailSelected(id)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pinch_gesture,
    bench_zoomed_drag,
    bench_page_switch
);
criterion_main!(benches);
