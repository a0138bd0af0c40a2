// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_ruler::RulerConfig;
use understory_ruler_view::{RulerView, visible_ticks};

fn view(upper: f64, viewport: f64) -> RulerView {
    let config = RulerConfig::new(0.0..=upper, 0.1)
        .with_major_tick_interval(1.0)
        .with_viewport_width(viewport);
    RulerView::new(config, upper / 2.0, 0.0).unwrap()
}

fn bench_visible_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ruler_view/visible_ticks");

    // Range size must not matter; viewport width does.
    for upper in [100.0, 10_000.0, 1_000_000.0] {
        let view = view(upper, 390.0);
        let space = *view.controller().value_space();
        let inset = view.controller().content_inset();
        let offset = view.controller().offset();
        group.bench_with_input(BenchmarkId::new("range", upper), &offset, |b, &offset| {
            b.iter(|| black_box(visible_ticks(&space, black_box(offset), 390.0, inset, 2)));
        });
    }

    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("ruler_view/scene");

    for viewport in [320.0, 390.0, 1_024.0, 2_560.0] {
        let view = view(1_000_000.0, viewport);
        let offset = view.controller().offset();
        group.bench_with_input(
            BenchmarkId::new("viewport", viewport),
            &offset,
            |b, &offset| {
                let mut frame = 0.0;
                b.iter(|| {
                    frame = (frame + 3.5) % 140.0;
                    black_box(view.scene_at(offset + frame, 110.0))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_visible_ticks, bench_scene);
criterion_main!(benches);
