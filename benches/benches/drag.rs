// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_ruler::{RecordingHost, RulerConfig, RulerController};

fn controller(step: f64) -> RulerController {
    let config = RulerConfig::new(0.0..=10_000.0, step)
        .with_major_tick_interval(1.0)
        .with_viewport_width(390.0);
    RulerController::new(config, 5_000.0, 5_000.0).unwrap()
}

fn bench_drag_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/drag");

    // A 2000 px gesture delivered one pixel per event.
    for step in [1.0, 0.1, 0.01] {
        group.throughput(Throughput::Elements(2_000));
        group.bench_function(BenchmarkId::new("pixel_updates", step), |b| {
            b.iter_batched(
                || (controller(step), RecordingHost::new()),
                |(mut ruler, mut host)| {
                    for px in 1..=2_000 {
                        ruler.on_drag_changed(-f64::from(px), &mut host);
                    }
                    ruler.on_drag_ended(&mut host);
                    black_box((ruler.value(), host.haptic_pulses));
                },
                BatchSize::SmallInput,
            );
        });
    }

    // Fling: few events, many crossed steps each.
    group.bench_function("fling", |b| {
        b.iter_batched(
            || (controller(0.01), RecordingHost::new()),
            |(mut ruler, mut host)| {
                for px in (0..=40_000).step_by(4_000) {
                    ruler.on_drag_changed(-f64::from(px), &mut host);
                }
                ruler.on_drag_ended(&mut host);
                black_box(host.haptic_pulses);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_drag_updates);
criterion_main!(benches);
