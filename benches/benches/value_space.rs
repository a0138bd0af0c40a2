// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_ruler::ValueSpace;

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_space/conversions");

    // Same pixel sweep over increasingly fine steps.
    for step in [1.0, 0.1, 0.01, 0.001] {
        let space = ValueSpace::new(0.0..=10_000.0, step, 14.0).unwrap();
        let offsets: Vec<f64> = (0..4_096)
            .map(|i| f64::from(i) * space.content_width() / 4_096.0)
            .collect();
        group.throughput(Throughput::Elements(offsets.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("value_at_offset", step),
            &offsets,
            |b, offsets| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for &offset in offsets {
                        acc += space.value_at_offset(black_box(offset));
                    }
                    black_box(acc)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("snap", step), &offsets, |b, offsets| {
            b.iter(|| {
                let mut acc = 0.0;
                for &offset in offsets {
                    acc += space.snap(black_box(offset));
                }
                black_box(acc)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("step_of", step),
            &offsets,
            |b, offsets| {
                b.iter(|| {
                    let mut acc = 0_usize;
                    for &offset in offsets {
                        acc = acc.wrapping_add(space.step_of(black_box(offset)));
                    }
                    black_box(acc)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
