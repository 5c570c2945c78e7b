// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_sortable::{compute_reorder, reorder_in_place};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item-{i}")).collect()
}

fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder");
    for &n in &[16_usize, 256, 4096] {
        let items = labels(n);
        group.throughput(Throughput::Elements(n as u64));

        // Full-span moves are the worst case for both variants.
        group.bench_function(format!("compute_first_to_last_n{n}"), |b| {
            b.iter(|| {
                let out = compute_reorder(black_box(&items), 0, n - 1);
                black_box(out);
            });
        });

        group.bench_function(format!("in_place_first_to_last_n{n}"), |b| {
            b.iter_batched(
                || items.clone(),
                |mut v| {
                    let moved = reorder_in_place(&mut v, 0, n - 1);
                    black_box((moved, v));
                },
                BatchSize::SmallInput,
            );
        });

        // Adjacent swaps are what a slow drag produces.
        group.bench_function(format!("compute_adjacent_n{n}"), |b| {
            b.iter(|| {
                let out = compute_reorder(black_box(&items), n / 2, n / 2 + 1);
                black_box(out);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reorder);
criterion_main!(benches);
