// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_sortable::{
    ItemBinding, ItemEvent, ItemMarker, ItemScene, ModalityPreference, Region, Sortable,
    SortableConfig, Throttle, WindowEvent,
};

const ROW: f64 = 32.0;

fn scene(n: usize) -> ItemScene {
    let mut scene = ItemScene::new();
    for i in 0..n {
        let y = i as f64 * ROW;
        scene.insert(
            None,
            Region::new(Rect::new(0.0, y, 320.0, y + ROW)).with_marker(ItemMarker(i)),
        );
    }
    scene
}

/// Drag the first row down the whole list, one committed step per row.
fn bench_touch_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("touch_dispatch");
    for &n in &[16_usize, 128, 512] {
        let hit = scene(n);
        let moves: Vec<_> = (1..n)
            .map(|i| WindowEvent::PointerMove {
                position: Point::new(160.0, i as f64 * ROW + ROW / 2.0),
                time: Duration::from_millis(i as u64),
            })
            .collect();
        group.throughput(Throughput::Elements(moves.len() as u64));

        for (name, throttle) in [
            ("unthrottled", Throttle::Off),
            ("throttled", Throttle::default()),
        ] {
            let config = SortableConfig::new()
                .with_modality(ModalityPreference::Touch)
                .with_throttle(throttle);
            group.bench_function(format!("sweep_{name}_n{n}"), |b| {
                b.iter_batched(
                    || ((0..n).collect::<Vec<_>>(), Sortable::new(config)),
                    |(mut items, mut engine)| {
                        for (k, ev) in moves.iter().enumerate() {
                            let mut next = None;
                            let mut list = engine.bind(&items, |v| next = Some(v));
                            if k == 0 {
                                list.on_item(ItemBinding { index: 0 }, ItemEvent::PointerDown);
                            }
                            black_box(list.on_window(*ev, &hit));
                            drop(list);
                            if let Some(v) = next {
                                items = v;
                            }
                        }
                        black_box(items);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_touch_sweep);
criterion_main!(benches);
