// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch reordering with hit testing.
//!
//! A touch-capable environment selects the pointer strategy. Rows are laid out
//! in an `ItemScene`; window pointer moves are hit-tested against it and
//! throttled to one step per 100 ms.
//!
//! Run:
//! - `cargo run -p understory_examples --example sortable_touch`

use core::time::Duration;

use kurbo::{Point, Rect};
use understory_sortable::{
    Capabilities, Effects, InputModality, ItemEvent, ItemScene, Region, Sortable, SortableConfig,
    WindowEvent,
};

const ROW: f64 = 48.0;

fn main() {
    let caps = Capabilities {
        touch_events: true,
        max_touch_points: 10,
    };
    let mut engine = Sortable::with_capabilities(SortableConfig::new(), caps);
    assert_eq!(engine.modality(), InputModality::Touch);

    let mut items = vec!["Alpha", "Bravo", "Charlie", "Delta"];
    let mut scene = ItemScene::new();
    let rows: Vec<_> = (0..items.len())
        .map(|i| {
            let y = i as f64 * ROW;
            scene.insert(None, Region::new(Rect::new(0.0, y, 360.0, y + ROW)))
        })
        .collect();

    // Finger goes down on "Alpha", then slides down over the next rows.
    let moves = [(10, 70.0), (40, 80.0), (120, 110.0), (130, 160.0), (260, 170.0)];

    let mut listening = false;
    for step in 0..=moves.len() {
        let mut next = None;
        let mut list = engine.bind(&items, |order| next = Some(order));

        // Sync markers and hit-test transparency from this frame's props.
        for (i, id) in rows.iter().enumerate() {
            scene.sync_item(*id, &list.item_props(i));
        }

        let response = if step == 0 {
            let press = list.item_props(0).binding;
            list.on_item(press, ItemEvent::PointerDown)
        } else {
            let (ms, y) = moves[step - 1];
            let event = WindowEvent::PointerMove {
                position: Point::new(100.0, y),
                time: Duration::from_millis(ms),
            };
            list.on_window(event, &scene)
        };
        drop(list);

        listening |= response.effects.contains(Effects::CAPTURE_WINDOW);
        println!("step {step}: {:?}", response.outcome);
        if let Some(order) = next {
            items = order;
            println!("  order: {items:?}");
        }
    }

    let response = engine
        .bind(&items, |_| {})
        .on_window(WindowEvent::PointerUp, &scene);
    println!("release: {:?}, effects {:?}", response.outcome, response.effects);
    assert!(listening && response.effects.contains(Effects::RELEASE_WINDOW));
    assert_eq!(items, ["Bravo", "Charlie", "Delta", "Alpha"]);
}
