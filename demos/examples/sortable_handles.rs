// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag handles.
//!
//! Rendering a handle switches the list to handle-only mode: a drag that starts
//! on the item body is refused, a drag that starts on the handle proceeds.
//!
//! Run:
//! - `cargo run -p understory_examples --example sortable_handles`

use understory_sortable::{
    DragOrigin, HandleEvent, Ignored, ItemEvent, ModalityPreference, Sortable, SortableConfig,
};

fn main() {
    let mut engine =
        Sortable::new(SortableConfig::new().with_modality(ModalityPreference::Desktop));
    let items = ["Intro", "Body", "Outro"];
    let mut published = Vec::new();
    let mut list = engine.bind(&items, |order| published.push(order));

    // "Render" the list: each row gets item props and handle props.
    let rows: Vec<_> = (0..items.len())
        .map(|i| (list.item_props(i), list.handle_props(i)))
        .collect();
    for (item, handle) in &rows {
        println!(
            "row {}: draggable={} handle cursor={:?}",
            item.marker.index(),
            item.draggable,
            handle.style.cursor
        );
    }

    // Grabbing the body of "Intro" does nothing.
    list.on_item(rows[0].0.binding, ItemEvent::PointerDown);
    let refused = list.on_item(rows[0].0.binding, ItemEvent::DragStart);
    assert_eq!(refused.ignored_reason(), Some(Ignored::DisallowedOrigin));
    println!("body drag: {:?}, effects {:?}", refused.outcome, refused.effects);

    // Grabbing its handle works.
    let press = list.on_handle(rows[0].1.binding, HandleEvent::PointerDown);
    println!("handle press effects: {:?}", press.effects);
    println!("drag start: {:?}", list.on_item(rows[0].0.binding, ItemEvent::DragStart).outcome);
    println!("enter row 2: {:?}", list.on_item(rows[2].0.binding, ItemEvent::DragEnter).outcome);
    println!("drag end: {:?}", list.on_item(rows[2].0.binding, ItemEvent::DragEnd).outcome);
    drop(list);

    assert_eq!(engine.drag_origin(), DragOrigin::Handle);
    assert_eq!(published, [vec!["Body", "Outro", "Intro"]]);
}
