// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sortable basics.
//!
//! Drive a desktop list through one native drag gesture, rebinding the new
//! order after every step the way a UI framework would between frames.
//!
//! Run:
//! - `cargo run -p understory_examples --example sortable_basics`

use understory_sortable::{
    Effects, ItemEvent, ModalityPreference, Outcome, Sortable, SortableConfig,
};

fn main() {
    let mut engine =
        Sortable::new(SortableConfig::new().with_modality(ModalityPreference::Desktop));
    let mut items = vec!["Milk", "Eggs", "Bread", "Butter", "Coffee"];

    // The native event stream for dragging "Milk" over "Eggs", then "Bread".
    let script = [
        (0, ItemEvent::PointerDown),
        (0, ItemEvent::DragStart),
        (1, ItemEvent::DragEnter),
        (1, ItemEvent::DragOver),
        (2, ItemEvent::DragEnter),
        (2, ItemEvent::DragOver),
        (2, ItemEvent::DragEnd),
    ];

    for (index, event) in script {
        let mut next = None;
        let mut list = engine.bind(&items, |order| next = Some(order));
        let binding = list.item_props(index).binding;
        let response = list.on_item(binding, event);
        drop(list);

        let prevent = response.effects.contains(Effects::PREVENT_DEFAULT);
        println!("{event:?} on {index}: {:?} (prevent default: {prevent})", response.outcome);
        if let Some(order) = next {
            items = order;
            println!("  order: {items:?}");
        }
        if let Outcome::Ended(at) = response.outcome {
            println!("dropped at {at}");
        }
    }

    assert_eq!(items, ["Eggs", "Bread", "Milk", "Butter", "Coffee"]);
}
