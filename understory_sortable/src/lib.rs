// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sortable --heading-base-level=0

//! Understory Sortable: a headless, `no_std` drag-to-reorder engine for lists.
//!
//! ## Overview
//!
//! The engine turns a drag gesture over a list into a sequence of reorder steps.
//! Each step moves the dragged element to the position of the item under the
//! pointer and publishes the full new order through a caller-supplied callback,
//! so the list reorders live while the gesture is in progress.
//!
//! Two input modalities are supported behind one contract:
//! - Desktop: native drag-and-drop events (drag start, enter, over, end).
//! - Touch: pointer down on the item, then window-scoped pointer moves resolved
//!   to items by hit testing, rate-limited by a [`Throttle`].
//!
//! The modality is chosen once per engine from a [`Capabilities`] probe or an
//! explicit [`ModalityPreference`].
//!
//! ## Handles
//!
//! Items can be dragged from anywhere on their surface, or only from a handle.
//! Requesting [`HandleProps`] for any item switches the list to handle-only mode
//! for the rest of its lifetime; [`DragOrigin::Handle`] selects it up front.
//!
//! ## Host integration
//!
//! This crate owns no elements and installs no listeners. The host renders items
//! with [`ItemProps`] and handles with [`HandleProps`], forwards their events to
//! [`SortableList`], and applies the [`Effects`] it gets back: preventing native
//! defaults, stopping propagation, and attaching or detaching window listeners.
//! Pointer positions are resolved to items through a [`HitTest`]; [`ItemScene`]
//! is a small Kurbo-based implementation for hosts without one.
//!
//! Events that do not apply are dropped and reported as [`Outcome::Ignored`]
//! with a reason; none of them are errors.
//!
//! ## Minimal usage
//!
//! ```
//! use understory_sortable::{
//!     ItemEvent, ModalityPreference, Outcome, ReorderStep, Sortable, SortableConfig,
//! };
//!
//! let mut engine = Sortable::new(
//!     SortableConfig::new().with_modality(ModalityPreference::Desktop),
//! );
//! let items = vec!["A", "B", "C", "D"];
//! let mut latest = None;
//! let mut list = engine.bind(&items, |order| latest = Some(order));
//!
//! let a = list.item_props(0).binding;
//! let c = list.item_props(2).binding;
//! assert_eq!(list.on_item(a, ItemEvent::DragStart).outcome, Outcome::Started(0));
//! let step = list.on_item(c, ItemEvent::DragEnter).committed();
//! assert_eq!(step, Some(ReorderStep::new(0, 2)));
//! list.on_item(c, ItemEvent::DragEnd);
//! drop(list);
//!
//! assert_eq!(latest, Some(vec!["B", "C", "A", "D"]));
//! assert!(!engine.is_dragging());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo.
//! - `libm`: `no_std` float support for Kurbo.
//! - `tracing`: debug events for session transitions and trace events for every
//!   dispatched event, under the `understory_sortable` target.
//! - `serde`: (de)serialization of [`SortableConfig`] and friends.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

pub mod config;
pub mod desktop;
pub mod gate;
pub mod hit;
pub mod list;
pub mod modality;
pub mod props;
pub mod reorder;
pub mod session;
pub mod strategy;
pub mod touch;
pub mod types;

pub use config::{DEFAULT_THROTTLE_INTERVAL, DragOrigin, SortableConfig, Throttle};
pub use hit::{HitTest, ItemScene, NodeFlags, Region, RegionId, SceneHit};
pub use list::{Sortable, SortableList};
pub use modality::{Capabilities, InputModality, ModalityPreference};
pub use props::{HandleBinding, HandleProps, HandleStyle, ItemBinding, ItemProps, ItemStyle};
pub use reorder::{ReorderStep, compute_reorder, reorder_in_place};
pub use strategy::GestureStrategy;
pub use types::{
    Effects, EventMask, GestureOrigin, HandleEvent, Ignored, ItemEvent, ItemMarker, Outcome,
    Response, WindowEvent,
};
