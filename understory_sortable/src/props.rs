// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame props for item and handle elements.
//!
//! Props are plain values derived from the engine state at the time they are
//! requested. Bindings carry only the index they were derived for, so a host
//! that re-requests props every frame can never dispatch through a stale
//! binding into a newer state.

use crate::types::{EventMask, ItemMarker};

/// Binding for an item surface; pass it back to
/// [`SortableList::on_item`](crate::list::SortableList::on_item).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemBinding {
    /// Index the binding was derived for.
    pub index: usize,
}

/// Binding for a handle; pass it back to
/// [`SortableList::on_handle`](crate::list::SortableList::on_handle).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandleBinding {
    /// Index of the item owning the handle.
    pub index: usize,
}

/// CSS `touch-action`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// Platform gestures (scroll, zoom) allowed.
    #[default]
    Auto,
    /// Platform gestures disabled so the pointer stream reaches the engine.
    None,
}

/// CSS `user-select`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UserSelect {
    /// Text selectable.
    #[default]
    Auto,
    /// Text selection disabled.
    None,
}

/// CSS `pointer-events`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerEvents {
    /// Element participates in hit testing.
    #[default]
    Auto,
    /// Element (and its subtree) is transparent to hit testing.
    None,
}

/// CSS `cursor`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Platform default.
    #[default]
    Auto,
    /// Open hand, signalling a draggable handle.
    Grab,
}

/// Style hints for an item element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemStyle {
    /// Touch gesture handling.
    pub touch_action: TouchAction,
    /// Text selection.
    pub user_select: UserSelect,
    /// Hit-test participation.
    pub pointer_events: PointerEvents,
}

/// Style hints for a handle element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandleStyle {
    /// Pointer cursor.
    pub cursor: Cursor,
    /// Touch gesture handling.
    pub touch_action: TouchAction,
    /// Text selection.
    pub user_select: UserSelect,
}

impl HandleStyle {
    /// Grab cursor, no platform touch gestures, no selection.
    pub const GRAB: Self = Self {
        cursor: Cursor::Grab,
        touch_action: TouchAction::None,
        user_select: UserSelect::None,
    };
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self::GRAB
    }
}

/// Everything a host needs to wire one item element for the current frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemProps {
    /// Marker the hit test resolves to this item.
    pub marker: ItemMarker,
    /// Whether this item is the one being moved (for visual feedback).
    pub is_dragging: bool,
    /// Whether the element must be natively draggable.
    pub draggable: bool,
    /// Events to forward through [`ItemProps::binding`].
    pub events: EventMask,
    /// Style hints.
    pub style: ItemStyle,
    /// Dispatch binding.
    pub binding: ItemBinding,
}

/// Everything a host needs to wire one handle element for the current frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandleProps {
    /// Events to forward through [`HandleProps::binding`].
    pub events: EventMask,
    /// Style hints.
    pub style: HandleStyle,
    /// Dispatch binding.
    pub binding: HandleBinding,
}
