// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: input events, host effects, outcomes, and item markers.
//!
//! ## Overview
//!
//! Hosts translate their native events into [`ItemEvent`], [`HandleEvent`] and
//! [`WindowEvent`] and hand them to a [`SortableList`](crate::list::SortableList).
//! Every handler answers with a [`Response`]: the [`Effects`] the host must apply
//! to the native event or listeners, and an [`Outcome`] describing what the
//! engine decided.

use core::time::Duration;

use kurbo::Point;

use crate::reorder::ReorderStep;

bitflags::bitflags! {
    /// Side effects the host applies after dispatching an event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Effects: u8 {
        /// Prevent the platform default (cancels a native drag start; keeps drop targets live on drag-over).
        const PREVENT_DEFAULT  = 0b0000_0001;
        /// Stop the event from reaching the item's own press listener.
        const STOP_PROPAGATION = 0b0000_0010;
        /// Attach window-scoped pointer-move and pointer-up listeners.
        const CAPTURE_WINDOW   = 0b0000_0100;
        /// Detach the window-scoped listeners attached by [`Effects::CAPTURE_WINDOW`].
        const RELEASE_WINDOW   = 0b0000_1000;
    }
}

bitflags::bitflags! {
    /// Native events a binding wants to receive.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        /// Pointer (mouse, pen, touch) pressed.
        const POINTER_DOWN = 0b0000_0001;
        /// Native drag started on the element.
        const DRAG_START   = 0b0000_0010;
        /// Native drag entered the element.
        const DRAG_ENTER   = 0b0000_0100;
        /// Native drag is over the element.
        const DRAG_OVER    = 0b0000_1000;
        /// Native drag ended (dropped or cancelled).
        const DRAG_END     = 0b0001_0000;
        /// Pointer moved (window-scoped).
        const POINTER_MOVE = 0b0010_0000;
        /// Pointer released (window-scoped).
        const POINTER_UP   = 0b0100_0000;
    }
}

/// Positional marker attached to an item element, resolved by hit testing.
///
/// DOM hosts store it as the `data-sortable-index` attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemMarker(pub usize);

impl ItemMarker {
    /// Attribute name used by DOM hosts.
    pub const ATTRIBUTE: &'static str = "data-sortable-index";

    /// Index of the marked item for the frame the marker was rendered in.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Parse an attribute value back into a marker.
    ///
    /// Returns `None` for anything that is not a plain decimal index.
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(Self)
    }
}

/// Where the gesture currently in flight was pressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureOrigin {
    /// No press recorded.
    #[default]
    None,
    /// The plain surface of an item.
    Item,
    /// A designated handle inside an item.
    Handle,
}

/// Events delivered to an item's own surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemEvent {
    /// Pointer pressed on the item surface.
    PointerDown,
    /// Native drag started from this item.
    DragStart,
    /// Native drag entered this item.
    DragEnter,
    /// Native drag is over this item.
    DragOver,
    /// Native drag ended; fired on the source whether or not a drop happened.
    DragEnd,
}

impl ItemEvent {
    /// The mask bit a binding must listen to for this event.
    pub const fn mask(self) -> EventMask {
        match self {
            Self::PointerDown => EventMask::POINTER_DOWN,
            Self::DragStart => EventMask::DRAG_START,
            Self::DragEnter => EventMask::DRAG_ENTER,
            Self::DragOver => EventMask::DRAG_OVER,
            Self::DragEnd => EventMask::DRAG_END,
        }
    }
}

/// Events delivered to a handle element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HandleEvent {
    /// Pointer pressed on the handle.
    PointerDown,
}

/// Window-scoped pointer events, delivered while listeners are captured.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// Pointer moved to `position` (viewport coordinates) at host time `time`.
    PointerMove {
        /// Viewport position of the pointer.
        position: Point,
        /// Monotonic host timestamp of the event.
        time: Duration,
    },
    /// Pointer released anywhere in the window.
    PointerUp,
}

/// Why an event did not change anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ignored {
    /// No session is active.
    NoSession,
    /// A session is already active; only one may run at a time.
    SessionActive,
    /// The press origin is not allowed to start a gesture in handle-only mode.
    DisallowedOrigin,
    /// The target equals the dragged position.
    RedundantTarget,
    /// An index does not refer to an element of the current items.
    OutOfBounds,
    /// The move arrived before the minimum step interval elapsed.
    Throttled,
    /// The hit test found no marked item under the pointer.
    NoTarget,
    /// The event is not meaningful for the active input modality.
    Unsupported,
}

/// What the engine did with an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A drag session started at the given index.
    Started(usize),
    /// A reorder step was published through the callback.
    Committed(ReorderStep),
    /// The session ended; carries the final dragged index.
    Ended(usize),
    /// The event was accepted without changing the session.
    Acknowledged,
    /// The event was dropped.
    Ignored(Ignored),
}

/// Result of dispatching one event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Response {
    /// Effects for the host to apply.
    pub effects: Effects,
    /// Engine decision.
    pub outcome: Outcome,
}

impl Response {
    /// A response with no host effects.
    pub const fn new(outcome: Outcome) -> Self {
        Self {
            effects: Effects::empty(),
            outcome,
        }
    }

    /// An ignored event with no host effects.
    pub const fn ignored(reason: Ignored) -> Self {
        Self::new(Outcome::Ignored(reason))
    }

    /// Add host effects.
    #[must_use]
    pub const fn with_effects(mut self, effects: Effects) -> Self {
        self.effects = self.effects.union(effects);
        self
    }

    /// The committed step, if any.
    pub const fn committed(&self) -> Option<ReorderStep> {
        match self.outcome {
            Outcome::Committed(step) => Some(step),
            _ => None,
        }
    }

    /// The reason the event was dropped, if it was.
    pub const fn ignored_reason(&self) -> Option<Ignored> {
        match self.outcome {
            Outcome::Ignored(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<Ignored> for Response {
    fn from(reason: Ignored) -> Self {
        Self::ignored(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_parses_decimal_indices() {
        assert_eq!(ItemMarker::parse("3"), Some(ItemMarker(3)));
        assert_eq!(ItemMarker::parse(" 12 "), Some(ItemMarker(12)));
        assert_eq!(ItemMarker::parse(""), None);
        assert_eq!(ItemMarker::parse("-1"), None);
        assert_eq!(ItemMarker::parse("NaN"), None);
    }

    #[test]
    fn item_events_map_to_distinct_bits() {
        let all = [
            ItemEvent::PointerDown,
            ItemEvent::DragStart,
            ItemEvent::DragEnter,
            ItemEvent::DragOver,
            ItemEvent::DragEnd,
        ];
        let mut seen = EventMask::empty();
        for ev in all {
            assert!(!seen.intersects(ev.mask()), "{ev:?} shares a bit");
            seen |= ev.mask();
        }
        assert_eq!(seen.bits().count_ones(), 5);
    }

    #[test]
    fn response_effects_accumulate() {
        let r = Response::ignored(Ignored::DisallowedOrigin)
            .with_effects(Effects::PREVENT_DEFAULT)
            .with_effects(Effects::STOP_PROPAGATION);
        assert_eq!(
            r.effects,
            Effects::PREVENT_DEFAULT | Effects::STOP_PROPAGATION
        );
        assert_eq!(r.ignored_reason(), Some(Ignored::DisallowedOrigin));
        assert_eq!(r.committed(), None);
    }
}
