// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native drag-and-drop strategy.
//!
//! ## State machine
//!
//! - Idle → Dragging on drag start at `i`, if the gate allows the recorded press
//!   origin. A rejected start asks the host to prevent the native drag.
//! - Dragging → Dragging on drag enter over `j != current`: one reorder step.
//! - Dragging → Idle on drag end, which the platform fires whether or not a drop
//!   happened.
//! - Dragging → Dragging on a drag start at `j` that the gate allows. The
//!   platform runs one native drag at a time, so the previous one lost its drag
//!   end (its source unmounted, for instance) and is replaced.
//!
//! Drag over must always prevent the default, or the platform never treats the
//! items as drop targets and enter events stop arriving. The window listeners
//! of the touch strategy are never needed here.

use core::time::Duration;

use crate::modality::InputModality;
use crate::props::ItemStyle;
use crate::strategy::GestureStrategy;
use crate::types::{Effects, EventMask, Ignored};

/// Strategy driven by native drag events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesktopStrategy {}

impl DesktopStrategy {
    /// Create the strategy.
    pub const fn new() -> Self {
        Self {}
    }
}

impl GestureStrategy for DesktopStrategy {
    fn modality(&self) -> InputModality {
        InputModality::Desktop
    }

    fn item_events(&self) -> EventMask {
        EventMask::POINTER_DOWN
            | EventMask::DRAG_START
            | EventMask::DRAG_ENTER
            | EventMask::DRAG_OVER
            | EventMask::DRAG_END
    }

    fn item_style(&self, _dragging: bool) -> ItemStyle {
        // The platform renders the drag image; items keep their own styling.
        ItemStyle::default()
    }

    fn begin(&mut self, _index: usize) -> Effects {
        Effects::empty()
    }

    fn admit_move(&self, _now: Duration) -> Result<(), Ignored> {
        // Enter events are discrete and already coalesced by the platform.
        Ok(())
    }

    fn record_step(&mut self, _now: Option<Duration>) {}

    fn end(&mut self) -> Effects {
        Effects::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listens_to_native_drag_events_and_presses() {
        let s = DesktopStrategy::new();
        let mask = s.item_events();
        assert!(mask.contains(EventMask::DRAG_START | EventMask::DRAG_END));
        assert!(mask.contains(EventMask::POINTER_DOWN));
        assert!(!mask.intersects(EventMask::POINTER_MOVE | EventMask::POINTER_UP));
    }

    #[test]
    fn sessions_need_no_window_listeners() {
        let mut s = DesktopStrategy::new();
        assert!(s.begin(3).is_empty());
        assert!(s.admit_move(Duration::ZERO).is_ok());
        assert!(s.end().is_empty());
        assert_eq!(s.item_style(true), ItemStyle::default());
    }
}
