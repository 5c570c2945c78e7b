// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer (touch) strategy.
//!
//! ## State machine
//!
//! - A press on an item (free-drag mode) or a handle begins a session and asks
//!   the host to attach window-scoped move/up listeners. They must live on the
//!   window: the pointer leaves the origin element as soon as it moves.
//! - Each move is throttled against the last committed step, then hit-tested;
//!   a marked item other than the dragged one commits a step.
//! - Release ends the session and detaches the listeners, wherever it happens.
//!
//! Items request `touch-action: none` and `user-select: none` so the platform
//! does not turn the gesture into a scroll or a selection. The dragged item
//! requests `pointer-events: none` so hit tests see the item beneath it.
//!
//! The time of the last committed step survives the end of a session.

use core::time::Duration;

use crate::config::Throttle;
use crate::modality::InputModality;
use crate::props::{ItemStyle, PointerEvents, TouchAction, UserSelect};
use crate::strategy::GestureStrategy;
use crate::types::{Effects, EventMask, Ignored};

/// Strategy driven by pointer events and hit testing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TouchStrategy {
    throttle: Throttle,
    last_step: Option<Duration>,
    listening: bool,
}

impl TouchStrategy {
    /// Create the strategy with the given step rate limit.
    pub const fn new(throttle: Throttle) -> Self {
        Self {
            throttle,
            last_step: None,
            listening: false,
        }
    }

    /// Time of the last committed step.
    pub const fn last_step(&self) -> Option<Duration> {
        self.last_step
    }

    /// Whether window listeners are currently attached.
    pub const fn is_listening(&self) -> bool {
        self.listening
    }
}

impl GestureStrategy for TouchStrategy {
    fn modality(&self) -> InputModality {
        InputModality::Touch
    }

    fn item_events(&self) -> EventMask {
        EventMask::POINTER_DOWN
    }

    fn item_style(&self, dragging: bool) -> ItemStyle {
        ItemStyle {
            touch_action: TouchAction::None,
            user_select: UserSelect::None,
            pointer_events: if dragging {
                PointerEvents::None
            } else {
                PointerEvents::Auto
            },
        }
    }

    fn begin(&mut self, _index: usize) -> Effects {
        self.listening = true;
        Effects::CAPTURE_WINDOW
    }

    fn admit_move(&self, now: Duration) -> Result<(), Ignored> {
        if self.throttle.admits(self.last_step, now) {
            Ok(())
        } else {
            Err(Ignored::Throttled)
        }
    }

    fn record_step(&mut self, now: Option<Duration>) {
        if now.is_some() {
            self.last_step = now;
        }
    }

    fn end(&mut self) -> Effects {
        if core::mem::take(&mut self.listening) {
            Effects::RELEASE_WINDOW
        } else {
            Effects::empty()
        }
    }
}
