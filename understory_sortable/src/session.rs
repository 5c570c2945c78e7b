// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state machine.
//!
//! A session is idle or dragging. While idle it remembers where the most recent
//! press landed ([`GestureOrigin`]), which the gate reads when a gesture tries to
//! start. Ending a session always returns to idle with no recorded origin.
//!
//! Pointer-driven gestures refuse a second press while dragging. Native drags
//! are exclusive on the platform side, so a native press or drag start may
//! replace a session whose end event never arrived.

use crate::types::{GestureOrigin, Ignored};

/// Per-list drag session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    dragged: Option<usize>,
    origin: GestureOrigin,
}

impl Session {
    /// An idle session with no recorded press.
    pub const fn new() -> Self {
        Self {
            dragged: None,
            origin: GestureOrigin::None,
        }
    }

    /// Index currently being moved, if any.
    pub const fn dragged_index(&self) -> Option<usize> {
        self.dragged
    }

    /// Whether a gesture is in progress.
    pub const fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    /// Origin of the press that precedes or drives the current gesture.
    pub const fn origin(&self) -> GestureOrigin {
        self.origin
    }

    /// Record where a press landed.
    ///
    /// A press while a session is active belongs to another pointer and is refused.
    pub(crate) fn press(&mut self, origin: GestureOrigin) -> Result<(), Ignored> {
        if self.is_active() {
            return Err(Ignored::SessionActive);
        }
        self.origin = origin;
        Ok(())
    }

    /// Record where a press landed, even while a session is active.
    pub(crate) fn record(&mut self, origin: GestureOrigin) {
        self.origin = origin;
    }

    /// Leave the dragging state without clearing the recorded press.
    /// Returns the index that was being dragged.
    pub(crate) fn abandon(&mut self) -> Option<usize> {
        self.dragged.take()
    }

    /// Enter the dragging state at `index` within a collection of `len` items.
    pub(crate) fn begin(&mut self, index: usize, len: usize) -> Result<(), Ignored> {
        if self.is_active() {
            return Err(Ignored::SessionActive);
        }
        if index >= len {
            return Err(Ignored::OutOfBounds);
        }
        self.dragged = Some(index);
        Ok(())
    }

    /// Record that the dragged element now sits at `to`.
    pub(crate) fn advance(&mut self, to: usize) {
        if self.dragged.is_some() {
            self.dragged = Some(to);
        }
    }

    /// Return to idle, forgetting the press origin. Returns the final dragged index.
    pub(crate) fn end(&mut self) -> Option<usize> {
        self.origin = GestureOrigin::None;
        self.dragged.take()
    }
}
