// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle gate: which press origins may start a gesture.
//!
//! In [`DragOrigin::Anywhere`] mode every item surface is a valid origin. In
//! [`DragOrigin::Handle`] mode only a press recorded as
//! [`GestureOrigin::Handle`] may start one. The mode only ever moves from
//! `Anywhere` to `Handle`; registering a handle is irreversible for the list.

use crate::config::DragOrigin;
use crate::types::GestureOrigin;

/// Origin policy consulted by both strategies at gesture start.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HandleGate {
    mode: DragOrigin,
}

impl HandleGate {
    /// Create a gate in the given mode.
    pub const fn new(mode: DragOrigin) -> Self {
        Self { mode }
    }

    /// Current mode.
    pub const fn mode(&self) -> DragOrigin {
        self.mode
    }

    /// Whether the list is in handle-only mode.
    pub const fn handle_only(&self) -> bool {
        matches!(self.mode, DragOrigin::Handle)
    }

    /// Switch to handle-only mode. Returns `true` if this call changed the mode.
    pub fn register_handle(&mut self) -> bool {
        let switched = !self.handle_only();
        self.mode = DragOrigin::Handle;
        switched
    }

    /// Whether a gesture pressed at `origin` may start a session.
    pub const fn allows(&self, origin: GestureOrigin) -> bool {
        match self.mode {
            DragOrigin::Anywhere => true,
            DragOrigin::Handle => matches!(origin, GestureOrigin::Handle),
        }
    }
}
