// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture strategies: one contract, two input modalities.
//!
//! ## Overview
//!
//! Native drag events and pointer events describe the same gesture with
//! incompatible primitives: discrete enter notifications versus a continuous
//! stream of coordinates. A [`GestureStrategy`] hides that difference behind a
//! begin / admit / end contract. The [`Sortable`](crate::list::Sortable) owns
//! the shared session, gate and reorder logic and asks its strategy only the
//! modality-specific questions:
//!
//! - which item events to listen to and how items should be styled;
//! - what the host must do when a session begins or ends;
//! - whether a continuous move may commit yet.
//!
//! [`Strategy`] selects one implementation per engine.

use core::time::Duration;

use crate::config::Throttle;
use crate::desktop::DesktopStrategy;
use crate::modality::InputModality;
use crate::props::ItemStyle;
use crate::touch::TouchStrategy;
use crate::types::{Effects, EventMask, Ignored};

/// Modality-specific half of the reorder contract.
pub trait GestureStrategy {
    /// The modality this strategy serves.
    fn modality(&self) -> InputModality;

    /// Item events the host must forward.
    fn item_events(&self) -> EventMask;

    /// Style hints for an item, given whether it is the one being dragged.
    fn item_style(&self, dragging: bool) -> ItemStyle;

    /// A session began at `index`; returns the host effects to apply.
    fn begin(&mut self, index: usize) -> Effects;

    /// Whether a move observed at `now` may attempt a reorder step.
    fn admit_move(&self, now: Duration) -> Result<(), Ignored>;

    /// A step committed; `now` is the time of the move that produced it, if known.
    fn record_step(&mut self, now: Option<Duration>);

    /// The session ended; returns the host effects to apply.
    fn end(&mut self) -> Effects;
}

/// The strategy chosen for an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Native drag events.
    Desktop(DesktopStrategy),
    /// Pointer events with hit testing.
    Touch(TouchStrategy),
}

impl Strategy {
    /// Build the strategy for `modality`.
    pub fn select(modality: InputModality, throttle: Throttle) -> Self {
        match modality {
            InputModality::Desktop => Self::Desktop(DesktopStrategy::new()),
            InputModality::Touch => Self::Touch(TouchStrategy::new(throttle)),
        }
    }

    fn inner(&self) -> &dyn GestureStrategy {
        match self {
            Self::Desktop(s) => s,
            Self::Touch(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn GestureStrategy {
        match self {
            Self::Desktop(s) => s,
            Self::Touch(s) => s,
        }
    }
}

impl GestureStrategy for Strategy {
    fn modality(&self) -> InputModality {
        self.inner().modality()
    }

    fn item_events(&self) -> EventMask {
        self.inner().item_events()
    }

    fn item_style(&self, dragging: bool) -> ItemStyle {
        self.inner().item_style(dragging)
    }

    fn begin(&mut self, index: usize) -> Effects {
        self.inner_mut().begin(index)
    }

    fn admit_move(&self, now: Duration) -> Result<(), Ignored> {
        self.inner().admit_move(now)
    }

    fn record_step(&mut self, now: Option<Duration>) {
        self.inner_mut().record_step(now);
    }

    fn end(&mut self) -> Effects {
        self.inner_mut().end()
    }
}
