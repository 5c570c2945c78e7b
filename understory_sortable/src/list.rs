// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine and its per-frame view.
//!
//! ## Usage
//!
//! - Keep one [`Sortable`] per list for the list's lifetime. It owns the drag
//!   session, the handle gate and the modality strategy, and nothing else.
//! - Every frame, call [`Sortable::bind`] with the current items and a reorder
//!   callback to get a [`SortableList`]. Request [`ItemProps`] and
//!   [`HandleProps`] from it while rendering.
//! - Forward native events through the bindings in those props
//!   ([`SortableList::on_item`], [`SortableList::on_handle`]) and, while window
//!   listeners are captured, [`SortableList::on_window`]. Apply the returned
//!   [`Effects`] to the native event or listeners.
//!
//! The callback receives the full new order on every committed step and should
//! become the caller's source of truth before the next frame. The engine never
//! keeps a copy of the items; a step computed against items that the caller has
//! since changed applies to whatever was last passed to [`Sortable::bind`].

use alloc::vec::Vec;

use crate::config::{DragOrigin, SortableConfig};
use crate::gate::HandleGate;
use crate::hit::HitTest;
use crate::modality::{Capabilities, InputModality};
use crate::props::{HandleBinding, HandleProps, HandleStyle, ItemBinding, ItemProps};
use crate::reorder::{ReorderStep, compute_reorder};
use crate::session::Session;
use crate::strategy::{GestureStrategy, Strategy};
use crate::types::{
    Effects, EventMask, GestureOrigin, HandleEvent, Ignored, ItemEvent, ItemMarker, Outcome,
    Response, WindowEvent,
};

/// Drag-to-reorder engine for one list.
#[derive(Clone, Debug)]
pub struct Sortable {
    config: SortableConfig,
    strategy: Strategy,
    gate: HandleGate,
    session: Session,
}

impl Default for Sortable {
    fn default() -> Self {
        Self::new(SortableConfig::default())
    }
}

impl Sortable {
    /// Create an engine, probing an environment without touch support.
    pub fn new(config: SortableConfig) -> Self {
        Self::with_capabilities(config, Capabilities::default())
    }

    /// Create an engine, resolving the modality against `caps` once.
    pub fn with_capabilities(config: SortableConfig, caps: Capabilities) -> Self {
        let modality = config.modality.resolve(caps);
        sdebug!(?modality, origin = ?config.drag_origin, "sortable created");
        Self {
            config,
            strategy: Strategy::select(modality, config.throttle),
            gate: HandleGate::new(config.drag_origin),
            session: Session::new(),
        }
    }

    /// Configuration the engine was created with.
    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    /// Modality chosen at construction.
    pub fn modality(&self) -> InputModality {
        self.strategy.modality()
    }

    /// Current drag origin policy (may have switched to handles since construction).
    pub fn drag_origin(&self) -> DragOrigin {
        self.gate.mode()
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// Index currently being moved.
    pub fn dragged_index(&self) -> Option<usize> {
        self.session.dragged_index()
    }

    /// Origin of the recorded press.
    pub fn gesture_origin(&self) -> GestureOrigin {
        self.session.origin()
    }

    /// Bind this frame's items and reorder callback.
    pub fn bind<'a, T, F>(&'a mut self, items: &'a [T], on_reorder: F) -> SortableList<'a, T, F>
    where
        T: Clone,
        F: FnMut(Vec<T>),
    {
        SortableList {
            engine: self,
            items,
            on_reorder,
        }
    }
}

/// One frame's view of a [`Sortable`]: props for rendering and event dispatch.
pub struct SortableList<'a, T, F> {
    engine: &'a mut Sortable,
    items: &'a [T],
    on_reorder: F,
}

impl<T, F> core::fmt::Debug for SortableList<'_, T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortableList")
            .field("engine", &self.engine)
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl<'a, T, F> SortableList<'a, T, F>
where
    T: Clone,
    F: FnMut(Vec<T>),
{
    /// Items bound for this frame.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    /// Index currently being moved.
    pub fn dragged_index(&self) -> Option<usize> {
        self.engine.dragged_index()
    }

    /// Props for the item at `index`.
    ///
    /// Attaching only item props keeps the list in free-drag mode.
    pub fn item_props(&self, index: usize) -> ItemProps {
        let engine = &*self.engine;
        let is_dragging = engine.session.dragged_index() == Some(index);
        ItemProps {
            marker: ItemMarker(index),
            is_dragging,
            draggable: engine.modality() == InputModality::Desktop,
            events: engine.strategy.item_events(),
            style: engine.strategy.item_style(is_dragging),
            binding: ItemBinding { index },
        }
    }

    /// Props for the handle of the item at `index`.
    ///
    /// Requesting handle props for any index switches the whole list to
    /// handle-only mode, permanently.
    pub fn handle_props(&mut self, index: usize) -> HandleProps {
        if self.engine.gate.register_handle() {
            sdebug!(index, "handle registered; list is now handle-only");
        }
        HandleProps {
            events: EventMask::POINTER_DOWN,
            style: HandleStyle::GRAB,
            binding: HandleBinding { index },
        }
    }

    /// Dispatch an event received on an item surface.
    pub fn on_item(&mut self, binding: ItemBinding, event: ItemEvent) -> Response {
        if !self.engine.strategy.item_events().contains(event.mask()) {
            return Response::ignored(Ignored::Unsupported);
        }
        let index = binding.index;
        let response = match (self.engine.modality(), event) {
            (InputModality::Desktop, ItemEvent::PointerDown) => {
                // A plain press clears any handle press recorded earlier.
                self.engine.session.record(GestureOrigin::Item);
                Response::new(Outcome::Acknowledged)
            }
            (InputModality::Desktop, ItemEvent::DragStart) => match self.start_native(index) {
                Ok(response) => response,
                // The native drag must not proceed when no session started.
                Err(reason) => Response::ignored(reason).with_effects(Effects::PREVENT_DEFAULT),
            },
            (InputModality::Desktop, ItemEvent::DragEnter) => self.step_response(index, None),
            (InputModality::Desktop, ItemEvent::DragOver) => {
                Response::new(Outcome::Acknowledged).with_effects(Effects::PREVENT_DEFAULT)
            }
            (InputModality::Desktop, ItemEvent::DragEnd) => self.finish(),
            (InputModality::Touch, ItemEvent::PointerDown) => {
                match self.engine.session.press(GestureOrigin::Item) {
                    Ok(()) => self.start(index).unwrap_or_else(Response::ignored),
                    Err(reason) => reason.into(),
                }
            }
            (InputModality::Touch, _) => Response::ignored(Ignored::Unsupported),
        };
        trace_response("item", Some(index), &response);
        response
    }

    /// Dispatch an event received on a handle.
    ///
    /// The response always asks the host to stop propagation, so the item's
    /// own press listener does not overwrite the handle press.
    pub fn on_handle(&mut self, binding: HandleBinding, event: HandleEvent) -> Response {
        let index = binding.index;
        let response = match event {
            HandleEvent::PointerDown => match self.engine.modality() {
                InputModality::Desktop => {
                    // The native drag start that follows reads the recorded origin.
                    self.engine.session.record(GestureOrigin::Handle);
                    Response::new(Outcome::Acknowledged)
                }
                InputModality::Touch => match self.engine.session.press(GestureOrigin::Handle) {
                    Ok(()) => self.start(index).unwrap_or_else(Response::ignored),
                    Err(reason) => reason.into(),
                },
            },
        };
        let response = response.with_effects(Effects::STOP_PROPAGATION);
        trace_response("handle", Some(index), &response);
        response
    }

    /// Dispatch a window-scoped pointer event, hit-testing moves with `hit`.
    pub fn on_window(&mut self, event: WindowEvent, hit: &impl HitTest) -> Response {
        if self.engine.modality() != InputModality::Touch {
            return Response::ignored(Ignored::Unsupported);
        }
        let response = match event {
            WindowEvent::PointerMove { position, time } => {
                match self.hit_target(position, time, hit) {
                    Ok(target) => self.step_response(target, Some(time)),
                    Err(reason) => Response::ignored(reason),
                }
            }
            WindowEvent::PointerUp => self.finish(),
        };
        trace_response("window", self.engine.dragged_index(), &response);
        response
    }

    // --- internals ---

    /// Begin a session at `index` if the gate admits the recorded press.
    fn start(&mut self, index: usize) -> Result<Response, Ignored> {
        let engine = &mut *self.engine;
        if engine.session.is_active() {
            return Err(Ignored::SessionActive);
        }
        if !engine.gate.allows(engine.session.origin()) {
            return Err(Ignored::DisallowedOrigin);
        }
        engine.session.begin(index, self.items.len())?;
        let effects = engine.strategy.begin(index);
        sdebug!(index, origin = ?engine.session.origin(), "drag session started");
        Ok(Response::new(Outcome::Started(index)).with_effects(effects))
    }

    /// Begin a native drag at `index`, replacing a session that never saw its drag end.
    fn start_native(&mut self, index: usize) -> Result<Response, Ignored> {
        let engine = &mut *self.engine;
        if engine.session.is_active() && engine.gate.allows(engine.session.origin()) {
            #[cfg_attr(
                not(feature = "tracing"),
                expect(unused_variables, reason = "only read when tracing is enabled")
            )]
            let stale = engine.session.abandon();
            engine.strategy.end();
            sdebug!(?stale, "replacing a drag session that never ended");
        }
        self.start(index)
    }

    /// Resolve the pointer position to a target index for an active session.
    fn hit_target(
        &self,
        position: kurbo::Point,
        time: core::time::Duration,
        hit: &impl HitTest,
    ) -> Result<usize, Ignored> {
        if !self.engine.session.is_active() {
            return Err(Ignored::NoSession);
        }
        self.engine.strategy.admit_move(time)?;
        hit.item_at(position)
            .map(ItemMarker::index)
            .ok_or(Ignored::NoTarget)
    }

    fn step_response(&mut self, target: usize, now: Option<core::time::Duration>) -> Response {
        match self.step(target, now) {
            Ok(step) => Response::new(Outcome::Committed(step)),
            Err(reason) => Response::ignored(reason),
        }
    }

    /// Move the dragged element to `target`, publish the new order, and track it.
    fn step(
        &mut self,
        target: usize,
        now: Option<core::time::Duration>,
    ) -> Result<ReorderStep, Ignored> {
        let from = self.engine.session.dragged_index().ok_or(Ignored::NoSession)?;
        if from == target {
            return Err(Ignored::RedundantTarget);
        }
        let reordered = compute_reorder(self.items, from, target).ok_or(Ignored::OutOfBounds)?;
        (self.on_reorder)(reordered);
        self.engine.session.advance(target);
        self.engine.strategy.record_step(now);
        sdebug!(from, to = target, "reorder step committed");
        Ok(ReorderStep::new(from, target))
    }

    /// End the active session, if any.
    fn finish(&mut self) -> Response {
        let engine = &mut *self.engine;
        let ended = engine.session.end();
        let effects = engine.strategy.end();
        match ended {
            Some(index) => {
                sdebug!(index, "drag session ended");
                Response::new(Outcome::Ended(index)).with_effects(effects)
            }
            None => Response::ignored(Ignored::NoSession).with_effects(effects),
        }
    }
}

#[cfg_attr(
    not(feature = "tracing"),
    expect(unused_variables, reason = "only read when tracing is enabled")
)]
fn trace_response(source: &'static str, index: Option<usize>, response: &Response) {
    strace!(source, ?index, ?response, "event dispatched");
}
