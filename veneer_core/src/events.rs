// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event payloads and per-view listener slots.

use kurbo::Rect;

use crate::callback::Callback;

/// Delivered to a view's layout listener after its frame changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEvent {
    /// The frame in the parent's coordinate space.
    pub frame: Rect,
}

/// Phase of a pointer interaction with a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The user started interacting with the view.
    Down,
    /// The user stopped interacting with the view.
    Up,
    /// The interaction was taken over, e.g. by a scroll gesture.
    Cancel,
}

/// Listener slots a view exposes to the event layer.
///
/// All slots start empty. There is no ordering guarantee between different
/// slots.
#[derive(Debug, Default)]
pub struct ViewCallbacks {
    /// Fired when the view's frame changes.
    pub on_layout: Callback<LayoutEvent>,
    /// Fired on [`PointerPhase::Down`].
    pub on_pointer_down: Callback<()>,
    /// Fired on [`PointerPhase::Up`].
    pub on_pointer_up: Callback<()>,
    /// Fired on [`PointerPhase::Cancel`].
    pub on_pointer_cancel: Callback<()>,
}

impl ViewCallbacks {
    /// Creates a set of empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forwards a pointer notification to the matching slot.
    ///
    /// Returns `false` if that slot is empty.
    pub fn dispatch_pointer(&mut self, phase: PointerPhase) -> bool {
        let slot = match phase {
            PointerPhase::Down => &mut self.on_pointer_down,
            PointerPhase::Up => &mut self.on_pointer_up,
            PointerPhase::Cancel => &mut self.on_pointer_cancel,
        };
        slot.invoke(())
    }

    /// Forwards a layout event. Returns `false` if nobody listens.
    pub fn dispatch_layout(&mut self, event: LayoutEvent) -> bool {
        self.on_layout.invoke(event)
    }
}
