// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-view layout hook.
//!
//! A view does not solve its own layout. The layout engine hands it a
//! closure computing its frame, and the view evaluates that closure whenever
//! the native toolkit asks it to lay out. [`ViewLayout`] holds that closure
//! and turns frame changes into [`LayoutEvent`]s.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Rect;

use crate::events::{LayoutEvent, ViewCallbacks};
use crate::trace::{LayoutPassEvent, Tracer};

/// The layout closure of one view, plus the last frame it produced.
pub struct ViewLayout {
    compute: Box<dyn FnMut() -> Rect>,
    last: Option<Rect>,
}

impl ViewLayout {
    /// Wraps a closure returning the view's frame in its parent's space.
    pub fn new(compute: impl FnMut() -> Rect + 'static) -> Self {
        Self {
            compute: Box::new(compute),
            last: None,
        }
    }

    /// Replaces the closure. The next pass always emits.
    pub fn set(&mut self, compute: impl FnMut() -> Rect + 'static) {
        self.compute = Box::new(compute);
        self.last = None;
    }

    /// Forces the next pass to emit even if the frame is unchanged.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Returns the frame computed by the last pass.
    #[must_use]
    pub fn frame(&self) -> Option<Rect> {
        self.last
    }

    /// Runs one layout pass without tracing.
    pub fn layout(&mut self, callbacks: &mut ViewCallbacks) -> Rect {
        self.layout_traced(callbacks, &mut Tracer::none())
    }

    /// Evaluates the closure and, if the frame differs from the previous
    /// pass, delivers a [`LayoutEvent`] to `callbacks.on_layout`.
    ///
    /// The first pass after creation, [`set`](Self::set) or
    /// [`invalidate`](Self::invalidate) always emits. Returns the frame.
    pub fn layout_traced(&mut self, callbacks: &mut ViewCallbacks, tracer: &mut Tracer) -> Rect {
        let frame = (self.compute)();
        let changed = self.last != Some(frame);
        self.last = Some(frame);
        if changed {
            callbacks.dispatch_layout(LayoutEvent { frame });
        }
        tracer.layout(&LayoutPassEvent {
            frame,
            emitted: changed,
        });
        frame
    }
}

impl fmt::Debug for ViewLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewLayout")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    use kurbo::Size;

    use super::*;
    use crate::dimension::Dimension;
    use crate::edges::{ByEdge, inset_rect};

    fn recording(callbacks: &mut ViewCallbacks) -> Rc<RefCell<Vec<Rect>>> {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        callbacks
            .on_layout
            .set(move |e: LayoutEvent| sink.borrow_mut().push(e.frame));
        frames
    }

    #[test]
    fn emits_only_on_change() {
        let width = Rc::new(Cell::new(100.0));
        let w = Rc::clone(&width);
        let mut layout = ViewLayout::new(move || Rect::new(0.0, 0.0, w.get(), 40.0));
        let mut callbacks = ViewCallbacks::new();
        let frames = recording(&mut callbacks);

        layout.layout(&mut callbacks);
        layout.layout(&mut callbacks);
        width.set(120.0);
        layout.layout(&mut callbacks);

        assert_eq!(
            *frames.borrow(),
            [Rect::new(0.0, 0.0, 100.0, 40.0), Rect::new(0.0, 0.0, 120.0, 40.0)]
        );
        assert_eq!(layout.frame(), Some(Rect::new(0.0, 0.0, 120.0, 40.0)));
    }

    #[test]
    fn invalidate_forces_emit() {
        let mut layout = ViewLayout::new(|| Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut callbacks = ViewCallbacks::new();
        let frames = recording(&mut callbacks);

        layout.layout(&mut callbacks);
        layout.invalidate();
        layout.layout(&mut callbacks);
        assert_eq!(frames.borrow().len(), 2);
    }

    #[test]
    fn resolves_insets_inside_closure() {
        // A child filling its parent minus 10% horizontal padding.
        let parent = Size::new(200.0, 100.0);
        let padding = ByEdge::symmetric(Dimension::percentage(0.1), Dimension::pixels(5.0));
        let mut layout = ViewLayout::new(move || {
            inset_rect(parent.to_rect(), padding.resolve(parent))
        });
        let frame = layout.layout(&mut ViewCallbacks::new());
        assert_eq!(frame, Rect::new(20.0, 5.0, 180.0, 95.0));
    }
}
