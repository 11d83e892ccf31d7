// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for animation and layout bookkeeping.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Animator`](crate::animation::Animator) and the layout driver call as
//! handles come and go. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional boxed `TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead) and
//! sinks handed to [`Tracer::new`] are dropped. When **on**, each method
//! performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` enables the `Tracer` method bodies (one branch per call).

#[cfg(feature = "trace")]
use alloc::boxed::Box;

use kurbo::Rect;

use crate::animation::{AnimationId, AnimationState};
use crate::layer::LayerId;
use crate::property::PropertyKey;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why an animation handle reached a terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopCause {
    /// The runtime reported that the animation ran to its end.
    Finished,
    /// The runtime dropped the animation on its own.
    RuntimeRemoved,
    /// The caller detached the handle.
    Detached,
    /// A newer animation was attached under the same layer and key.
    Replaced,
    /// The layer was torn down.
    LayerTeardown,
}

impl StopCause {
    /// Returns the terminal state this cause leads to.
    #[must_use]
    pub const fn state(self) -> AnimationState {
        match self {
            Self::Finished => AnimationState::Completed,
            _ => AnimationState::Removed,
        }
    }

    /// Short lowercase label, stable for log output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Finished => "finished",
            Self::RuntimeRemoved => "runtime-removed",
            Self::Detached => "detached",
            Self::Replaced => "replaced",
            Self::LayerTeardown => "layer-teardown",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a curve is attached to a layer.
#[derive(Clone, Copy, Debug)]
pub struct AttachEvent<'a> {
    /// The new handle.
    pub animation: AnimationId,
    /// Target layer.
    pub layer: LayerId,
    /// Animated property.
    pub key: &'a PropertyKey,
    /// Curve duration in seconds.
    pub duration: f64,
    /// Number of keyframes in the curve.
    pub keyframes: usize,
}

/// Emitted when a live handle reaches a terminal state.
#[derive(Clone, Copy, Debug)]
pub struct StopEvent<'a> {
    /// The handle that stopped. It is stale by the time this is emitted.
    pub animation: AnimationId,
    /// Layer the animation was attached to.
    pub layer: LayerId,
    /// Animated property.
    pub key: &'a PropertyKey,
    /// What ended the animation.
    pub cause: StopCause,
    /// Whether the completion callback was called.
    pub notified: bool,
}

/// Emitted when the runtime reports a handle that was already released.
#[derive(Clone, Copy, Debug)]
pub struct StaleDeliveryEvent {
    /// The stale handle.
    pub animation: AnimationId,
    /// The `finished` flag the runtime reported.
    pub finished: bool,
}

/// Emitted after each layout pass of a view.
#[derive(Clone, Copy, Debug)]
pub struct LayoutPassEvent {
    /// Frame computed by the pass.
    pub frame: Rect,
    /// Whether a layout event was delivered to the view's listener.
    pub emitted: bool,
}

/// Totals for one [`Animator::dispatch_stopped`](crate::animation::Animator::dispatch_stopped) call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Notifications that reached a live handle.
    pub delivered: usize,
    /// Completion callbacks invoked.
    pub notified: usize,
    /// Notifications swallowed because their handle was gone.
    pub stale: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the animator and layout driver.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a curve is attached.
    fn on_attach(&mut self, e: &AttachEvent<'_>) {
        _ = e;
    }

    /// Called when a live handle stops.
    fn on_stop(&mut self, e: &StopEvent<'_>) {
        _ = e;
    }

    /// Called when a stop notification finds its handle already released.
    fn on_stale_delivery(&mut self, e: &StaleDeliveryEvent) {
        _ = e;
    }

    /// Called after a view layout pass.
    fn on_layout(&mut self, e: &LayoutPassEvent) {
        _ = e;
    }

    /// Called at the end of every non-empty dispatch of stop notifications.
    fn on_dispatch(&mut self, s: &DispatchSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: impl TraceSink + 'static) -> Self {
        #[cfg(feature = "trace")]
        {
            Self {
                sink: Some(Box::new(sink)),
            }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns whether events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits an [`AttachEvent`].
    #[inline]
    pub fn attach(&mut self, e: &AttachEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StopEvent`].
    #[inline]
    pub fn stop(&mut self, e: &StopEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_stop(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StaleDeliveryEvent`].
    #[inline]
    pub fn stale_delivery(&mut self, e: &StaleDeliveryEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_stale_delivery(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutPassEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutPassEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DispatchSummary`].
    #[inline]
    pub fn dispatch(&mut self, s: &DispatchSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_dispatch(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
