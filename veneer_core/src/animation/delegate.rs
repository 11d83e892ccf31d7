// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The token a runtime calls back when an animation stops.

use super::config::DetachNotification;
use super::id::{AnimationId, AnimationState};
use super::store::AnimationStore;

/// Completion receiver registered with the runtime alongside each animation.
///
/// A delegate holds only the [`AnimationId`] of its handle. It owns nothing
/// and keeps nothing alive: the native animation object may outlive the
/// handle (or the other way round) without either leaking. A notification
/// arriving after the handle is gone finds a stale id and is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationDelegate {
    handle: AnimationId,
}

/// Outcome of forwarding one stop notification to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// The handle was live; it moved into `state` and was released.
    Delivered {
        /// The terminal state the handle reached.
        state: AnimationState,
        /// Whether the completion callback was called.
        notified: bool,
    },
    /// The handle had already been released; nothing happened.
    Stale,
}

impl AnimationDelegate {
    /// Creates a delegate for the given handle.
    #[must_use]
    pub const fn new(handle: AnimationId) -> Self {
        Self { handle }
    }

    /// Returns the handle this delegate reports to.
    #[must_use]
    pub const fn handle(self) -> AnimationId {
        self.handle
    }

    /// Forwards a stop notification from the runtime.
    ///
    /// `finished == true` completes the handle and calls its callback with
    /// `true`. `finished == false` means the runtime dropped the animation
    /// early; the handle is removed and `policy` decides whether the
    /// callback hears about it.
    ///
    /// The record is released before its callback runs, so by the time user
    /// code observes the stop the handle is already stale.
    pub fn animation_did_stop(
        self,
        store: &mut AnimationStore,
        finished: bool,
        policy: DetachNotification,
    ) -> Delivery {
        let state = if finished {
            AnimationState::Completed
        } else {
            AnimationState::Removed
        };
        let Some(mut on_stop) = store.finish(self.handle, state) else {
            return Delivery::Stale;
        };
        let notified = match (finished, policy) {
            (true, _) => on_stop.invoke(true),
            (false, DetachNotification::Cancelled) => on_stop.invoke(false),
            (false, DetachNotification::Silent) => false,
        };
        Delivery::Delivered { state, notified }
    }
}
