// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animator configuration.

/// What an animation's completion callback sees when the animation ends
/// without running to completion.
///
/// Passed to the [`Animator`](super::Animator) via
/// [`AnimatorConfig::detach_notification`]. Applies to explicit detaches,
/// replacement by a newer animation under the same key, layer teardown, and
/// removals the runtime performs on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DetachNotification {
    /// Drop the callback without calling it.
    #[default]
    Silent,
    /// Call the callback once with `false`.
    Cancelled,
}

/// Configuration for the [`Animator`](super::Animator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimatorConfig {
    /// Whether removing an animation before completion notifies its callback.
    pub detach_notification: DetachNotification,
    /// Whether the runtime removes a finished animation from its layer.
    ///
    /// When `false`, the layer keeps presenting the final keyframe after
    /// completion instead of snapping back to its model value.
    pub remove_on_completion: bool,
}

impl AnimatorConfig {
    /// Native runtime defaults: silent detach, finished animations removed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            detach_notification: DetachNotification::Silent,
            remove_on_completion: true,
        }
    }

    /// Every end of an animation reaches its callback, `false` for anything
    /// but natural completion.
    #[must_use]
    pub const fn notify_cancellation() -> Self {
        Self {
            detach_notification: DetachNotification::Cancelled,
            remove_on_completion: true,
        }
    }

    /// Finished animations stay on the layer holding their last value.
    #[must_use]
    pub const fn fill_forwards() -> Self {
        Self {
            detach_notification: DetachNotification::Silent,
            remove_on_completion: false,
        }
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
