// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation handle identity.

use core::fmt;

/// A handle to an in-flight animation in an [`AnimationStore`](super::AnimationStore).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after the animation completes or is removed and the slot
/// is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId {
    /// Slot index into the store.
    pub(crate) idx: u32,
    /// Generation counter; must match the store's generation for this slot.
    pub(crate) generation: u32,
}

impl AnimationId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnimationId({}@gen{})", self.idx, self.generation)
    }
}

/// Lifecycle state of an animation handle.
///
/// `Attached` is the only live state; both terminal states free the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationState {
    /// Running on its layer, waiting for the runtime to report.
    Attached,
    /// Ran to its natural end.
    Completed,
    /// Removed before its natural end, by the caller, by replacement, by
    /// layer teardown, or by the runtime itself.
    Removed,
}

impl AnimationState {
    /// Returns whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Attached)
    }
}
