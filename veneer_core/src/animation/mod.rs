// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation handles, delegates, and the animator tying them to a runtime.
//!
//! # Completion protocol
//!
//! Every attached animation has exactly one record in the
//! [`AnimationStore`], addressed by a generational [`AnimationId`]. The
//! record owns the completion callback. The runtime holds only an
//! [`AnimationDelegate`], which is a copy of the id and owns nothing.
//!
//! ```text
//!   attach ──► Attached ──┬─► Completed   (runtime: finished)
//!                         └─► Removed     (detach, replacement, layer
//!                                          teardown, runtime removal)
//! ```
//!
//! Both terminal states free the record and bump the slot generation. A
//! notification that arrives afterwards, or twice, resolves to a stale id
//! and is swallowed, so the callback fires at most once. It fires with
//! `true` only on completion; on removal it is dropped, or called with
//! `false` under [`DetachNotification::Cancelled`].

mod animator;
mod config;
mod delegate;
mod id;
mod store;

pub use animator::Animator;
pub use config::{AnimatorConfig, DetachNotification};
pub use delegate::{AnimationDelegate, Delivery};
pub use id::{AnimationId, AnimationState};
pub use store::AnimationStore;
