// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core Animation backend for veneer.
//!
//! This crate runs `veneer_core` keyframe curves on native `CALayer`s on
//! Apple platforms (macOS, iOS, tvOS, visionOS):
//!
//! - [`CoreAnimationRuntime`]: [`AnimationRuntime`] implementation that turns
//!   each curve into a `CAKeyframeAnimation`, plus a `CALayer` registry with
//!   helpers applying resolved geometry to registered layers.
//!
//! Completion flows back through a `CAAnimationDelegate` object that holds
//! only a copied animation id and a shared stop queue:
//!
//! ```text
//! Animator::attach ──► CoreAnimationRuntime::add_animation
//!                        └─► CALayer addAnimation:forKey:
//! Core Animation ──► animationDidStop:finished: ──► stop queue
//! Animator::dispatch_stopped ──► take_stopped ──► on_stop(finished)
//! ```

#![no_std]
#![expect(
    unsafe_code,
    reason = "Apple backend requires extensive Objective-C FFI"
)]

extern crate alloc;

mod convert;
mod delegate;
mod runtime;

pub use runtime::CoreAnimationRuntime;
pub use veneer_core::runtime::AnimationRuntime;
