// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout geometry and keyframe animation for native layer trees.
//!
//! `veneer_core` sits between a declarative, unit-agnostic UI description
//! and a native retained-mode animation system such as Core Animation. It is
//! `no_std` compatible (with `alloc`) and leaves all platform calls to
//! backend crates.
//!
//! # Architecture
//!
//! Geometry and animation take separate paths to the native layer:
//!
//! ```text
//!   Dimension / ByEdge / CornerRadii ──► resolve(container) ──► kurbo geometry
//!
//!   KeyframeAnimation<V> ──► compile(key) ──► KeyframeCurve
//!                                                 │
//!                 ┌───────────────────────────────┘
//!                 ▼
//!   Animator::attach(layer) ──► AnimationId + AnimationDelegate ──► runtime
//!                                                                     │
//!                 ┌───────────────────────────────────────────────────┘
//!                 ▼
//!   StopNotification ──► Animator::dispatch_stopped() ──► on_stop(finished)
//! ```
//!
//! **[`dimension`]**, **[`edges`]**, **[`corners`]**: Absolute and
//! percentage lengths, per-edge insets and per-corner radii, resolved against
//! a container size at layout time.
//!
//! **[`value`]**, **[`color`]**, **[`transform`]**: The closed set of
//! animatable value kinds.
//!
//! **[`keyframe`]**: Validates a declarative keyframe animation and compiles
//! it into an immutable [`KeyframeCurve`](keyframe::KeyframeCurve).
//!
//! **[`animation`]**: Generational animation handles, the non-owning
//! delegate a runtime reports to, and the [`Animator`](animation::Animator)
//! that guarantees each completion callback fires at most once.
//!
//! **[`runtime`]**: The [`AnimationRuntime`](runtime::AnimationRuntime)
//! trait that backends implement, and a deterministic
//! [`SoftwareRuntime`](runtime::SoftwareRuntime).
//!
//! **[`callback`]**, **[`events`]**, **[`layout`]**: Listener slots, view
//! event payloads, and the per-view layout hook.
//!
//! **[`springboard`]**: Process entry points handed to the native shell.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! animation and layout instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animation;
pub mod callback;
pub mod color;
pub mod corners;
pub mod dimension;
pub mod edges;
pub mod events;
pub mod keyframe;
pub mod layer;
pub mod layout;
pub mod property;
pub mod runtime;
pub mod springboard;
pub mod trace;
pub mod transform;
pub mod value;
