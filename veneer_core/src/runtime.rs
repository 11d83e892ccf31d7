// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime contract for native animation systems.
//!
//! Veneer splits platform-specific work into *backend* crates. A backend
//! owns the native render-layers and the native animation engine, and
//! exposes them through [`AnimationRuntime`]:
//!
//! - **Adding** a compiled [`KeyframeCurve`] to a layer together with the
//!   [`AnimationDelegate`] that should hear about its end.
//! - **Removing** the animation under a key.
//! - **Reporting** every end, natural or not, as a [`StopNotification`].
//!
//! Native engines report stops from their own callbacks, which are
//! re-entry points into Rust. Runtimes queue the notifications instead of
//! acting on them; the [`Animator`](crate::animation::Animator) drains the
//! queue with [`take_stopped`](AnimationRuntime::take_stopped) at a point
//! where it is safe to run user callbacks.
//!
//! [`SoftwareRuntime`] is an in-process implementation driven by an explicit
//! media clock. It serves hosts without a native engine and acts as the test
//! double for the native one.
//!
//! # Crate boundaries
//!
//! `veneer_core` owns the data model, compilation, handle bookkeeping, and
//! this contract module. Backend crates depend on `veneer_core` and provide
//! platform glue. Application code depends on both and wires them together
//! through an [`Animator`](crate::animation::Animator).

use alloc::vec::Vec;

use crate::animation::AnimationDelegate;
use crate::keyframe::KeyframeCurve;
use crate::layer::LayerId;
use crate::property::PropertyKey;
use crate::value::AnimationValue;

/// One report that an animation stopped running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StopNotification {
    /// The delegate registered with the animation.
    pub delegate: AnimationDelegate,
    /// `true` if the animation ran to its end, `false` if it was removed.
    pub finished: bool,
}

/// A native animation engine that keyframe curves can be attached to.
///
/// Both the Core Animation backend and [`SoftwareRuntime`] implement this
/// trait, enabling generic animators and test doubles.
///
/// # Contract
///
/// - Adding under a `(layer, key)` that already runs an animation replaces
///   it and reports the replaced delegate with `finished == false`.
/// - Removing a running animation reports its delegate with
///   `finished == false`. Removing nothing reports nothing.
/// - Every added animation is reported exactly once, unless its report is
///   claimed through [`take_finished`](Self::take_finished) first.
pub trait AnimationRuntime {
    /// Starts `curve` on `layer` under the curve's key path.
    ///
    /// With `remove_on_completion == false` the layer keeps presenting the
    /// last keyframe after the animation finishes.
    fn add_animation(
        &mut self,
        layer: LayerId,
        curve: &KeyframeCurve,
        delegate: AnimationDelegate,
        remove_on_completion: bool,
    );

    /// Removes the animation running on `layer` under `key`, if any.
    fn remove_animation(&mut self, layer: LayerId, key: &PropertyKey);

    /// Removes every animation on `layer`, including values held after
    /// completion. Running animations are reported with `finished == false`.
    fn remove_layer(&mut self, layer: LayerId);

    /// Drains the stop notifications queued since the last call, oldest first.
    fn take_stopped(&mut self) -> Vec<StopNotification>;

    /// Claims a queued `finished == true` report for `delegate`.
    ///
    /// Returns `true` and drops the report from the queue if the animation
    /// already ran to its end but has not been drained yet.
    fn take_finished(&mut self, delegate: AnimationDelegate) -> bool;
}

#[derive(Clone, Debug)]
struct Running {
    layer: LayerId,
    curve: KeyframeCurve,
    delegate: AnimationDelegate,
    start: f64,
    remove_on_completion: bool,
}

impl Running {
    fn end(&self) -> f64 {
        self.start + self.curve.duration()
    }

    fn is_on(&self, layer: LayerId, key: &PropertyKey) -> bool {
        self.layer == layer && self.curve.key_path() == key
    }
}

#[derive(Clone, Debug)]
struct Held {
    layer: LayerId,
    key: PropertyKey,
    value: AnimationValue,
}

/// A deterministic [`AnimationRuntime`] driven by an explicit media clock.
///
/// Time is in seconds and only moves through [`advance`](Self::advance) or
/// [`set_time`](Self::set_time). An animation added at time `t` samples its
/// curve at `now - t` and finishes once `now >= t + duration`.
///
/// Animations are kept in insertion order, so animations finishing on the
/// same clock step are reported in the order they were added.
#[derive(Clone, Debug, Default)]
pub struct SoftwareRuntime {
    now: f64,
    running: Vec<Running>,
    held: Vec<Held>,
    stopped: Vec<StopNotification>,
}

impl SoftwareRuntime {
    /// Creates a runtime with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current media time in seconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Moves the clock forward by `dt` seconds, finishing due animations.
    ///
    /// # Panics
    ///
    /// Panics if `dt` is negative or NaN.
    pub fn advance(&mut self, dt: f64) {
        assert!(dt >= 0.0, "media clock cannot run backwards");
        self.now += dt;
        self.finish_due();
    }

    /// Moves the clock to `t` seconds, finishing due animations.
    ///
    /// # Panics
    ///
    /// Panics if `t` is earlier than [`now`](Self::now) or NaN.
    pub fn set_time(&mut self, t: f64) {
        assert!(t >= self.now, "media clock cannot run backwards");
        self.now = t;
        self.finish_due();
    }

    /// Returns the value `layer` presents for `key` right now.
    ///
    /// That is the running animation's sample, or the held final keyframe of
    /// a finished animation that was not removed on completion. `None` means
    /// the layer shows its own model value.
    #[must_use]
    pub fn presentation_value(&self, layer: LayerId, key: &PropertyKey) -> Option<AnimationValue> {
        if let Some(r) = self.running.iter().find(|r| r.is_on(layer, key)) {
            return Some(r.curve.sample(self.now - r.start));
        }
        self.held
            .iter()
            .find(|h| h.layer == layer && &h.key == key)
            .map(|h| h.value)
    }

    /// Returns whether an animation is running on `layer` under `key`.
    #[must_use]
    pub fn is_running(&self, layer: LayerId, key: &PropertyKey) -> bool {
        self.running.iter().any(|r| r.is_on(layer, key))
    }

    /// Returns the number of running animations.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    fn finish_due(&mut self) {
        let now = self.now;
        let mut i = 0;
        while i < self.running.len() {
            if self.running[i].end() > now {
                i += 1;
                continue;
            }
            let done = self.running.remove(i);
            if !done.remove_on_completion {
                let value = done.curve.sample_fraction(1.0);
                self.hold(done.layer, done.curve.key_path().clone(), value);
            }
            self.stopped.push(StopNotification {
                delegate: done.delegate,
                finished: true,
            });
        }
    }

    fn hold(&mut self, layer: LayerId, key: PropertyKey, value: AnimationValue) {
        self.release_hold(layer, &key);
        self.held.push(Held { layer, key, value });
    }

    fn release_hold(&mut self, layer: LayerId, key: &PropertyKey) {
        self.held.retain(|h| !(h.layer == layer && &h.key == key));
    }

    fn take_running(&mut self, layer: LayerId, key: &PropertyKey) -> Option<Running> {
        let pos = self.running.iter().position(|r| r.is_on(layer, key))?;
        Some(self.running.remove(pos))
    }
}

impl AnimationRuntime for SoftwareRuntime {
    fn add_animation(
        &mut self,
        layer: LayerId,
        curve: &KeyframeCurve,
        delegate: AnimationDelegate,
        remove_on_completion: bool,
    ) {
        self.remove_animation(layer, curve.key_path());
        self.running.push(Running {
            layer,
            curve: curve.clone(),
            delegate,
            start: self.now,
            remove_on_completion,
        });
    }

    fn remove_animation(&mut self, layer: LayerId, key: &PropertyKey) {
        self.release_hold(layer, key);
        if let Some(removed) = self.take_running(layer, key) {
            self.stopped.push(StopNotification {
                delegate: removed.delegate,
                finished: false,
            });
        }
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.held.retain(|h| h.layer != layer);
        let mut i = 0;
        while i < self.running.len() {
            if self.running[i].layer != layer {
                i += 1;
                continue;
            }
            let removed = self.running.remove(i);
            self.stopped.push(StopNotification {
                delegate: removed.delegate,
                finished: false,
            });
        }
    }

    fn take_stopped(&mut self) -> Vec<StopNotification> {
        core::mem::take(&mut self.stopped)
    }

    fn take_finished(&mut self, delegate: AnimationDelegate) -> bool {
        let Some(pos) = self
            .stopped
            .iter()
            .position(|n| n.finished && n.delegate == delegate)
        else {
            return false;
        };
        self.stopped.remove(pos);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationStore;
    use crate::keyframe::KeyframeAnimation;

    const LAYER: LayerId = LayerId(3);

    fn ramp() -> KeyframeCurve {
        KeyframeAnimation::new(1.0, [0.0, 0.5, 1.0], [0.0_f64, 50.0, 100.0])
            .compile(PropertyKey::OPACITY)
            .expect("valid curve")
    }

    fn delegates<const N: usize>() -> [AnimationDelegate; N] {
        let mut store = AnimationStore::new();
        core::array::from_fn(|i| {
            let layer = LayerId(u64::try_from(i).expect("small index"));
            AnimationDelegate::new(store.insert(layer, PropertyKey::OPACITY))
        })
    }

    #[test]
    fn samples_and_finishes() {
        let mut rt = SoftwareRuntime::new();
        let [d] = delegates();
        rt.add_animation(LAYER, &ramp(), d, true);

        rt.advance(0.5);
        assert_eq!(
            rt.presentation_value(LAYER, &PropertyKey::OPACITY),
            Some(AnimationValue::Float(50.0))
        );
        assert!(rt.take_stopped().is_empty());

        rt.advance(0.5);
        assert_eq!(
            rt.take_stopped(),
            [StopNotification {
                delegate: d,
                finished: true
            }]
        );
        assert_eq!(rt.presentation_value(LAYER, &PropertyKey::OPACITY), None);
        assert_eq!(rt.running_count(), 0);
    }

    #[test]
    fn fill_forwards_holds_last_value() {
        let mut rt = SoftwareRuntime::new();
        let [d] = delegates();
        rt.add_animation(LAYER, &ramp(), d, false);
        rt.set_time(2.0);
        assert_eq!(rt.take_stopped().len(), 1);
        assert_eq!(
            rt.presentation_value(LAYER, &PropertyKey::OPACITY),
            Some(AnimationValue::Float(100.0))
        );

        rt.remove_animation(LAYER, &PropertyKey::OPACITY);
        assert_eq!(rt.presentation_value(LAYER, &PropertyKey::OPACITY), None);
        assert!(rt.take_stopped().is_empty(), "nothing was running");
    }

    #[test]
    fn replacement_reports_unfinished() {
        let mut rt = SoftwareRuntime::new();
        let [a, b] = delegates();
        rt.add_animation(LAYER, &ramp(), a, true);
        rt.advance(0.25);
        rt.add_animation(LAYER, &ramp(), b, true);
        assert_eq!(
            rt.take_stopped(),
            [StopNotification {
                delegate: a,
                finished: false
            }]
        );
        assert!(rt.is_running(LAYER, &PropertyKey::OPACITY));

        // The replacement starts from its own beginning.
        assert_eq!(
            rt.presentation_value(LAYER, &PropertyKey::OPACITY),
            Some(AnimationValue::Float(0.0))
        );
    }

    #[test]
    fn simultaneous_completions_keep_insertion_order() {
        let mut rt = SoftwareRuntime::new();
        let [a, b] = delegates();
        rt.add_animation(LayerId(10), &ramp(), a, true);
        rt.add_animation(LayerId(11), &ramp(), b, true);
        rt.advance(1.0);
        let order: Vec<_> = rt.take_stopped().iter().map(|n| n.delegate).collect();
        assert_eq!(order, [a, b]);
    }

    #[test]
    fn take_finished_claims_only_natural_finish() {
        let mut rt = SoftwareRuntime::new();
        let [a, b] = delegates();
        rt.add_animation(LAYER, &ramp(), a, true);
        rt.add_animation(LayerId(4), &ramp(), b, true);
        rt.remove_animation(LayerId(4), &PropertyKey::OPACITY);
        assert!(!rt.take_finished(a), "still running");
        assert!(!rt.take_finished(b), "removal is not a finish");

        rt.advance(1.0);
        assert!(rt.take_finished(a));
        assert!(!rt.take_finished(a));
        assert_eq!(
            rt.take_stopped(),
            [StopNotification {
                delegate: b,
                finished: false
            }]
        );
    }

    #[test]
    fn remove_layer_clears_running_and_held() {
        let mut rt = SoftwareRuntime::new();
        let [a, b, c] = delegates();
        rt.add_animation(LAYER, &ramp(), a, false);
        rt.set_time(1.0);
        let scale = KeyframeAnimation::new(1.0, [0.0, 1.0], [1.0_f64, 2.0])
            .compile(PropertyKey::SCALE)
            .expect("valid curve");
        rt.add_animation(LAYER, &scale, b, true);
        rt.add_animation(LayerId(8), &ramp(), c, false);
        assert_eq!(rt.take_stopped().len(), 1);

        rt.remove_layer(LAYER);
        assert_eq!(rt.presentation_value(LAYER, &PropertyKey::OPACITY), None);
        assert!(!rt.is_running(LAYER, &PropertyKey::SCALE));
        assert!(rt.is_running(LayerId(8), &PropertyKey::OPACITY));
        assert_eq!(
            rt.take_stopped(),
            [StopNotification {
                delegate: b,
                finished: false
            }]
        );
    }

    #[test]
    #[should_panic(expected = "media clock cannot run backwards")]
    fn clock_is_monotonic() {
        let mut rt = SoftwareRuntime::new();
        rt.set_time(1.0);
        rt.set_time(0.5);
    }
}
