// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The caller-facing animation API.

use crate::callback::OnceCallback;
use crate::keyframe::{ConfigurationError, KeyframeAnimation, KeyframeCurve};
use crate::layer::LayerId;
use crate::property::PropertyKey;
use crate::runtime::AnimationRuntime;
use crate::trace::{
    AttachEvent, DispatchSummary, StaleDeliveryEvent, StopCause, StopEvent, Tracer,
};
use crate::value::Animatable;

use super::config::{AnimatorConfig, DetachNotification};
use super::delegate::{AnimationDelegate, Delivery};
use super::id::{AnimationId, AnimationState};
use super::store::AnimationStore;

/// Attaches keyframe curves to layers and routes their completion back to
/// the caller.
///
/// The animator owns the [`AnimationStore`] and the runtime. Each attach
/// creates one record in the store and registers an [`AnimationDelegate`]
/// for it with the runtime. The runtime queues stop notifications; they take
/// effect when the host calls [`dispatch_stopped`](Self::dispatch_stopped),
/// typically once per turn of the UI run loop.
///
/// # Usage
///
/// ```rust
/// use veneer_core::animation::Animator;
/// use veneer_core::keyframe::KeyframeAnimation;
/// use veneer_core::layer::LayerId;
/// use veneer_core::property::PropertyKey;
/// use veneer_core::runtime::SoftwareRuntime;
///
/// let mut animator = Animator::new(SoftwareRuntime::new());
/// let fade = KeyframeAnimation::new(0.3, [0.0, 1.0], [0.0_f64, 1.0]);
/// let id = animator
///     .animate(LayerId(1), PropertyKey::OPACITY, &fade)
///     .unwrap();
/// animator.set_on_stop(id, |finished| assert!(finished));
///
/// animator.runtime_mut().advance(0.3);
/// let summary = animator.dispatch_stopped();
/// assert_eq!(summary.notified, 1);
/// assert!(!animator.is_attached(id));
/// ```
#[derive(Debug)]
pub struct Animator<R> {
    store: AnimationStore,
    runtime: R,
    config: AnimatorConfig,
    tracer: Tracer,
}

impl<R: AnimationRuntime> Animator<R> {
    /// Creates an animator with the default configuration.
    pub fn new(runtime: R) -> Self {
        Self::with_config(runtime, AnimatorConfig::default())
    }

    /// Creates an animator with the given configuration.
    pub fn with_config(runtime: R, config: AnimatorConfig) -> Self {
        Self {
            store: AnimationStore::new(),
            runtime,
            config,
            tracer: Tracer::none(),
        }
    }

    /// Routes trace events to `tracer`.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Returns the runtime.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Returns the runtime mutably, e.g. to drive a software clock.
    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }

    /// Returns the tracer, so layout passes can share it.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Returns the handle store.
    pub fn store(&self) -> &AnimationStore {
        &self.store
    }

    /// Attaches `curve` to `layer` under the curve's key path.
    ///
    /// A live animation already attached under the same layer and key is
    /// removed first, as if [`detach`](Self::detach)ed, so one that already
    /// finished still reports completion.
    pub fn attach(&mut self, layer: LayerId, curve: &KeyframeCurve) -> AnimationId {
        let key = curve.key_path();
        if let Some(previous) = self.store.animation_for(layer, key) {
            self.end(previous, StopCause::Replaced);
        }

        let id = self.store.insert(layer, key.clone());
        self.runtime.add_animation(
            layer,
            curve,
            AnimationDelegate::new(id),
            self.config.remove_on_completion,
        );
        self.tracer.attach(&AttachEvent {
            animation: id,
            layer,
            key,
            duration: curve.duration(),
            keyframes: curve.key_times().len(),
        });
        id
    }

    /// Compiles `animation` for `key` and attaches the result to `layer`.
    ///
    /// Nothing is attached if compilation fails.
    pub fn animate<V: Animatable>(
        &mut self,
        layer: LayerId,
        key: impl Into<PropertyKey>,
        animation: &KeyframeAnimation<V>,
    ) -> Result<AnimationId, ConfigurationError> {
        let curve = animation.compile(key)?;
        Ok(self.attach(layer, &curve))
    }

    /// Registers the completion callback of a live handle.
    ///
    /// A previously registered callback is dropped uncalled. Returns `false`
    /// if the handle is stale, in which case `on_stop` is dropped uncalled.
    pub fn set_on_stop(&mut self, id: AnimationId, on_stop: impl FnOnce(bool) + 'static) -> bool {
        self.store.set_on_stop(id, OnceCallback::new(on_stop))
    }

    /// Removes a live animation.
    ///
    /// An animation that already ran to its end, with its report still
    /// queued, completes instead: `on_stop(true)` runs before this returns.
    /// Returns `false` if the handle is stale.
    pub fn detach(&mut self, id: AnimationId) -> bool {
        self.end(id, StopCause::Detached)
    }

    /// Removes every live animation on `layer`, for view teardown.
    ///
    /// Values the runtime holds for the layer after completion are released
    /// too. Returns how many live handles were ended.
    pub fn detach_layer(&mut self, layer: LayerId) -> usize {
        let ids = self.store.animations_on(layer);
        let ended = ids
            .into_iter()
            .filter(|&id| self.end(id, StopCause::LayerTeardown))
            .count();
        self.runtime.remove_layer(layer);
        ended
    }

    /// Drains the runtime's stop notifications and forwards each to its
    /// delegate.
    ///
    /// Completion callbacks run from inside this call. Notifications for
    /// handles that are already gone are swallowed.
    pub fn dispatch_stopped(&mut self) -> DispatchSummary {
        let policy = self.config.detach_notification;
        let mut summary = DispatchSummary::default();

        for n in self.runtime.take_stopped() {
            let id = n.delegate.handle();
            let origin = self
                .store
                .target(id)
                .zip(self.store.key(id).cloned());
            match n.delegate.animation_did_stop(&mut self.store, n.finished, policy) {
                Delivery::Delivered { state, notified } => {
                    summary.delivered += 1;
                    summary.notified += usize::from(notified);
                    if let Some((layer, key)) = origin {
                        self.tracer.stop(&StopEvent {
                            animation: id,
                            layer,
                            key: &key,
                            cause: match state {
                                AnimationState::Completed => StopCause::Finished,
                                _ => StopCause::RuntimeRemoved,
                            },
                            notified,
                        });
                    }
                }
                Delivery::Stale => {
                    summary.stale += 1;
                    self.tracer.stale_delivery(&StaleDeliveryEvent {
                        animation: id,
                        finished: n.finished,
                    });
                }
            }
        }

        if summary != DispatchSummary::default() {
            self.tracer.dispatch(&summary);
        }
        summary
    }

    /// Returns whether the handle is live.
    pub fn is_attached(&self, id: AnimationId) -> bool {
        self.store.is_alive(id)
    }

    /// Returns the live animation on `layer` under `key`, if any.
    pub fn animation_for(&self, layer: LayerId, key: &PropertyKey) -> Option<AnimationId> {
        self.store.animation_for(layer, key)
    }

    /// Returns the layer a live handle is attached to.
    pub fn target(&self, id: AnimationId) -> Option<LayerId> {
        self.store.target(id)
    }

    /// Returns the property a live handle animates.
    pub fn key(&self, id: AnimationId) -> Option<&PropertyKey> {
        self.store.key(id)
    }

    /// Returns the number of live handles.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns whether no handle is live.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Ends a live handle and removes its native animation.
    fn end(&mut self, id: AnimationId, cause: StopCause) -> bool {
        let (Some(layer), Some(key)) = (self.store.target(id), self.store.key(id).cloned()) else {
            return false;
        };
        // A finish already queued by the runtime wins over the removal.
        let finished = self.runtime.take_finished(AnimationDelegate::new(id));
        let (state, cause) = if finished {
            (AnimationState::Completed, StopCause::Finished)
        } else {
            (cause.state(), cause)
        };
        let Some(mut on_stop) = self.store.finish(id, state) else {
            return false;
        };
        // A running animation is reported back with `finished == false`; the
        // record is already gone, so that report will be stale.
        self.runtime.remove_animation(layer, &key);

        let notified = match (finished, self.config.detach_notification) {
            (true, _) => on_stop.invoke(true),
            (false, DetachNotification::Cancelled) => on_stop.invoke(false),
            (false, DetachNotification::Silent) => false,
        };
        self.tracer.stop(&StopEvent {
            animation: id,
            layer,
            key: &key,
            cause,
            notified,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;
    use crate::runtime::SoftwareRuntime;
    use crate::value::AnimationValue;

    const LAYER: LayerId = LayerId(42);

    type Log = Rc<RefCell<Vec<(&'static str, bool)>>>;

    fn fade() -> KeyframeAnimation<f64> {
        KeyframeAnimation::new(1.0, [0.0, 0.5, 1.0], [0.0, 50.0, 100.0])
    }

    fn log_stop(animator: &mut Animator<SoftwareRuntime>, id: AnimationId, tag: &'static str, log: &Log) {
        let log = Rc::clone(log);
        assert!(animator.set_on_stop(id, move |finished| log.borrow_mut().push((tag, finished))));
    }

    #[test]
    fn natural_completion_notifies_once() {
        let mut animator = Animator::new(SoftwareRuntime::new());
        let log = Log::default();
        let id = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        log_stop(&mut animator, id, "fade", &log);

        animator.runtime_mut().advance(0.5);
        assert_eq!(
            animator
                .runtime()
                .presentation_value(LAYER, &PropertyKey::OPACITY),
            Some(AnimationValue::Float(50.0))
        );
        assert_eq!(animator.dispatch_stopped(), DispatchSummary::default());

        animator.runtime_mut().advance(0.5);
        let summary = animator.dispatch_stopped();
        assert_eq!(
            summary,
            DispatchSummary {
                delivered: 1,
                notified: 1,
                stale: 0
            }
        );
        assert_eq!(*log.borrow(), [("fade", true)]);
        assert!(!animator.is_attached(id));
        assert!(animator.is_empty());

        // A late duplicate changes nothing.
        assert_eq!(animator.dispatch_stopped(), DispatchSummary::default());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn detach_before_completion_is_silent() {
        let mut animator = Animator::new(SoftwareRuntime::new());
        let log = Log::default();
        let id = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        log_stop(&mut animator, id, "fade", &log);

        assert!(animator.detach(id));
        assert!(!animator.detach(id), "second detach finds a stale handle");
        assert!(!animator.runtime().is_running(LAYER, &PropertyKey::OPACITY));

        animator.runtime_mut().advance(2.0);
        let summary = animator.dispatch_stopped();
        assert_eq!(summary.stale, 1, "runtime's removal report is swallowed");
        assert_eq!(summary.notified, 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn detach_reports_cancellation_when_configured() {
        let mut animator =
            Animator::with_config(SoftwareRuntime::new(), AnimatorConfig::notify_cancellation());
        let log = Log::default();
        let id = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        log_stop(&mut animator, id, "fade", &log);

        animator.detach(id);
        animator.runtime_mut().advance(2.0);
        animator.dispatch_stopped();
        assert_eq!(*log.borrow(), [("fade", false)]);
    }

    #[test]
    fn replacement_never_completes_first_handle() {
        let mut animator = Animator::new(SoftwareRuntime::new());
        let log = Log::default();
        let first = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        log_stop(&mut animator, first, "first", &log);

        animator.runtime_mut().advance(0.5);
        let second = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        log_stop(&mut animator, second, "second", &log);
        assert!(!animator.is_attached(first));
        assert_eq!(
            animator.animation_for(LAYER, &PropertyKey::OPACITY),
            Some(second)
        );

        animator.runtime_mut().advance(1.0);
        animator.dispatch_stopped();
        assert_eq!(*log.borrow(), [("second", true)]);
    }

    #[test]
    fn replacement_after_queued_finish_completes_first_handle() {
        let mut animator = Animator::new(SoftwareRuntime::new());
        let log = Log::default();
        let first = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        log_stop(&mut animator, first, "first", &log);

        // The finish is queued but not dispatched yet.
        animator.runtime_mut().advance(1.0);
        let second = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        log_stop(&mut animator, second, "second", &log);
        assert_eq!(*log.borrow(), [("first", true)]);
        assert!(!animator.is_attached(first));
        assert_eq!(animator.dispatch_stopped(), DispatchSummary::default());

        animator.runtime_mut().advance(1.0);
        animator.dispatch_stopped();
        assert_eq!(*log.borrow(), [("first", true), ("second", true)]);
    }

    #[test]
    fn detach_after_queued_finish_completes() {
        let mut animator = Animator::new(SoftwareRuntime::new());
        let log = Log::default();
        let id = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        log_stop(&mut animator, id, "fade", &log);

        animator.runtime_mut().advance(1.0);
        assert!(animator.detach(id));
        assert_eq!(*log.borrow(), [("fade", true)]);
        assert_eq!(animator.dispatch_stopped(), DispatchSummary::default());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn detach_layer_after_queued_finish_completes() {
        let mut animator =
            Animator::with_config(SoftwareRuntime::new(), AnimatorConfig::fill_forwards());
        let log = Log::default();
        let id = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        log_stop(&mut animator, id, "fade", &log);

        animator.runtime_mut().advance(1.0);
        assert_eq!(animator.detach_layer(LAYER), 1);
        assert_eq!(*log.borrow(), [("fade", true)]);
        assert_eq!(animator.dispatch_stopped(), DispatchSummary::default());
    }

    #[test]
    fn detach_layer_releases_held_values() {
        let mut animator =
            Animator::with_config(SoftwareRuntime::new(), AnimatorConfig::fill_forwards());
        animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        animator.runtime_mut().advance(1.0);
        assert_eq!(animator.dispatch_stopped().delivered, 1);
        assert!(
            animator
                .runtime()
                .presentation_value(LAYER, &PropertyKey::OPACITY)
                .is_some()
        );

        assert_eq!(animator.detach_layer(LAYER), 0);
        assert_eq!(
            animator
                .runtime()
                .presentation_value(LAYER, &PropertyKey::OPACITY),
            None
        );
    }

    #[test]
    fn different_keys_run_side_by_side() {
        let mut animator = Animator::new(SoftwareRuntime::new());
        let a = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        let b = animator
            .animate(LAYER, PropertyKey::CORNER_RADIUS, &fade())
            .expect("valid animation");
        assert!(animator.is_attached(a));
        assert!(animator.is_attached(b));
        assert_eq!(animator.key(b), Some(&PropertyKey::CORNER_RADIUS));
        assert_eq!(animator.target(a), Some(LAYER));
        assert_eq!(animator.len(), 2);
    }

    #[test]
    fn detach_layer_removes_all_of_its_animations() {
        let mut animator = Animator::new(SoftwareRuntime::new());
        let log = Log::default();
        for key in [PropertyKey::OPACITY, PropertyKey::SCALE] {
            let id = animator.animate(LAYER, key, &fade()).expect("valid animation");
            log_stop(&mut animator, id, "torn down", &log);
        }
        let other = animator
            .animate(LayerId(7), PropertyKey::OPACITY, &fade())
            .expect("valid animation");

        assert_eq!(animator.detach_layer(LAYER), 2);
        assert_eq!(animator.detach_layer(LAYER), 0);
        assert!(animator.is_attached(other));
        assert_eq!(animator.runtime().running_count(), 1);

        animator.runtime_mut().advance(1.0);
        let summary = animator.dispatch_stopped();
        assert_eq!(summary.stale, 2);
        assert_eq!(summary.delivered, 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn invalid_animation_attaches_nothing() {
        let mut animator = Animator::new(SoftwareRuntime::new());
        let bad = KeyframeAnimation::new(1.0, [0.0, 0.5], [0.0_f64, 1.0]);
        assert_eq!(
            animator.animate(LAYER, PropertyKey::OPACITY, &bad),
            Err(ConfigurationError::InvalidEnd(0.5))
        );
        assert!(animator.is_empty());
        assert_eq!(animator.runtime().running_count(), 0);
    }

    #[test]
    fn stale_handle_rejects_callback() {
        let mut animator = Animator::new(SoftwareRuntime::new());
        let id = animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        animator.detach(id);
        assert!(!animator.set_on_stop(id, |_| panic!("must not run")));
        assert_eq!(animator.target(id), None);
        assert_eq!(animator.key(id), None);
    }

    #[test]
    fn fill_forwards_keeps_final_value() {
        let mut animator =
            Animator::with_config(SoftwareRuntime::new(), AnimatorConfig::fill_forwards());
        animator
            .animate(LAYER, PropertyKey::OPACITY, &fade())
            .expect("valid animation");
        animator.runtime_mut().advance(1.5);
        assert_eq!(animator.dispatch_stopped().notified, 0);
        assert_eq!(
            animator
                .runtime()
                .presentation_value(LAYER, &PropertyKey::OPACITY),
            Some(AnimationValue::Float(100.0))
        );
    }
}
