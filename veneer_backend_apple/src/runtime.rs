// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `CALayer` registry and Core Animation runtime.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;
use kurbo::Rect;
use objc2::rc::Retained;
use objc2::MainThreadMarker;
use objc2::runtime::ProtocolObject;
use objc2_foundation::NSString;
use objc2_quartz_core::{
    CAAnimationDelegate, CAKeyframeAnimation, CALayer, CAMediaTiming, CATransaction,
    kCAFillModeForwards,
};
use veneer_core::animation::AnimationDelegate;
use veneer_core::corners::ResolvedCornerRadii;
use veneer_core::keyframe::KeyframeCurve;
use veneer_core::layer::LayerId;
use veneer_core::property::PropertyKey;
use veneer_core::runtime::{AnimationRuntime, StopNotification};
use veneer_core::transform::Transform3d;

use crate::convert::{key_times_array, rect_to_cg, transform3d_to_ca, values_array};
use crate::delegate::{StopQueue, VeneerAnimationDelegate};

/// Runs keyframe curves on registered `CALayer`s.
///
/// Layers are registered under caller-chosen [`LayerId`]s; the runtime keeps
/// them alive until they are unregistered. Each added curve becomes a
/// `CAKeyframeAnimation` whose delegate queues a [`StopNotification`] when
/// Core Animation ends it. Drain the queue through
/// [`Animator::dispatch_stopped`](veneer_core::animation::Animator::dispatch_stopped).
///
/// Must be created and used on the main thread.
#[derive(Debug)]
pub struct CoreAnimationRuntime {
    layers: HashMap<LayerId, Retained<CALayer>>,
    stopped: StopQueue,
    mtm: MainThreadMarker,
}

impl CoreAnimationRuntime {
    /// Creates a runtime with no registered layers.
    #[must_use]
    pub fn new(mtm: MainThreadMarker) -> Self {
        Self {
            layers: HashMap::new(),
            stopped: Rc::new(RefCell::new(Vec::new())),
            mtm,
        }
    }

    /// Registers `layer` under `id`, replacing any layer registered before.
    pub fn register_layer(&mut self, id: LayerId, layer: Retained<CALayer>) {
        self.layers.insert(id, layer);
    }

    /// Unregisters and returns the layer under `id`.
    ///
    /// Animations still running on it keep running. Detach them through the
    /// animator first when tearing a view down.
    pub fn unregister_layer(&mut self, id: LayerId) -> Option<Retained<CALayer>> {
        self.layers.remove(&id)
    }

    /// Returns the layer registered under `id`.
    #[must_use]
    pub fn layer(&self, id: LayerId) -> Option<&CALayer> {
        self.layers.get(&id).map(|r| &**r)
    }

    /// Sets the layer's frame without an implicit animation.
    ///
    /// Returns `false` if no layer is registered under `id`.
    pub fn apply_frame(&self, id: LayerId, frame: Rect) -> bool {
        self.with_layer(id, |layer| layer.setFrame(rect_to_cg(frame)))
    }

    /// Sets the layer's corner radius without an implicit animation.
    ///
    /// `CALayer` only supports a uniform circular radius, so non-uniform
    /// radii are approximated by their maximum.
    pub fn apply_corner_radii(&self, id: LayerId, radii: ResolvedCornerRadii) -> bool {
        self.with_layer(id, |layer| layer.setCornerRadius(radii.max_radius()))
    }

    /// Sets the layer's model transform without an implicit animation.
    pub fn apply_transform(&self, id: LayerId, transform: Transform3d) -> bool {
        self.with_layer(id, |layer| {
            layer.setTransform(transform3d_to_ca(&transform));
        })
    }

    /// Runs `f` on a registered layer inside a transaction with implicit
    /// animations disabled.
    fn with_layer(&self, id: LayerId, f: impl FnOnce(&CALayer)) -> bool {
        let Some(layer) = self.layers.get(&id) else {
            return false;
        };
        CATransaction::begin();
        CATransaction::setDisableActions(true);
        f(layer);
        CATransaction::commit();
        true
    }

    fn build_animation(
        &self,
        curve: &KeyframeCurve,
        delegate: AnimationDelegate,
        remove_on_completion: bool,
    ) -> Retained<CAKeyframeAnimation> {
        let animation = CAKeyframeAnimation::new();
        let key_path = NSString::from_str(curve.key_path().as_str());
        let values = values_array(curve.values());
        let key_times = key_times_array(curve.key_times());
        let receiver = VeneerAnimationDelegate::new(delegate, Rc::clone(&self.stopped), self.mtm);
        let receiver: &ProtocolObject<dyn CAAnimationDelegate> = ProtocolObject::from_ref(&*receiver);

        // SAFETY: `values` holds one object of the kind Core Animation expects
        // for the key path (see `convert`), and `kCAFillModeForwards` is an
        // immutable framework constant. The animation copies or retains
        // every argument.
        unsafe {
            animation.setKeyPath(Some(&*key_path));
            animation.setValues(Some(&*values));
            animation.setKeyTimes(Some(&*key_times));
            animation.setDuration(curve.duration());
            animation.setRemovedOnCompletion(remove_on_completion);
            animation.setDelegate(Some(receiver));
            if !remove_on_completion {
                animation.setFillMode(kCAFillModeForwards);
            }
        }
        animation
    }
}

impl AnimationRuntime for CoreAnimationRuntime {
    fn add_animation(
        &mut self,
        layer: LayerId,
        curve: &KeyframeCurve,
        delegate: AnimationDelegate,
        remove_on_completion: bool,
    ) {
        let Some(target) = self.layers.get(&layer) else {
            // Nothing to run on. Report the animation as removed so its
            // handle is still released.
            self.stopped.borrow_mut().push(StopNotification {
                delegate,
                finished: false,
            });
            return;
        };
        let animation = self.build_animation(curve, delegate, remove_on_completion);
        let key = NSString::from_str(curve.key_path().as_str());
        // SAFETY: `animation` is a fully configured CAAnimation. Adding under
        // an occupied key makes Core Animation stop the previous animation,
        // which reports `finished == NO` to its own delegate.
        unsafe { target.addAnimation_forKey(&animation, Some(&*key)) };
    }

    fn remove_animation(&mut self, layer: LayerId, key: &PropertyKey) {
        let Some(target) = self.layers.get(&layer) else {
            return;
        };
        let key = NSString::from_str(key.as_str());
        // SAFETY: removing an absent key is a no-op in Core Animation.
        unsafe { target.removeAnimationForKey(&key) };
    }

    fn remove_layer(&mut self, layer: LayerId) {
        let Some(target) = self.layers.get(&layer) else {
            return;
        };
        // SAFETY: each removed animation reports `finished == NO` to its own
        // delegate, which only enqueues.
        unsafe { target.removeAllAnimations() };
    }

    fn take_stopped(&mut self) -> Vec<StopNotification> {
        core::mem::take(&mut *self.stopped.borrow_mut())
    }

    fn take_finished(&mut self, delegate: AnimationDelegate) -> bool {
        let mut queue = self.stopped.borrow_mut();
        let Some(pos) = queue
            .iter()
            .position(|n| n.finished && n.delegate == delegate)
        else {
            return false;
        };
        queue.remove(pos);
        true
    }
}
