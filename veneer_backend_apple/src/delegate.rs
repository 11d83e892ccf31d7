// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `CAAnimationDelegate` implementation.
//!
//! Core Animation retains an animation's delegate for as long as the
//! animation object lives and calls `animationDidStop:finished:` exactly
//! once per animation, on the main thread, whenever it ends: naturally,
//! through `removeAnimationForKey:`, or by replacement under the same key.
//!
//! ```text
//! CAKeyframeAnimation ──retains──► VeneerAnimationDelegate
//!                                   ├─ AnimationDelegate (a copied id)
//!                                   └─ Rc<stop queue> ◄── CoreAnimationRuntime
//! ```
//!
//! The Objective-C object owns nothing that leads back to the layer, the
//! animation, or the handle store, so no retain cycle can form.

use alloc::rc::Rc;
use core::cell::RefCell;

use objc2::rc::Retained;
use objc2::{DefinedClass, MainThreadMarker, MainThreadOnly, define_class, msg_send};
use objc2_foundation::{NSObject, NSObjectProtocol};
use objc2_quartz_core::{CAAnimation, CAAnimationDelegate};
use veneer_core::animation::AnimationDelegate;
use veneer_core::runtime::StopNotification;

/// Stop notifications shared between the runtime and its delegate objects.
pub(crate) type StopQueue = Rc<RefCell<alloc::vec::Vec<StopNotification>>>;

pub(crate) struct DelegateIvars {
    delegate: AnimationDelegate,
    queue: StopQueue,
}

define_class! {
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    #[name = "VeneerAnimationDelegate"]
    #[ivars = DelegateIvars]
    pub(crate) struct VeneerAnimationDelegate;

    unsafe impl NSObjectProtocol for VeneerAnimationDelegate {}

    unsafe impl CAAnimationDelegate for VeneerAnimationDelegate {
        #[unsafe(method(animationDidStop:finished:))]
        fn animation_did_stop(&self, _anim: &CAAnimation, finished: bool) {
            self.enqueue(finished);
        }
    }
}

impl VeneerAnimationDelegate {
    pub(crate) fn new(
        delegate: AnimationDelegate,
        queue: StopQueue,
        mtm: MainThreadMarker,
    ) -> Retained<Self> {
        let this = mtm
            .alloc::<Self>()
            .set_ivars(DelegateIvars { delegate, queue });
        // SAFETY: NSObject's init is always safe.
        unsafe { msg_send![super(this), init] }
    }

    /// Queues the stop instead of acting on it. This runs inside a Core
    /// Animation callback, where user code must not run.
    fn enqueue(&self, finished: bool) {
        let ivars = self.ivars();
        ivars.queue.borrow_mut().push(StopNotification {
            delegate: ivars.delegate,
            finished,
        });
    }
}
