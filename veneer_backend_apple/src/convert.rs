// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions from core value types to Core Animation objects.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::{ClassType, msg_send};
use objc2_core_foundation::{CFRetained, CGPoint, CGRect, CGSize};
use objc2_core_graphics::CGColor;
use objc2_foundation::{NSArray, NSNumber, NSValue};
use objc2_quartz_core::CATransform3D;
use veneer_core::color::Color;
use veneer_core::transform::Transform3d;
use veneer_core::value::AnimationValue;

/// Converts a [`Transform3d`] to a `CATransform3D`.
///
/// Both are column-major, so column `i` becomes row `i + 1` of the
/// `m{row}{col}` fields.
pub(crate) fn transform3d_to_ca(m: &Transform3d) -> CATransform3D {
    let [c0, c1, c2, c3] = m.cols;
    CATransform3D {
        m11: c0[0],
        m12: c0[1],
        m13: c0[2],
        m14: c0[3],
        m21: c1[0],
        m22: c1[1],
        m23: c1[2],
        m24: c1[3],
        m31: c2[0],
        m32: c2[1],
        m33: c2[2],
        m34: c2[3],
        m41: c3[0],
        m42: c3[1],
        m43: c3[2],
        m44: c3[3],
    }
}

pub(crate) fn point_to_cg(p: Point) -> CGPoint {
    CGPoint::new(p.x, p.y)
}

pub(crate) fn rect_to_cg(r: Rect) -> CGRect {
    CGRect::new(
        CGPoint::new(r.x0, r.y0),
        CGSize::new(r.width(), r.height()),
    )
}

pub(crate) fn color_to_cg(c: Color) -> CFRetained<CGColor> {
    CGColor::new_srgb(c.red, c.green, c.blue, c.alpha)
}

/// Boxes one keyframe value the way `CAKeyframeAnimation.values` expects:
/// `NSNumber` for scalars, `NSValue` for points and transforms, `CGColor`
/// for colors.
pub(crate) fn value_to_object(value: &AnimationValue) -> Retained<AnyObject> {
    match *value {
        AnimationValue::Float(v) => Retained::into_super(Retained::into_super(
            Retained::into_super(NSNumber::new_f64(v)),
        )),
        AnimationValue::Point(p) => {
            let p = point_to_cg(p);
            // SAFETY: the selector takes a single CGPoint by value and returns
            // a new autoreleased NSValue.
            #[cfg(target_os = "macos")]
            let v: Retained<NSValue> = unsafe { msg_send![NSValue::class(), valueWithPoint: p] };
            #[cfg(not(target_os = "macos"))]
            let v: Retained<NSValue> = unsafe { msg_send![NSValue::class(), valueWithCGPoint: p] };
            Retained::into_super(Retained::into_super(v))
        }
        AnimationValue::Transform(t) => {
            let t = transform3d_to_ca(&t);
            // SAFETY: `valueWithCATransform3D:` is QuartzCore's NSValue
            // category; it copies the struct into a new NSValue.
            let v: Retained<NSValue> =
                unsafe { msg_send![NSValue::class(), valueWithCATransform3D: t] };
            Retained::into_super(Retained::into_super(v))
        }
        AnimationValue::Color(c) => {
            let color = color_to_cg(c);
            let ptr = CFRetained::as_ptr(&color).as_ptr().cast::<AnyObject>();
            // SAFETY: CGColor is toll-free bridged to an Objective-C object,
            // so retaining it through objc2 is valid. `color` stays alive
            // until the new retain is taken.
            let obj = unsafe { Retained::retain(ptr) };
            obj.unwrap_or_else(|| unreachable!("CGColor pointer is non-null"))
        }
    }
}

/// Builds the `values` array of a keyframe animation.
pub(crate) fn values_array(values: &[AnimationValue]) -> Retained<NSArray<AnyObject>> {
    let objects: Vec<Retained<AnyObject>> = values.iter().map(value_to_object).collect();
    let refs: Vec<&AnyObject> = objects.iter().map(|o| &**o).collect();
    NSArray::from_slice(&refs)
}

/// Builds the `keyTimes` array of a keyframe animation.
pub(crate) fn key_times_array(times: &[f64]) -> Retained<NSArray<NSNumber>> {
    let numbers: Vec<Retained<NSNumber>> = times.iter().map(|&t| NSNumber::new_f64(t)).collect();
    let refs: Vec<&NSNumber> = numbers.iter().map(|n| &**n).collect();
    NSArray::from_slice(&refs)
}
