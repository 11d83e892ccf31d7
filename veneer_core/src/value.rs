// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of animatable value kinds.
//!
//! Keyframe animations are generic over [`Animatable`] so callers keep
//! compile-time types, while compiled curves store [`AnimationValue`]s, which
//! is what a native runtime consumes.

use kurbo::{Point, Vec2};

use crate::color::Color;
use crate::transform::Transform3d;

/// Discriminant of an [`AnimationValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Scalar values such as opacity or a translation component.
    Float,
    /// Two-dimensional points such as a layer position.
    Point,
    /// Colors such as a background color.
    Color,
    /// Full 3-D layer transforms.
    Transform,
}

/// A value that a native runtime knows how to interpolate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationValue {
    /// A scalar.
    Float(f64),
    /// A point.
    Point(Point),
    /// A color.
    Color(Color),
    /// A transform.
    Transform(Transform3d),
}

impl AnimationValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Float(_) => ValueKind::Float,
            Self::Point(_) => ValueKind::Point,
            Self::Color(_) => ValueKind::Color,
            Self::Transform(_) => ValueKind::Transform,
        }
    }

    /// Returns the scalar, if this is a [`Float`](Self::Float).
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Interpolates between two values of the same kind.
    ///
    /// Returns `None` when the kinds differ. Compiled curves never mix kinds,
    /// since they are built from a single [`Animatable`] type.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Option<Self> {
        Some(match (self, other) {
            (Self::Float(a), Self::Float(b)) => Self::Float(a + (b - a) * t),
            (Self::Point(a), Self::Point(b)) => Self::Point(a.lerp(*b, t)),
            (Self::Color(a), Self::Color(b)) => Self::Color(a.lerp(*b, t)),
            (Self::Transform(a), Self::Transform(b)) => Self::Transform(a.lerp(*b, t)),
            _ => return None,
        })
    }
}

/// A Rust type that maps onto one of the animatable value kinds.
pub trait Animatable: Copy {
    /// The kind every value of this type converts to.
    const KIND: ValueKind;

    /// Converts this value for a native runtime.
    fn into_value(self) -> AnimationValue;
}

impl Animatable for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn into_value(self) -> AnimationValue {
        AnimationValue::Float(self)
    }
}

impl Animatable for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn into_value(self) -> AnimationValue {
        AnimationValue::Float(f64::from(self))
    }
}

impl Animatable for Point {
    const KIND: ValueKind = ValueKind::Point;

    fn into_value(self) -> AnimationValue {
        AnimationValue::Point(self)
    }
}

impl Animatable for Vec2 {
    const KIND: ValueKind = ValueKind::Point;

    fn into_value(self) -> AnimationValue {
        AnimationValue::Point(self.to_point())
    }
}

impl Animatable for Color {
    const KIND: ValueKind = ValueKind::Color;

    fn into_value(self) -> AnimationValue {
        AnimationValue::Color(self)
    }
}

impl Animatable for Transform3d {
    const KIND: ValueKind = ValueKind::Transform;

    fn into_value(self) -> AnimationValue {
        AnimationValue::Transform(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_conversions() {
        assert_eq!(1.0_f32.into_value().kind(), f32::KIND);
        assert_eq!(Vec2::new(1.0, 2.0).into_value().kind(), Vec2::KIND);
        assert_eq!(Color::WHITE.into_value().kind(), Color::KIND);
        assert_eq!(
            Transform3d::IDENTITY.into_value().kind(),
            Transform3d::KIND
        );
    }

    #[test]
    fn lerp_same_kind() {
        let a = Point::new(0.0, 0.0).into_value();
        let b = Point::new(10.0, 20.0).into_value();
        assert_eq!(
            a.lerp(&b, 0.25),
            Some(AnimationValue::Point(Point::new(2.5, 5.0)))
        );
    }

    #[test]
    fn lerp_mixed_kinds_is_none() {
        let a = AnimationValue::Float(0.0);
        let b = AnimationValue::Color(Color::BLACK);
        assert_eq!(a.lerp(&b, 0.5), None);
    }
}
