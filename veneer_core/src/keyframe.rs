// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyframe animation descriptions and their compiled curves.
//!
//! A [`KeyframeAnimation`] is the declarative form: a duration in seconds
//! plus matching lists of normalized key times and values. Compiling it for a
//! key path validates the samples and produces a [`KeyframeCurve`], the
//! immutable representation handed to a runtime. A curve can be attached to
//! any number of layers.
//!
//! ```
//! use veneer_core::keyframe::KeyframeAnimation;
//! use veneer_core::property::PropertyKey;
//! use veneer_core::value::AnimationValue;
//!
//! let fade = KeyframeAnimation::new(1.0, [0.0, 0.5, 1.0], [0.0, 50.0, 100.0]);
//! let curve = fade.compile(PropertyKey::OPACITY).unwrap();
//! assert_eq!(curve.sample(0.5), AnimationValue::Float(50.0));
//! ```

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::time::Duration;

use crate::property::PropertyKey;
use crate::value::{Animatable, AnimationValue, ValueKind};

/// Reasons a [`KeyframeAnimation`] cannot be compiled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigurationError {
    /// The duration is zero, negative, or not finite.
    InvalidDuration(f64),
    /// `times` and `values` have different lengths.
    LengthMismatch {
        /// Number of key times.
        times: usize,
        /// Number of values.
        values: usize,
    },
    /// Fewer than two samples were given.
    TooFewSamples(usize),
    /// The first key time is not exactly `0.0`.
    InvalidStart(f64),
    /// The last key time is not exactly `1.0`.
    InvalidEnd(f64),
    /// `times[index]` is not greater than `times[index - 1]`.
    NotStrictlyIncreasing {
        /// Index of the offending key time.
        index: usize,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration(d) => write!(f, "animation duration must be positive, got {d}"),
            Self::LengthMismatch { times, values } => {
                write!(f, "{times} key times but {values} values")
            }
            Self::TooFewSamples(n) => write!(f, "need at least 2 keyframes, got {n}"),
            Self::InvalidStart(t) => write!(f, "first key time must be 0.0, got {t}"),
            Self::InvalidEnd(t) => write!(f, "last key time must be 1.0, got {t}"),
            Self::NotStrictlyIncreasing { index } => {
                write!(f, "key time at index {index} does not increase")
            }
        }
    }
}

impl core::error::Error for ConfigurationError {}

/// A value at an absolute offset from the start of an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe<V> {
    /// Offset from the start of the animation.
    pub time: Duration,
    /// Value at that offset.
    pub value: V,
}

/// A declarative keyframe animation.
///
/// `times` are fractions of `duration`, not seconds. See
/// [`compile`](Self::compile) for the invariants.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeAnimation<V> {
    /// Total duration in seconds.
    pub duration: f64,
    /// Normalized key times in `0.0..=1.0`.
    pub times: Vec<f64>,
    /// One value per key time.
    pub values: Vec<V>,
}

impl<V> KeyframeAnimation<V> {
    /// Creates an animation from a duration in seconds and parallel lists of
    /// normalized times and values.
    pub fn new(
        duration: f64,
        times: impl IntoIterator<Item = f64>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            duration,
            times: times.into_iter().collect(),
            values: values.into_iter().collect(),
        }
    }

    /// Creates an animation from keyframes at absolute offsets, normalizing
    /// each offset by `duration`.
    pub fn from_keyframes(
        duration: Duration,
        keyframes: impl IntoIterator<Item = Keyframe<V>>,
    ) -> Self {
        let total = duration.as_secs_f64();
        let (times, values) = keyframes
            .into_iter()
            .map(|k| (k.time.as_secs_f64() / total, k.value))
            .unzip();
        Self {
            duration: total,
            times,
            values,
        }
    }

    /// Converts every value with `f`, keeping duration and times.
    ///
    /// Useful for resolving dimension-typed values against a container
    /// before compiling.
    pub fn map<U>(self, f: impl FnMut(V) -> U) -> KeyframeAnimation<U> {
        KeyframeAnimation {
            duration: self.duration,
            times: self.times,
            values: self.values.into_iter().map(f).collect(),
        }
    }

    /// Checks the duration and key time invariants.
    ///
    /// # Errors
    ///
    /// See [`compile`](Self::compile).
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ConfigurationError::InvalidDuration(self.duration));
        }
        if self.times.len() != self.values.len() {
            return Err(ConfigurationError::LengthMismatch {
                times: self.times.len(),
                values: self.values.len(),
            });
        }
        let (first, last) = match self.times.as_slice() {
            [first, .., last] => (*first, *last),
            _ => return Err(ConfigurationError::TooFewSamples(self.times.len())),
        };
        if first != 0.0 {
            return Err(ConfigurationError::InvalidStart(first));
        }
        if last != 1.0 {
            return Err(ConfigurationError::InvalidEnd(last));
        }
        // NaN compares as unordered and is rejected here too.
        if let Some(i) = self
            .times
            .windows(2)
            .position(|w| w[1].partial_cmp(&w[0]) != Some(Ordering::Greater))
        {
            return Err(ConfigurationError::NotStrictlyIncreasing { index: i + 1 });
        }
        Ok(())
    }
}

impl<V: Animatable> KeyframeAnimation<V> {
    /// Compiles this animation into a curve driving `key_path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] without building anything if the
    /// duration is not positive, if `times` and `values` differ in length,
    /// if there are fewer than two samples, if the first and last key times
    /// are not exactly `0.0` and `1.0`, or if the key times are not strictly
    /// increasing.
    pub fn compile(
        &self,
        key_path: impl Into<PropertyKey>,
    ) -> Result<KeyframeCurve, ConfigurationError> {
        self.validate()?;
        Ok(KeyframeCurve {
            key_path: key_path.into(),
            duration: self.duration,
            key_times: self.times.clone(),
            values: self.values.iter().map(|v| v.into_value()).collect(),
            kind: V::KIND,
        })
    }
}

/// A validated, immutable keyframe curve bound to a key path.
///
/// Between key times the value is interpolated linearly, which is the
/// native runtime's default calculation mode.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeCurve {
    key_path: PropertyKey,
    duration: f64,
    key_times: Vec<f64>,
    values: Vec<AnimationValue>,
    kind: ValueKind,
}

impl KeyframeCurve {
    /// The property this curve animates.
    #[must_use]
    pub fn key_path(&self) -> &PropertyKey {
        &self.key_path
    }

    /// Duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Normalized key times, strictly increasing from `0.0` to `1.0`.
    #[must_use]
    pub fn key_times(&self) -> &[f64] {
        &self.key_times
    }

    /// One value per key time.
    #[must_use]
    pub fn values(&self) -> &[AnimationValue] {
        &self.values
    }

    /// The kind shared by every value.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        self.kind
    }

    /// Samples the curve `elapsed` seconds after it started.
    #[must_use]
    pub fn sample(&self, elapsed: f64) -> AnimationValue {
        self.sample_fraction(elapsed / self.duration)
    }

    /// Samples the curve at a fraction of its duration, clamped to
    /// `0.0..=1.0`.
    #[must_use]
    pub fn sample_fraction(&self, fraction: f64) -> AnimationValue {
        let f = fraction.clamp(0.0, 1.0);
        let hi = self.key_times.partition_point(|&t| t <= f);
        if hi == 0 {
            return self.values[0];
        }
        if hi >= self.key_times.len() {
            return self.values[self.values.len() - 1];
        }
        let lo = hi - 1;
        let (t0, t1) = (self.key_times[lo], self.key_times[hi]);
        let local = (f - t0) / (t1 - t0);
        self.values[lo]
            .lerp(&self.values[hi], local)
            .unwrap_or(self.values[lo])
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::color::Color;
    use crate::dimension::Dimension;

    fn ramp() -> KeyframeAnimation<f64> {
        KeyframeAnimation::new(1.0, [0.0, 0.5, 1.0], [0.0, 50.0, 100.0])
    }

    #[test]
    fn compile_and_sample_midpoint() {
        let curve = ramp().compile(PropertyKey::OPACITY).unwrap();
        assert_eq!(curve.key_path(), &PropertyKey::OPACITY);
        assert_eq!(curve.value_kind(), ValueKind::Float);
        assert_eq!(curve.sample(0.5), AnimationValue::Float(50.0));
        assert_eq!(curve.sample(0.25), AnimationValue::Float(25.0));
    }

    #[test]
    fn sample_respects_duration() {
        let mut anim = ramp();
        anim.duration = 4.0;
        let curve = anim.compile("opacity").unwrap();
        assert_eq!(curve.sample(2.0), AnimationValue::Float(50.0));
        assert_eq!(curve.sample(3.0), AnimationValue::Float(75.0));
    }

    #[test]
    fn sample_clamps_outside_range() {
        let curve = ramp().compile(PropertyKey::OPACITY).unwrap();
        assert_eq!(curve.sample(-1.0), AnimationValue::Float(0.0));
        assert_eq!(curve.sample(7.0), AnimationValue::Float(100.0));
        assert_eq!(curve.sample_fraction(1.0), AnimationValue::Float(100.0));
    }

    #[test]
    fn length_mismatch_rejected() {
        let anim = KeyframeAnimation::new(1.0, [0.0, 1.0], [0.0, 1.0, 2.0]);
        assert_eq!(
            anim.compile(PropertyKey::OPACITY),
            Err(ConfigurationError::LengthMismatch {
                times: 2,
                values: 3
            })
        );
    }

    #[test]
    fn single_sample_rejected() {
        let anim = KeyframeAnimation::new(1.0, [0.0], [1.0]);
        assert_eq!(
            anim.compile(PropertyKey::OPACITY),
            Err(ConfigurationError::TooFewSamples(1))
        );
        let empty = KeyframeAnimation::<f64>::new(1.0, [], []);
        assert_eq!(
            empty.validate(),
            Err(ConfigurationError::TooFewSamples(0))
        );
    }

    #[test]
    fn endpoints_must_be_exact() {
        let late_start = KeyframeAnimation::new(1.0, [0.1, 1.0], [0.0, 1.0]);
        assert_eq!(
            late_start.validate(),
            Err(ConfigurationError::InvalidStart(0.1))
        );
        let early_end = KeyframeAnimation::new(1.0, [0.0, 0.9], [0.0, 1.0]);
        assert_eq!(
            early_end.validate(),
            Err(ConfigurationError::InvalidEnd(0.9))
        );
    }

    #[test]
    fn non_increasing_times_rejected() {
        let repeated = KeyframeAnimation::new(1.0, [0.0, 0.5, 0.5, 1.0], [0.0; 4]);
        assert_eq!(
            repeated.validate(),
            Err(ConfigurationError::NotStrictlyIncreasing { index: 2 })
        );
        let backwards = KeyframeAnimation::new(1.0, [0.0, 0.7, 0.3, 1.0], [0.0; 4]);
        assert_eq!(
            backwards.validate(),
            Err(ConfigurationError::NotStrictlyIncreasing { index: 2 })
        );
        let nan = KeyframeAnimation::new(1.0, [0.0, f64::NAN, 1.0], [0.0; 3]);
        assert_eq!(
            nan.validate(),
            Err(ConfigurationError::NotStrictlyIncreasing { index: 1 })
        );
    }

    #[test]
    fn duration_must_be_positive() {
        for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut anim = ramp();
            anim.duration = d;
            assert!(matches!(
                anim.compile(PropertyKey::OPACITY),
                Err(ConfigurationError::InvalidDuration(_))
            ));
        }
    }

    #[test]
    fn from_keyframes_normalizes_offsets() {
        let anim = KeyframeAnimation::from_keyframes(
            Duration::from_millis(400),
            [
                Keyframe {
                    time: Duration::ZERO,
                    value: Color::BLACK,
                },
                Keyframe {
                    time: Duration::from_millis(100),
                    value: Color::WHITE,
                },
                Keyframe {
                    time: Duration::from_millis(400),
                    value: Color::BLACK,
                },
            ],
        );
        assert_eq!(anim.duration, 0.4);
        assert_eq!(anim.times, vec![0.0, 0.25, 1.0]);
        let curve = anim.compile(PropertyKey::BACKGROUND_COLOR).unwrap();
        assert_eq!(curve.value_kind(), ValueKind::Color);
    }

    #[test]
    fn map_resolves_dimension_values() {
        let anim = KeyframeAnimation::new(
            0.3,
            [0.0, 1.0],
            [Dimension::pixels(10.0), Dimension::percentage(0.5)],
        );
        let curve = anim
            .map(|d| d.resolve(300.0))
            .compile(PropertyKey::TRANSLATION_X)
            .unwrap();
        assert_eq!(
            curve.values(),
            &[AnimationValue::Float(10.0), AnimationValue::Float(150.0)]
        );
    }

    #[test]
    fn curve_is_reusable() {
        let curve = ramp().compile(PropertyKey::OPACITY).unwrap();
        let copy = curve.clone();
        assert_eq!(copy.sample(0.5), curve.sample(0.5));
        assert_eq!(curve.key_times(), &[0.0, 0.5, 1.0]);
    }
}
