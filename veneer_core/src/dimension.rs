// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute and relative lengths.
//!
//! A [`Dimension`] is either a fixed number of display points or a fraction
//! of some extent that is only known once layout runs. Resolution is a pure
//! function of the dimension and the extent; nothing is clamped or
//! sanitized, so out-of-range and non-finite values flow through to the
//! caller unchanged.

use kurbo::Size;

/// The unit of a [`Dimension`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    /// Absolute display points, independent of any container.
    #[default]
    Pixels,
    /// A fraction of the resolution context (`1.0` is the whole extent).
    Percentage,
}

/// A length expressed either in display points or as a fraction of a
/// container extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimension {
    /// The unit of this dimension.
    pub kind: DimensionKind,
    /// The value of this dimension, interpreted according to `kind`.
    pub value: f64,
}

impl Dimension {
    /// Zero display points.
    pub const ZERO: Self = Self::pixels(0.0);

    /// Creates an absolute dimension.
    #[inline]
    #[must_use]
    pub const fn pixels(value: f64) -> Self {
        Self {
            kind: DimensionKind::Pixels,
            value,
        }
    }

    /// Creates a relative dimension. `fraction` is not a 0–100 percentage:
    /// `0.5` means half of the extent.
    #[inline]
    #[must_use]
    pub const fn percentage(fraction: f64) -> Self {
        Self {
            kind: DimensionKind::Percentage,
            value: fraction,
        }
    }

    /// Resolves this dimension against the extent of the relevant axis.
    #[inline]
    #[must_use]
    pub fn resolve(self, extent: f64) -> f64 {
        match self.kind {
            DimensionKind::Pixels => self.value,
            DimensionKind::Percentage => self.value * extent,
        }
    }

    /// Returns whether resolving this dimension depends on the extent.
    #[inline]
    #[must_use]
    pub const fn is_relative(self) -> bool {
        matches!(self.kind, DimensionKind::Percentage)
    }
}

/// A two-dimensional offset or anchor whose axes resolve independently.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, resolved against the container width.
    pub x: Dimension,
    /// Vertical coordinate, resolved against the container height.
    pub y: Dimension,
}

impl Point {
    /// The origin in absolute units.
    pub const ZERO: Self = Self::new(Dimension::ZERO, Dimension::ZERO);

    /// Returns a point with the given coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: Dimension, y: Dimension) -> Self {
        Self { x, y }
    }

    /// Returns a point whose coordinates are both `value`.
    #[inline]
    #[must_use]
    pub const fn splat(value: Dimension) -> Self {
        Self::new(value, value)
    }

    /// Resolves both coordinates against `container`.
    #[inline]
    #[must_use]
    pub fn resolve(self, container: Size) -> kurbo::Point {
        kurbo::Point::new(
            self.x.resolve(container.width),
            self.y.resolve(container.height),
        )
    }
}
