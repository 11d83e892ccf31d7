// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-corner elliptical radii.

use kurbo::{RoundedRectRadii, Size, Vec2};

use crate::dimension::Point;

/// Radii for each corner of a rounded rectangle.
///
/// Each corner is a [`Point`] whose `x` is the horizontal radius and `y` the
/// vertical radius, so corners may be elliptical. Relative radii resolve
/// against the box the corners belong to: `x` against its width and `y`
/// against its height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    /// Top-leading corner.
    pub top_leading: Point,
    /// Top-trailing corner.
    pub top_trailing: Point,
    /// Bottom-trailing corner.
    pub bottom_trailing: Point,
    /// Bottom-leading corner.
    pub bottom_leading: Point,
}

impl CornerRadii {
    /// Square corners.
    pub const ZERO: Self = Self::uniform(Point::ZERO);

    /// Uses the same radius for every corner.
    #[must_use]
    pub const fn uniform(radius: Point) -> Self {
        Self {
            top_leading: radius,
            top_trailing: radius,
            bottom_trailing: radius,
            bottom_leading: radius,
        }
    }

    /// Resolves every corner against `box_size`.
    #[must_use]
    pub fn resolve(self, box_size: Size) -> ResolvedCornerRadii {
        ResolvedCornerRadii {
            top_leading: self.top_leading.resolve(box_size).to_vec2(),
            top_trailing: self.top_trailing.resolve(box_size).to_vec2(),
            bottom_trailing: self.bottom_trailing.resolve(box_size).to_vec2(),
            bottom_leading: self.bottom_leading.resolve(box_size).to_vec2(),
        }
    }
}

/// Corner radii in absolute units; `x` and `y` of each vector are the
/// horizontal and vertical radius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedCornerRadii {
    /// Top-leading corner.
    pub top_leading: Vec2,
    /// Top-trailing corner.
    pub top_trailing: Vec2,
    /// Bottom-trailing corner.
    pub bottom_trailing: Vec2,
    /// Bottom-leading corner.
    pub bottom_leading: Vec2,
}

impl ResolvedCornerRadii {
    /// Returns the corners in top-leading, top-trailing, bottom-trailing,
    /// bottom-leading order.
    #[must_use]
    pub const fn to_array(self) -> [Vec2; 4] {
        [
            self.top_leading,
            self.top_trailing,
            self.bottom_trailing,
            self.bottom_leading,
        ]
    }

    /// Returns whether all corners are circular and share one radius.
    #[must_use]
    pub fn is_uniform(self) -> bool {
        let [a, b, c, d] = self.to_array();
        a.x == a.y && a == b && a == c && a == d
    }

    /// Returns the largest radius along either axis.
    ///
    /// Platforms that only support a single scalar corner radius use this.
    #[must_use]
    pub fn max_radius(self) -> f64 {
        self.to_array()
            .iter()
            .fold(0.0_f64, |acc, r| acc.max(r.x).max(r.y))
    }

    /// Approximates these radii as circular radii, taking the smaller of the
    /// two axes for each corner. Leading maps to left.
    #[must_use]
    pub fn to_rounded_rect_radii(self) -> RoundedRectRadii {
        RoundedRectRadii::new(
            self.top_leading.x.min(self.top_leading.y),
            self.top_trailing.x.min(self.top_trailing.y),
            self.bottom_trailing.x.min(self.bottom_trailing.y),
            self.bottom_leading.x.min(self.bottom_leading.y),
        )
    }
}
