// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-edge values for padding-like insets.
//!
//! [`ByEdge`] holds one value per edge of a rectangle. The horizontal axis
//! can be written either as a symmetric shorthand (`independent == true`,
//! where `start` applies to both sides) or as two explicit values that
//! map to the leading and trailing edges. The vertical axis is always
//! two explicit values.

use kurbo::{Insets, Rect, Size};

use crate::dimension::Dimension;

/// Reading direction used to map leading/trailing edges to left/right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Leading is left, trailing is right.
    #[default]
    Ltr,
    /// Leading is right, trailing is left.
    Rtl,
}

/// Values for the horizontal edges of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisX<T> {
    /// When `true`, `start` is used for both edges and `end` is ignored.
    pub independent: bool,
    /// Value for the leading edge (or both edges when `independent`).
    pub start: T,
    /// Value for the trailing edge. Unused when `independent`.
    pub end: T,
}

/// Values for the vertical edges of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisY<T> {
    /// Value for the top edge.
    pub top: T,
    /// Value for the bottom edge.
    pub bottom: T,
}

/// A value of type `T` for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ByEdge<T> {
    /// Values for the horizontal edges.
    pub horizontal: AxisX<T>,
    /// Values for the vertical edges.
    pub vertical: AxisY<T>,
}

/// Per-edge insets expressed in [`Dimension`]s.
pub type DimensionByEdge = ByEdge<Dimension>;

impl<T: Copy> ByEdge<T> {
    /// Uses `value` for all four edges.
    #[must_use]
    pub fn all(value: T) -> Self {
        Self::symmetric(value, value)
    }

    /// Uses `horizontal` for left and right, `vertical` for top and bottom.
    #[must_use]
    pub fn symmetric(horizontal: T, vertical: T) -> Self {
        Self {
            horizontal: AxisX {
                independent: true,
                start: horizontal,
                end: horizontal,
            },
            vertical: AxisY {
                top: vertical,
                bottom: vertical,
            },
        }
    }

    /// Uses explicit values for each edge. `start` and `end` are the leading
    /// and trailing edges.
    #[must_use]
    pub fn new(top: T, end: T, bottom: T, start: T) -> Self {
        Self {
            horizontal: AxisX {
                independent: false,
                start,
                end,
            },
            vertical: AxisY { top, bottom },
        }
    }

    /// Applies `f` to every value, keeping the shorthand flag.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ByEdge<U> {
        ByEdge {
            horizontal: AxisX {
                independent: self.horizontal.independent,
                start: f(self.horizontal.start),
                end: f(self.horizontal.end),
            },
            vertical: AxisY {
                top: f(self.vertical.top),
                bottom: f(self.vertical.bottom),
            },
        }
    }

    /// Returns the `(left, right)` values for the given direction.
    #[must_use]
    pub fn left_right(self, direction: LayoutDirection) -> (T, T) {
        let h = self.horizontal;
        if h.independent {
            return (h.start, h.start);
        }
        match direction {
            LayoutDirection::Ltr => (h.start, h.end),
            LayoutDirection::Rtl => (h.end, h.start),
        }
    }
}

impl ByEdge<Dimension> {
    /// Resolves the insets against `container` for a left-to-right layout.
    ///
    /// Horizontal values resolve against the container width and vertical
    /// values against its height. The returned [`Insets`] use `x0` for the
    /// left edge, `y0` for the top, `x1` for the right and `y1` for the
    /// bottom.
    #[must_use]
    pub fn resolve(self, container: Size) -> Insets {
        self.resolve_with_direction(container, LayoutDirection::Ltr)
    }

    /// Resolves the insets against `container`, mapping leading and trailing
    /// edges according to `direction`.
    #[must_use]
    pub fn resolve_with_direction(self, container: Size, direction: LayoutDirection) -> Insets {
        let (left, right) = self.left_right(direction);
        Insets::new(
            left.resolve(container.width),
            self.vertical.top.resolve(container.height),
            right.resolve(container.width),
            self.vertical.bottom.resolve(container.height),
        )
    }
}

/// Shrinks `rect` by `insets`. Negative insets grow it.
///
/// Same as kurbo's `rect - insets`, which normalizes `rect` first.
#[must_use]
pub fn inset_rect(rect: Rect, insets: Insets) -> Rect {
    rect - insets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(v: f64) -> Dimension {
        Dimension::pixels(v)
    }

    #[test]
    fn independent_applies_start_to_both_sides() {
        let edges = DimensionByEdge {
            horizontal: AxisX {
                independent: true,
                start: px(8.0),
                end: px(999.0),
            },
            vertical: AxisY {
                top: px(4.0),
                bottom: px(4.0),
            },
        };
        for size in [Size::ZERO, Size::new(320.0, 480.0), Size::new(1.0, 1e6)] {
            assert_eq!(edges.resolve(size), Insets::new(8.0, 4.0, 8.0, 4.0));
        }
    }

    #[test]
    fn explicit_edges_are_asymmetric() {
        let edges = DimensionByEdge::new(
            px(1.0),
            Dimension::percentage(0.1),
            px(3.0),
            px(2.0),
        );
        assert_eq!(
            edges.resolve(Size::new(200.0, 50.0)),
            Insets::new(2.0, 1.0, 20.0, 3.0)
        );
    }

    #[test]
    fn rtl_swaps_leading_and_trailing() {
        let edges = DimensionByEdge::new(px(0.0), px(10.0), px(0.0), px(2.0));
        assert_eq!(
            edges.resolve_with_direction(Size::new(100.0, 100.0), LayoutDirection::Rtl),
            Insets::new(10.0, 0.0, 2.0, 0.0)
        );
    }

    #[test]
    fn rtl_does_not_affect_shorthand() {
        let edges = DimensionByEdge::symmetric(px(6.0), px(2.0));
        assert_eq!(
            edges.resolve_with_direction(Size::new(100.0, 100.0), LayoutDirection::Rtl),
            Insets::new(6.0, 2.0, 6.0, 2.0)
        );
    }

    #[test]
    fn vertical_percentages_use_height() {
        let edges = DimensionByEdge::all(Dimension::percentage(0.5));
        assert_eq!(
            edges.resolve(Size::new(100.0, 40.0)),
            Insets::new(50.0, 20.0, 50.0, 20.0)
        );
    }

    #[test]
    fn negative_insets_are_not_clamped() {
        let edges = DimensionByEdge::all(px(-3.0));
        assert_eq!(
            edges.resolve(Size::new(10.0, 10.0)),
            Insets::new(-3.0, -3.0, -3.0, -3.0)
        );
    }

    #[test]
    fn map_keeps_shorthand_flag() {
        let edges = ByEdge::symmetric(1_u8, 2_u8).map(f64::from);
        assert!(edges.horizontal.independent);
        assert_eq!(edges.vertical.bottom, 2.0);
    }

    #[test]
    fn inset_rect_shrinks() {
        let r = inset_rect(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Insets::new(10.0, 5.0, 20.0, 15.0),
        );
        assert_eq!(r, Rect::new(10.0, 5.0, 80.0, 35.0));

        let grown = inset_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Insets::uniform(-2.0));
        assert_eq!(grown, Rect::new(-2.0, -2.0, 12.0, 12.0));
    }
}
