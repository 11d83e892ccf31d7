// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animatable layer property key paths.

use alloc::borrow::Cow;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// A key path naming the layer property an animation drives.
///
/// Key paths use the native runtime's dotted syntax, e.g. `"opacity"` or
/// `"transform.translation.x"`. At most one animation is attached per layer
/// and key path.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey(Cow<'static, str>);

impl PropertyKey {
    /// Layer opacity (float).
    pub const OPACITY: Self = Self::from_static("opacity");
    /// Full layer transform (transform).
    pub const TRANSFORM: Self = Self::from_static("transform");
    /// Horizontal translation component of the transform (float).
    pub const TRANSLATION_X: Self = Self::from_static("transform.translation.x");
    /// Vertical translation component of the transform (float).
    pub const TRANSLATION_Y: Self = Self::from_static("transform.translation.y");
    /// Uniform scale component of the transform (float).
    pub const SCALE: Self = Self::from_static("transform.scale");
    /// Layer position in its superlayer (point).
    pub const POSITION: Self = Self::from_static("position");
    /// Background fill (color).
    pub const BACKGROUND_COLOR: Self = Self::from_static("backgroundColor");
    /// Scalar corner radius (float).
    pub const CORNER_RADIUS: Self = Self::from_static("cornerRadius");

    /// Creates a key from a string literal without allocating.
    #[must_use]
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Returns the key path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyKey({:?})", self.as_str())
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Hashes and compares exactly like the underlying string, so maps keyed by
// `PropertyKey` can be queried with a `&str`.
impl Borrow<str> for PropertyKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for PropertyKey {
    fn from(path: &'static str) -> Self {
        Self::from_static(path)
    }
}

impl From<String> for PropertyKey {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn owned_and_static_keys_compare_equal() {
        let owned = PropertyKey::from(String::from("opacity"));
        assert_eq!(owned, PropertyKey::OPACITY);
        assert_eq!(owned.to_string(), "opacity");
    }

    #[test]
    fn debug_shows_path() {
        assert_eq!(
            alloc::format!("{:?}", PropertyKey::TRANSLATION_X),
            "PropertyKey(\"transform.translation.x\")"
        );
    }
}
