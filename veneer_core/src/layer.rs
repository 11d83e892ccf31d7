// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-layer identification.
//!
//! [`LayerId`] is a lightweight handle naming one native render-layer.
//! Runtimes assign these; core treats them as opaque.

use core::fmt;

/// Identifies a render-layer that animations can be attached to.
///
/// The value is chosen by whoever owns the native layer (a backend registry,
/// or a test). Core code only compares and hashes it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LayerId(pub u64);

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerId({})", self.0)
    }
}
