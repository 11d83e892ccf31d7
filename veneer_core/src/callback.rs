// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional callback slots.
//!
//! Both slot types are optional by default: an empty slot means "no
//! listener" and invoking it is a no-op. [`Callback`] may fire any number of
//! times; [`OnceCallback`] gives up its function on the first invocation, so
//! it fires at most once no matter how often it is invoked.
//!
//! Slots are not `Send`. They are filled and invoked on the UI thread.

use alloc::boxed::Box;
use core::fmt;

/// A slot holding at most one repeatable listener taking a `T` payload.
pub struct Callback<T> {
    f: Option<Box<dyn FnMut(T)>>,
}

impl<T> Callback<T> {
    /// Creates a slot holding `f`.
    pub fn new(f: impl FnMut(T) + 'static) -> Self {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Creates an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self { f: None }
    }

    /// Replaces the listener.
    pub fn set(&mut self, f: impl FnMut(T) + 'static) {
        self.f = Some(Box::new(f));
    }

    /// Removes the listener.
    pub fn clear(&mut self) {
        self.f = None;
    }

    /// Returns whether a listener is registered.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.f.is_some()
    }

    /// Calls the listener with `payload`. Returns `false` if the slot is empty.
    pub fn invoke(&mut self, payload: T) -> bool {
        match &mut self.f {
            Some(f) => {
                f(payload);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_set())
            .finish()
    }
}

/// A slot holding at most one listener that fires at most once.
pub struct OnceCallback<T> {
    f: Option<Box<dyn FnOnce(T)>>,
}

impl<T> OnceCallback<T> {
    /// Creates a slot holding `f`.
    pub fn new(f: impl FnOnce(T) + 'static) -> Self {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Creates an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self { f: None }
    }

    /// Replaces the listener. A replaced listener is dropped uncalled.
    pub fn set(&mut self, f: impl FnOnce(T) + 'static) {
        self.f = Some(Box::new(f));
    }

    /// Drops the listener uncalled.
    pub fn clear(&mut self) {
        self.f = None;
    }

    /// Returns whether a listener is still waiting to fire.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.f.is_some()
    }

    /// Takes the listener out of the slot and calls it with `payload`.
    ///
    /// Returns `false` if the slot was empty, including when it already
    /// fired.
    pub fn invoke(&mut self, payload: T) -> bool {
        match self.f.take() {
            Some(f) => {
                f(payload);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for OnceCallback<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for OnceCallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceCallback")
            .field("set", &self.is_set())
            .finish()
    }
}
