// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process entry points.
//!
//! The native shell starts the process and later learns that the
//! application finished launching. Both moments hand control to Rust
//! through a [`Springboard`], which the host builds and passes to the shell
//! explicitly. There is no process-wide table.

/// The two entry functions the native shell calls into.
#[derive(Clone, Copy, Debug)]
pub struct Springboard {
    main: fn(),
    application_did_finish_launching: fn(),
}

impl Springboard {
    /// Creates a springboard from its two entry functions.
    #[must_use]
    pub const fn new(main: fn(), application_did_finish_launching: fn()) -> Self {
        Self {
            main,
            application_did_finish_launching,
        }
    }

    /// Runs the process entry function.
    pub fn run_main(&self) {
        (self.main)();
    }

    /// Runs the launch-completion entry function.
    pub fn application_did_finish_launching(&self) {
        (self.application_did_finish_launching)();
    }
}
