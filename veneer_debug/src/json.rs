// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace export.
//!
//! [`JsonLinesSink`] writes one self-contained JSON object per event, one per
//! line, so traces can be streamed into `jq` or loaded line by line. Every
//! object carries an `"event"` field naming the event kind.

use std::io::Write;

use serde_json::{Value, json};

use veneer_core::animation::AnimationId;
use veneer_core::trace::{
    AttachEvent, DispatchSummary, LayoutPassEvent, StaleDeliveryEvent, StopEvent, TraceSink,
};

/// Writes trace events as JSON lines to a [`Write`](std::io::Write) destination.
///
/// Write errors are counted rather than propagated, since sink methods
/// cannot fail.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    errors: u64,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, errors: 0 }
    }

    /// Returns how many events failed to be written.
    #[must_use]
    pub fn errors(&self) -> u64 {
        self.errors
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, value: &Value) {
        let written = serde_json::to_writer(&mut self.writer, value)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));
        if written.is_err() {
            self.errors += 1;
        }
    }
}

fn animation_json(id: AnimationId) -> Value {
    json!({
        "index": id.index(),
        "generation": id.generation(),
    })
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_attach(&mut self, e: &AttachEvent<'_>) {
        self.emit(&json!({
            "event": "attach",
            "animation": animation_json(e.animation),
            "layer": e.layer.0,
            "key": e.key.as_str(),
            "duration": e.duration,
            "keyframes": e.keyframes,
        }));
    }

    fn on_stop(&mut self, e: &StopEvent<'_>) {
        self.emit(&json!({
            "event": "stop",
            "animation": animation_json(e.animation),
            "layer": e.layer.0,
            "key": e.key.as_str(),
            "cause": e.cause.label(),
            "notified": e.notified,
        }));
    }

    fn on_stale_delivery(&mut self, e: &StaleDeliveryEvent) {
        self.emit(&json!({
            "event": "stale",
            "animation": animation_json(e.animation),
            "finished": e.finished,
        }));
    }

    fn on_layout(&mut self, e: &LayoutPassEvent) {
        self.emit(&json!({
            "event": "layout",
            "frame": [e.frame.x0, e.frame.y0, e.frame.x1, e.frame.y1],
            "emitted": e.emitted,
        }));
    }

    fn on_dispatch(&mut self, s: &DispatchSummary) {
        self.emit(&json!({
            "event": "dispatch",
            "delivered": s.delivered,
            "notified": s.notified,
            "stale": s.stale,
        }));
    }
}
