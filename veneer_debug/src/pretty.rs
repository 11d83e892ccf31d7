// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use veneer_core::trace::{
    AttachEvent, DispatchSummary, LayoutPassEvent, StaleDeliveryEvent, StopEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_attach(&mut self, e: &AttachEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[attach] {:?} layer={} key={} duration={:.3}s keyframes={}",
            e.animation, e.layer.0, e.key, e.duration, e.keyframes,
        );
    }

    fn on_stop(&mut self, e: &StopEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[stop] {:?} layer={} key={} cause={} notified={}",
            e.animation,
            e.layer.0,
            e.key,
            e.cause.label(),
            e.notified,
        );
    }

    fn on_stale_delivery(&mut self, e: &StaleDeliveryEvent) {
        let _ = writeln!(
            self.writer,
            "[stale] {:?} finished={} (dropped)",
            e.animation, e.finished,
        );
    }

    fn on_layout(&mut self, e: &LayoutPassEvent) {
        let _ = writeln!(
            self.writer,
            "[layout] frame=({:.1}, {:.1}, {:.1}, {:.1}) emitted={}",
            e.frame.x0, e.frame.y0, e.frame.x1, e.frame.y1, e.emitted,
        );
    }

    fn on_dispatch(&mut self, s: &DispatchSummary) {
        let _ = writeln!(
            self.writer,
            "[dispatch] delivered={} notified={} stale={}",
            s.delivered, s.notified, s.stale,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use veneer_core::animation::AnimationStore;
    use veneer_core::layer::LayerId;
    use veneer_core::property::PropertyKey;
    use veneer_core::trace::StopCause;

    #[test]
    fn pretty_print_stop() {
        let mut store = AnimationStore::new();
        let id = store.insert(LayerId(4), PropertyKey::OPACITY);
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_stop(&StopEvent {
            animation: id,
            layer: LayerId(4),
            key: &PropertyKey::OPACITY,
            cause: StopCause::Replaced,
            notified: false,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("[stop]"), "got: {output}");
        assert!(output.contains("layer=4 key=opacity"), "got: {output}");
        assert!(output.contains("cause=replaced"), "got: {output}");
    }

    #[test]
    fn pretty_print_layout() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_layout(&LayoutPassEvent {
            frame: Rect::new(0.0, 0.0, 320.0, 44.0),
            emitted: true,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "[layout] frame=(0.0, 0.0, 320.0, 44.0) emitted=true\n"
        );
    }
}
