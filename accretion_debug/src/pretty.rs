// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable notice output.
//!
//! [`PrettyPrintSink`] implements [`NoticeSink`] and writes one line per
//! notice to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use accretion_core::notify::{
    FinishEvent, HighlightEvent, HighlightReason, NoticeSink, OrderEvent, OrderSource, PageEvent,
    ResetEvent,
};

/// Writes human-readable notice lines to a [`Write`](std::io::Write) destination.
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
}

fn reason_name(reason: HighlightReason) -> &'static str {
    match reason {
        HighlightReason::MissingRequired => "missing-required",
        HighlightReason::Incorrect => "incorrect",
    }
}

fn source_name(source: OrderSource) -> &'static str {
    match source {
        OrderSource::Shuffled => "shuffled",
        OrderSource::Explicit => "explicit",
    }
}

impl<W: Write> NoticeSink for PrettyPrintSink<W> {
    fn on_enabled(&mut self) {
        let _ = writeln!(self.writer, "[enabled]");
    }

    fn on_disabled(&mut self) {
        let _ = writeln!(self.writer, "[disabled]");
    }

    fn on_highlighted(&mut self, e: &HighlightEvent) {
        let _ = writeln!(
            self.writer,
            "[highlight] item={} reason={}",
            e.id,
            reason_name(e.reason),
        );
    }

    fn on_page_changed(&mut self, e: &PageEvent) {
        let _ = writeln!(
            self.writer,
            "[page] from={} to={} item={}",
            e.from, e.to, e.id,
        );
    }

    fn on_finished(&mut self, e: &FinishEvent) {
        let _ = writeln!(self.writer, "[finished] answered={}", e.answered);
    }

    fn on_reset(&mut self, e: &ResetEvent) {
        let _ = writeln!(self.writer, "[reset] reshuffled={}", e.reshuffled);
    }

    fn on_order_changed(&mut self, e: &OrderEvent) {
        let _ = writeln!(
            self.writer,
            "[order] len={} source={}",
            e.len,
            source_name(e.source),
        );
    }
}

#[cfg(test)]
mod tests {
    use accretion_core::ItemId;

    use super::*;

    #[test]
    fn pretty_print_page() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_page_changed(&PageEvent {
            from: 0,
            to: 2,
            id: ItemId::new("q3"),
        });
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[page]"), "got: {output}");
        assert!(output.contains("from=0 to=2 item=q3"), "got: {output}");
    }

    #[test]
    fn pretty_print_highlight() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_highlighted(&HighlightEvent {
            id: ItemId::new("consent"),
            reason: HighlightReason::MissingRequired,
        });
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("reason=missing-required"), "got: {output}");
    }
}
