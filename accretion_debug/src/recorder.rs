// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary notice recording and decoding.
//!
//! [`RecorderSink`] implements [`NoticeSink`] and encodes notices into a
//! byte buffer as little-endian records. [`decode`] reads them back as an
//! iterator of [`RecordedNotice`], and [`replay`] feeds a recording into
//! another sink.
//!
//! A group takes ownership of its sink, so the recorder shares its buffer
//! with a [`Recording`] handle obtained up front: hand the sink over, run
//! the session, then read the bytes through the handle.

use std::cell::RefCell;
use std::rc::Rc;

use accretion_core::ItemId;
use accretion_core::notify::{
    FinishEvent, HighlightEvent, HighlightReason, NoticeSink, OrderEvent, OrderSource, PageEvent,
    ResetEvent,
};

// ---------------------------------------------------------------------------
// Notice type discriminants
// ---------------------------------------------------------------------------

const TAG_ENABLED: u8 = 1;
const TAG_DISABLED: u8 = 2;
const TAG_HIGHLIGHT: u8 = 3;
const TAG_PAGE: u8 = 4;
const TAG_FINISHED: u8 = 5;
const TAG_RESET: u8 = 6;
const TAG_ORDER: u8 = 7;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`NoticeSink`] that encodes notices into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Rc<RefCell<Vec<u8>>>,
}

/// A read handle onto a [`RecorderSink`] buffer.
///
/// Stays usable after the sink itself has been boxed and handed to a group.
#[derive(Clone, Debug)]
pub struct Recording {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl Recording {
    /// Copies out the bytes recorded so far.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.buf.borrow().clone()
    }

    /// Returns whether anything has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.borrow().is_empty()
    }
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that reads the recording after the sink has been
    /// handed over.
    #[must_use]
    pub fn recording(&self) -> Recording {
        Recording {
            buf: Rc::clone(&self.buf),
        }
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        Rc::try_unwrap(self.buf).map_or_else(|rc| rc.borrow().clone(), RefCell::into_inner)
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.borrow_mut().push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.borrow_mut().extend_from_slice(&v.to_le_bytes());
    }

    fn write_count(&mut self, v: usize) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "counts are capped at u32::MAX for recording"
        )]
        self.write_u32(v.min(u32::MAX as usize) as u32);
    }

    fn write_str(&mut self, s: &str) {
        self.write_count(s.len());
        self.buf.borrow_mut().extend_from_slice(s.as_bytes());
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_reason(&mut self, reason: HighlightReason) {
        self.write_u8(match reason {
            HighlightReason::MissingRequired => 0,
            HighlightReason::Incorrect => 1,
        });
    }

    fn write_source(&mut self, source: OrderSource) {
        self.write_u8(match source {
            OrderSource::Shuffled => 0,
            OrderSource::Explicit => 1,
        });
    }
}

impl NoticeSink for RecorderSink {
    fn on_enabled(&mut self) {
        self.write_u8(TAG_ENABLED);
    }

    fn on_disabled(&mut self) {
        self.write_u8(TAG_DISABLED);
    }

    fn on_highlighted(&mut self, e: &HighlightEvent) {
        self.write_u8(TAG_HIGHLIGHT);
        self.write_reason(e.reason);
        self.write_str(e.id.as_str());
    }

    fn on_page_changed(&mut self, e: &PageEvent) {
        self.write_u8(TAG_PAGE);
        self.write_count(e.from);
        self.write_count(e.to);
        self.write_str(e.id.as_str());
    }

    fn on_finished(&mut self, e: &FinishEvent) {
        self.write_u8(TAG_FINISHED);
        self.write_count(e.answered);
    }

    fn on_reset(&mut self, e: &ResetEvent) {
        self.write_u8(TAG_RESET);
        self.write_bool(e.reshuffled);
    }

    fn on_order_changed(&mut self, e: &OrderEvent) {
        self.write_u8(TAG_ORDER);
        self.write_count(e.len);
        self.write_source(e.source);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded notice from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedNotice {
    /// The group became interactive.
    Enabled,
    /// The group stopped being interactive.
    Disabled,
    /// An offender was flagged.
    Highlighted {
        /// The flagged item.
        id: ItemId,
        /// Why it was flagged.
        reason: HighlightReason,
    },
    /// Paging moved to a new position.
    Page {
        /// Display position left behind.
        from: usize,
        /// Display position now active.
        to: usize,
        /// Item at the new position.
        id: ItemId,
    },
    /// A paging pass completed.
    Finished {
        /// How many items stored validated answers.
        answered: usize,
    },
    /// The group was reset.
    Reset {
        /// Whether a fresh display order was drawn.
        reshuffled: bool,
    },
    /// The display order changed.
    Order {
        /// Number of display positions.
        len: usize,
        /// What produced the new order.
        source: OrderSource,
    },
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedNotice`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Feeds every decoded notice from `bytes` into `sink`.
pub fn replay(bytes: &[u8], sink: &mut dyn NoticeSink) {
    for notice in decode(bytes) {
        match notice {
            RecordedNotice::Enabled => sink.on_enabled(),
            RecordedNotice::Disabled => sink.on_disabled(),
            RecordedNotice::Highlighted { id, reason } => {
                sink.on_highlighted(&HighlightEvent { id, reason });
            }
            RecordedNotice::Page { from, to, id } => {
                sink.on_page_changed(&PageEvent { from, to, id });
            }
            RecordedNotice::Finished { answered } => {
                sink.on_finished(&FinishEvent { answered });
            }
            RecordedNotice::Reset { reshuffled } => {
                sink.on_reset(&ResetEvent { reshuffled });
            }
            RecordedNotice::Order { len, source } => {
                sink.on_order_changed(&OrderEvent { len, source });
            }
        }
    }
}

/// Iterator over decoded notices.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_count(&mut self) -> Option<usize> {
        usize::try_from(self.read_u32()?).ok()
    }

    fn read_str(&mut self) -> Option<String> {
        let len = self.read_count()?;
        if self.remaining() < len {
            return None;
        }
        let s = std::str::from_utf8(&self.data[self.pos..self.pos + len]).ok()?;
        self.pos += len;
        Some(s.to_owned())
    }

    fn read_bool(&mut self) -> Option<bool> {
        Some(self.read_u8()? != 0)
    }

    fn read_reason(&mut self) -> Option<HighlightReason> {
        Some(match self.read_u8()? {
            0 => HighlightReason::MissingRequired,
            _ => HighlightReason::Incorrect,
        })
    }

    fn read_source(&mut self) -> Option<OrderSource> {
        Some(match self.read_u8()? {
            0 => OrderSource::Shuffled,
            _ => OrderSource::Explicit,
        })
    }

    fn decode_highlight(&mut self) -> Option<RecordedNotice> {
        let reason = self.read_reason()?;
        let id = ItemId::new(self.read_str()?);
        Some(RecordedNotice::Highlighted { id, reason })
    }

    fn decode_page(&mut self) -> Option<RecordedNotice> {
        let from = self.read_count()?;
        let to = self.read_count()?;
        let id = ItemId::new(self.read_str()?);
        Some(RecordedNotice::Page { from, to, id })
    }

    fn decode_finished(&mut self) -> Option<RecordedNotice> {
        let answered = self.read_count()?;
        Some(RecordedNotice::Finished { answered })
    }

    fn decode_reset(&mut self) -> Option<RecordedNotice> {
        let reshuffled = self.read_bool()?;
        Some(RecordedNotice::Reset { reshuffled })
    }

    fn decode_order(&mut self) -> Option<RecordedNotice> {
        let len = self.read_count()?;
        let source = self.read_source()?;
        Some(RecordedNotice::Order { len, source })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedNotice;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_ENABLED => Some(RecordedNotice::Enabled),
            TAG_DISABLED => Some(RecordedNotice::Disabled),
            TAG_HIGHLIGHT => self.decode_highlight(),
            TAG_PAGE => self.decode_page(),
            TAG_FINISHED => self.decode_finished(),
            TAG_RESET => self.decode_reset(),
            TAG_ORDER => self.decode_order(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
