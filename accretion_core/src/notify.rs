// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notices through which the embedding widget layer observes a group.
//!
//! This module provides a [`NoticeSink`] trait with per-notice methods that
//! group operations call as transitions become observable. All method bodies
//! default to no-ops, so implementing only the notices you care about is
//! fine.
//!
//! A group owns its sink for its whole lifetime; sinks are handed over at
//! construction via
//! [`ChoiceGroup::with_sink`](crate::group::ChoiceGroup::with_sink). Handing
//! ownership over (rather than letting observers subscribe to a live group)
//! keeps notice handlers from re-entering the group mid-operation.

use crate::item::ItemId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why an item was flagged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightReason {
    /// A required item has no usable answer yet.
    MissingRequired,
    /// The item judged its answer wrong.
    Incorrect,
}

/// What produced a new display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderSource {
    /// A random draw from the group's random source.
    Shuffled,
    /// A caller-supplied permutation.
    Explicit,
}

// ---------------------------------------------------------------------------
// Notice structs
// ---------------------------------------------------------------------------

/// Emitted when collection or paging flags an offender.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightEvent {
    /// The flagged item.
    pub id: ItemId,
    /// Why it was flagged.
    pub reason: HighlightReason,
}

/// Emitted when paging moves to a new display position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageEvent {
    /// Display position left behind.
    pub from: usize,
    /// Display position now active.
    pub to: usize,
    /// Item at the new position.
    pub id: ItemId,
}

/// Emitted when a paging pass completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinishEvent {
    /// How many items stored validated answers during the pass.
    pub answered: usize,
}

/// Emitted after a group-wide reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetEvent {
    /// Whether a fresh display order was drawn as part of the reset.
    pub reshuffled: bool,
}

/// Emitted when the display order changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderEvent {
    /// Number of display positions.
    pub len: usize,
    /// What produced the new order.
    pub source: OrderSource,
}

// ---------------------------------------------------------------------------
// NoticeSink trait
// ---------------------------------------------------------------------------

/// Receives notices from a group.
///
/// All methods have default no-op implementations, so you only need to
/// override the notices you care about.
pub trait NoticeSink {
    /// Called when the whole group becomes interactive again.
    fn on_enabled(&mut self) {}

    /// Called when the whole group stops being interactive.
    ///
    /// Emitted once per transition: repeated disables stay silent.
    fn on_disabled(&mut self) {}

    /// Called when an offender is flagged during collection or paging.
    fn on_highlighted(&mut self, e: &HighlightEvent) {
        _ = e;
    }

    /// Called when paging moves to a new position.
    fn on_page_changed(&mut self, e: &PageEvent) {
        _ = e;
    }

    /// Called when the paging pass completes.
    fn on_finished(&mut self, e: &FinishEvent) {
        _ = e;
    }

    /// Called after a group-wide reset.
    fn on_reset(&mut self, e: &ResetEvent) {
        _ = e;
    }

    /// Called when the display order changes.
    fn on_order_changed(&mut self, e: &OrderEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`NoticeSink`] that discards all notices.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl NoticeSink for NoopSink {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_accepts_every_notice() {
        let mut sink = NoopSink;
        sink.on_enabled();
        sink.on_disabled();
        sink.on_highlighted(&HighlightEvent {
            id: ItemId::new("echo_0"),
            reason: HighlightReason::MissingRequired,
        });
        sink.on_page_changed(&PageEvent {
            from: 0,
            to: 1,
            id: ItemId::new("echo_1"),
        });
        sink.on_finished(&FinishEvent { answered: 2 });
        sink.on_reset(&ResetEvent { reshuffled: false });
        sink.on_order_changed(&OrderEvent {
            len: 2,
            source: OrderSource::Shuffled,
        });
    }

    #[test]
    fn partial_implementations_compile() {
        struct HighlightsOnly {
            flagged: usize,
        }
        impl NoticeSink for HighlightsOnly {
            fn on_highlighted(&mut self, _e: &HighlightEvent) {
                self.flagged += 1;
            }
        }

        let mut sink = HighlightsOnly { flagged: 0 };
        sink.on_enabled();
        sink.on_highlighted(&HighlightEvent {
            id: ItemId::new("x"),
            reason: HighlightReason::Incorrect,
        });
        assert_eq!(sink.flagged, 1);
    }
}
