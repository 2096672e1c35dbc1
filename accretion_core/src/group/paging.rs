// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The one-item-at-a-time paging state machine.

use alloc::format;

use crate::error::GroupError;
use crate::group::ChoiceGroup;
use crate::item::QueryOptions;
use crate::notify::{FinishEvent, HighlightEvent, HighlightReason, PageEvent};

/// Why a paging step refused to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldReason {
    /// The current item consumed the step in its own internal sequence and
    /// is not yet ready to hand over. Retry after more interaction.
    NotReady,
    /// The current item failed validation: a required answer is blank, or
    /// an answer is incorrect.
    Incomplete,
    /// Already at the first position.
    AtStart,
}

/// The outcome of one paging step.
///
/// Refusals are ordinary outcomes, not errors; [`GroupError`] is reserved
/// for configuration problems discovered mid-step (a display-rule cycle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Moved between display positions.
    Moved {
        /// The position left behind.
        from: usize,
        /// The position landed on.
        to: usize,
    },
    /// Stayed in place.
    Held(HoldReason),
    /// The paging pass is complete; both directions are inert from here
    /// until a reset.
    Finished,
    /// Paging controls are inert: not in one-by-one mode, or no items.
    Inactive,
}

impl ChoiceGroup {
    /// Steps forward to the next eligible display position.
    ///
    /// The current item gets the first say through its
    /// [`next`](crate::item::Item::next) hook; consuming the step reports
    /// [`HoldReason::NotReady`]. The item is then validated as an attempt:
    /// a blank required answer or an incorrect one refuses the transition
    /// ([`HoldReason::Incomplete`]), flagging the item when the config
    /// highlights offenders. A validated answer lands in the partial
    /// results.
    ///
    /// From the last position the pass latches [`Step::Finished`] and
    /// [`collect`](Self::collect) serves the assembled partials from then
    /// on. Otherwise the search walks forward to the first position whose
    /// display rule passes against the partial answers, skipping the rest;
    /// running off the end also finishes the pass.
    ///
    /// # Errors
    ///
    /// [`GroupError::ConfigConflict`] when the search skips more positions
    /// than the configured cap, which points at a display-rule cycle.
    pub fn advance(&mut self) -> Result<Step, GroupError> {
        if !self.config.one_by_one || self.entries.is_empty() {
            return Ok(Step::Inactive);
        }
        if self.finished {
            return Ok(Step::Finished);
        }

        let from = self.current;
        let slot = self.order[from];
        if self.entries[slot].item.next() {
            return Ok(Step::Held(HoldReason::NotReady));
        }

        let entry = &mut self.entries[slot];
        if let Some(values) = entry.item.get_values(&QueryOptions::default()) {
            let blank_required = entry.required && values.is_blank();
            let incorrect = values.is_correct == Some(false);
            if blank_required || incorrect {
                if self.config.highlight_incomplete {
                    let reason = if blank_required {
                        HighlightReason::MissingRequired
                    } else {
                        HighlightReason::Incorrect
                    };
                    let id = entry.id.clone();
                    self.sink.on_highlighted(&HighlightEvent { id, reason });
                }
                return Ok(Step::Held(HoldReason::Incomplete));
            }
            self.partials.insert(entry.id.clone(), values);
        }

        if from + 1 == self.order.len() {
            self.finish();
            return Ok(Step::Finished);
        }

        let mut to = from + 1;
        let mut skipped: u32 = 0;
        loop {
            if to == self.order.len() {
                // Every remaining position was ruled out.
                self.finish();
                return Ok(Step::Finished);
            }
            let candidate = self.order[to];
            if self.rules.passes(&self.entries[candidate].id, &self.partials) {
                break;
            }
            skipped += 1;
            if skipped > self.config.skip_cap {
                return Err(GroupError::conflict(format!(
                    "display rules skipped {skipped} positions while advancing; assuming a cycle"
                )));
            }
            to += 1;
        }

        self.current = to;
        self.apply_paging_visibility();
        let id = self.entries[self.order[to]].id.clone();
        self.sink.on_page_changed(&PageEvent { from, to, id });
        Ok(Step::Moved { from, to })
    }

    /// Steps back to the previous eligible display position.
    ///
    /// Symmetric to [`advance`](Self::advance): the current item's
    /// [`prev`](crate::item::Item::prev) hook may consume the step, and the
    /// backward search skips rule-failing positions under the same cap. The
    /// item being left is never validated, and its partial answer stays
    /// put. From the first position (or when everything before is ruled
    /// out) the step holds with [`HoldReason::AtStart`].
    ///
    /// # Errors
    ///
    /// [`GroupError::ConfigConflict`] when the search skips more positions
    /// than the configured cap.
    pub fn retreat(&mut self) -> Result<Step, GroupError> {
        if !self.config.one_by_one || self.entries.is_empty() {
            return Ok(Step::Inactive);
        }
        if self.finished {
            return Ok(Step::Finished);
        }

        let from = self.current;
        let slot = self.order[from];
        if self.entries[slot].item.prev() {
            return Ok(Step::Held(HoldReason::NotReady));
        }
        if from == 0 {
            return Ok(Step::Held(HoldReason::AtStart));
        }

        let mut to = from;
        let mut skipped: u32 = 0;
        loop {
            if to == 0 {
                return Ok(Step::Held(HoldReason::AtStart));
            }
            to -= 1;
            let candidate = self.order[to];
            if self.rules.passes(&self.entries[candidate].id, &self.partials) {
                break;
            }
            skipped += 1;
            if skipped > self.config.skip_cap {
                return Err(GroupError::conflict(format!(
                    "display rules skipped {skipped} positions while retreating; assuming a cycle"
                )));
            }
        }

        self.current = to;
        self.apply_paging_visibility();
        let id = self.entries[self.order[to]].id.clone();
        self.sink.on_page_changed(&PageEvent { from, to, id });
        Ok(Step::Moved { from, to })
    }

    /// Latches the finished state and announces it.
    fn finish(&mut self) {
        self.finished = true;
        self.sink.on_finished(&FinishEvent {
            answered: self.partials.len(),
        });
    }
}
