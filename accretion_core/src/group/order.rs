// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-order operations: shuffling and explicit permutations.

use alloc::format;
use alloc::vec::Vec;

use rand::seq::SliceRandom;

use crate::error::GroupError;
use crate::group::ChoiceGroup;
use crate::notify::{OrderEvent, OrderSource};

impl ChoiceGroup {
    /// Draws a fresh random display permutation.
    ///
    /// A Fisher–Yates shuffle over the display order, driven by the random
    /// source attached at construction; with a seeded source the same seed
    /// and item count reproduce the same permutation. Item storage never
    /// moves, the permutation is the sole display authority. Emits an
    /// order-changed notice and, under paging, re-establishes
    /// show-current/hide-rest.
    ///
    /// # Errors
    ///
    /// [`GroupError::InvalidInput`] when no random source is attached.
    pub fn shuffle_order(&mut self) -> Result<(), GroupError> {
        if self.rng.is_none() {
            return Err(GroupError::invalid("shuffling requires a random source"));
        }
        self.shuffle_in_place();
        self.apply_paging_visibility();
        Ok(())
    }

    /// Installs an explicit display permutation.
    ///
    /// Covers order sources that hand out whole permutations instead of
    /// random draws. `perm[position]` names the entry slot shown at
    /// `position`; it must be a permutation of `[0, n)` for the current
    /// item count.
    ///
    /// # Errors
    ///
    /// [`GroupError::InvalidInput`] when `perm` has the wrong length,
    /// repeats a slot, or references a slot out of range. The current
    /// order is left unchanged on error.
    pub fn set_order(&mut self, perm: Vec<usize>) -> Result<(), GroupError> {
        if perm.len() != self.entries.len() {
            return Err(GroupError::invalid(format!(
                "permutation length {} does not match item count {}",
                perm.len(),
                self.entries.len()
            )));
        }
        let mut seen = Vec::new();
        seen.resize(perm.len(), false);
        for &slot in &perm {
            if slot >= perm.len() {
                return Err(GroupError::invalid(format!(
                    "display order references slot {slot} out of range"
                )));
            }
            if seen[slot] {
                return Err(GroupError::invalid(format!(
                    "display order repeats slot {slot}"
                )));
            }
            seen[slot] = true;
        }

        self.order = perm;
        self.sink.on_order_changed(&OrderEvent {
            len: self.order.len(),
            source: OrderSource::Explicit,
        });
        self.apply_paging_visibility();
        Ok(())
    }

    /// Shuffles without the attachment check; a no-op when no random
    /// source is present. Callers verify the source exists first.
    pub(crate) fn shuffle_in_place(&mut self) {
        let Some(rng) = self.rng.as_deref_mut() else {
            return;
        };
        self.order.shuffle(rng);
        self.sink.on_order_changed(&OrderEvent {
            len: self.order.len(),
            source: OrderSource::Shuffled,
        });
    }
}
