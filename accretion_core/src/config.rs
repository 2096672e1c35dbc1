// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group configuration and presentation presets.

use alloc::string::String;

use serde_json::{Map, Value};

/// Default bound on rule-skipped positions per paging transition.
///
/// A transition that skips more than this many consecutive positions is
/// assumed to be stuck in a display-rule cycle and fails with
/// [`GroupError::ConfigConflict`](crate::error::GroupError::ConfigConflict).
pub const DEFAULT_SKIP_CAP: u32 = 500;

/// How display positions relate to registration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayOrder {
    /// Registration order (the identity permutation).
    #[default]
    Insertion,
    /// A random permutation, drawn at registration from the group's random
    /// source and redrawable on request.
    Shuffled,
}

/// Tunable behavior of a [`ChoiceGroup`](crate::group::ChoiceGroup).
///
/// Two presets cover the common shapes: [`form`](Self::form) presents every
/// item at once, [`stepper`](Self::stepper) pages through items one at a
/// time. Individual fields can be adjusted after picking a preset.
#[derive(Clone, Debug)]
pub struct GroupConfig {
    /// Page one item at a time instead of presenting all at once.
    pub one_by_one: bool,
    /// Display-order policy applied at registration.
    pub order: DisplayOrder,
    /// Overrides derived requiredness when set.
    ///
    /// `None` derives the group's requiredness from its items. `Some(false)`
    /// combined with items that declare required answers is rejected at
    /// registration as a configuration conflict.
    pub required: Option<bool>,
    /// Flatten collected reports into plain JSON maps by default.
    pub simplify: bool,
    /// Count collection sweeps as solution attempts by default.
    pub mark_attempt: bool,
    /// Flag incomplete or incorrect offenders during collection by default.
    pub highlight_incomplete: bool,
    /// Bound on rule-skipped positions per paging transition.
    pub skip_cap: u32,
    /// Options merged into every descriptor that does not set them itself.
    ///
    /// The reserved kind-dispatch key may not appear here; registration
    /// rejects it.
    pub shared_defaults: Map<String, Value>,
}

impl GroupConfig {
    /// All-at-once form presentation.
    ///
    /// Every item is visible together; [`collect`](crate::group::ChoiceGroup::collect)
    /// sweeps them all in display order.
    #[must_use]
    pub fn form() -> Self {
        Self {
            one_by_one: false,
            order: DisplayOrder::Insertion,
            required: None,
            simplify: false,
            mark_attempt: true,
            highlight_incomplete: true,
            skip_cap: DEFAULT_SKIP_CAP,
            shared_defaults: Map::new(),
        }
    }

    /// One-item-at-a-time stepper presentation.
    ///
    /// Exactly one item is active; [`advance`](crate::group::ChoiceGroup::advance)
    /// and [`retreat`](crate::group::ChoiceGroup::retreat) move through the
    /// display order, validating on the way forward.
    #[must_use]
    pub fn stepper() -> Self {
        Self {
            one_by_one: true,
            ..Self::form()
        }
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self::form()
    }
}
