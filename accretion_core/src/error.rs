// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for group configuration and registration.
//!
//! Only structural problems surface as [`GroupError`]: malformed input,
//! colliding ids, contradictory configuration, and unknown item kinds. An
//! empty required answer or a wrong choice is an expected runtime outcome and
//! travels as data instead, in [`GroupReport`](crate::group::GroupReport)
//! flags and [`Step`](crate::group::Step) variants.

use alloc::string::String;

use thiserror::Error;

use crate::item::ItemId;

/// An error from group configuration or registration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    /// An argument was structurally invalid: an empty spec sequence, a
    /// non-permutation order, a reserved option key, or a missing random
    /// source.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// An item id was already registered. The group is left unchanged.
    #[error("duplicate item id `{id}`")]
    DuplicateId {
        /// The colliding id.
        id: ItemId,
    },

    /// Two configuration directives contradict each other, or display rules
    /// skipped more positions than the configured cap allows.
    #[error("configuration conflict: {reason}")]
    ConfigConflict {
        /// Which directives disagree.
        reason: String,
    },

    /// A descriptor named an item kind with no registered constructor.
    #[error("no constructor registered for item kind `{kind}`")]
    MissingCapability {
        /// The unknown kind name.
        kind: String,
    },
}

impl GroupError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn conflict(reason: impl Into<String>) -> Self {
        Self::ConfigConflict {
            reason: reason.into(),
        }
    }
}
