// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core composition, ordering, and paging state machine for choice-item groups.
//!
//! `accretion_core` aggregates a set of interactive *choice items* (pickers,
//! graded questions, free inputs) into one unit that is ordered, paged,
//! validated, and collected together. It is `no_std` compatible (with `alloc`)
//! and keeps every side effect behind an injected seam: randomness comes from
//! a caller-supplied [`RngCore`](rand::RngCore), presentation goes through the
//! [`Surface`] trait, and observable transitions are reported to a
//! [`NoticeSink`].
//!
//! # Architecture
//!
//! The crate is organized around a group that turns registration specs into
//! an ordered, collectable composite:
//!
//! ```text
//!   ItemSpec / ItemDescriptor ──► ItemRegistry::resolve()
//!                                       │
//!                                       ▼
//!   ChoiceGroup ◄── shuffle_order() ── order (display permutation)
//!        │                                  │
//!        │ collect()                        │ advance() / retreat()
//!        ▼                                  ▼
//!   GroupReport ──► messaging layer    Step + NoticeSink notices
//! ```
//!
//! **[`item`]** — The [`Item`] contract that members implement, plus stable
//! string ids, registration specs, and the kind-dispatch registry.
//!
//! **[`group`]** — The [`ChoiceGroup`] itself: registration with shared-option
//! merging, display-order control, report collection with first-offender
//! flagging, and the one-item-at-a-time paging state machine.
//!
//! **[`rules`]** — Conditional display rules that make paged items eligible
//! or skipped based on answers recorded so far.
//!
//! **[`notify`]** — The [`NoticeSink`] trait and notice payloads through
//! which the embedding widget layer observes enable/disable toggles,
//! highlights, page changes, resets, and completion.
//!
//! **[`surface`]** — The [`Surface`] placement seam that host presentations
//! implement to lay items out in display order.
//!
//! **[`config`]** — [`GroupConfig`] presets for all-at-once forms and
//! one-by-one steppers.
//!
//! **[`error`]** — [`GroupError`] for configuration and registration
//! failures. Runtime validation outcomes are data, not errors.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod error;
pub mod group;
pub mod item;
pub mod notify;
pub mod rules;
pub mod surface;

pub use config::{DisplayOrder, GroupConfig};
pub use error::GroupError;
pub use group::{ChoiceGroup, CollectOptions, GroupReport, HoldReason, Step};
pub use item::{
    Item, ItemDescriptor, ItemId, ItemRegistry, ItemSpec, ItemValues, QueryOptions, ResetOptions,
};
pub use notify::{NoopSink, NoticeSink};
pub use rules::{AnswerMap, DisplayRule, DisplayRules};
pub use surface::Surface;
