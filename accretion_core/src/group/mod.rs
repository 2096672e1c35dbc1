// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The choice group: storage, ordering, collection, and paging.
//!
//! A *group* is an ordered composite of items collected as one unit. Each
//! group has:
//!
//! - Storage ([`ChoiceGroup`]) — registered items in insertion slots, an
//!   id index, and a display-order permutation over the slots. Shuffles
//!   permute positions; slots and ids never move.
//! - **Registration** — [`set_items`](ChoiceGroup::set_items) /
//!   [`add_item`](ChoiceGroup::add_item) resolve specs, merge shared
//!   defaults, derive missing ids, reconcile requiredness, and reject
//!   duplicates without partial effects.
//! - **Collection** — [`collect`](ChoiceGroup::collect) sweeps items in
//!   display order into a [`GroupReport`] with completion, correctness, and
//!   first-offender flagging.
//! - **Paging** — [`advance`](ChoiceGroup::advance) /
//!   [`retreat`](ChoiceGroup::retreat) implement the one-item-at-a-time
//!   state machine: validation on the way forward, display-rule skipping in
//!   both directions, and a terminal finished latch.
//!
//! # Validation outcomes are data
//!
//! A blank required answer or a wrong choice never raises
//! [`GroupError`](crate::error::GroupError); it lands in [`GroupReport`]
//! flags or a [`Step::Held`] result. Errors are reserved for structural
//! problems caught at configuration and registration time.

mod collect;
mod order;
mod paging;
mod store;

pub use collect::{CollectOptions, GroupReport};
pub use paging::{HoldReason, Step};
pub use store::ChoiceGroup;
