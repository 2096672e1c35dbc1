// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Items and their registration machinery.
//!
//! An *item* is one interactive member of a group. Each item has:
//!
//! - An identity ([`ItemId`]) — a stable string handle that survives
//!   reordering. When a registration omits the id, the group derives one
//!   from the item kind and registration position (`"echo_3"`).
//! - The behavioral contract ([`Item`]) — value queries, programmatic fill,
//!   reset, visibility and interactivity toggles, and optional internal
//!   paging hooks. Items own their interaction state; the group only
//!   sequences, aggregates, and toggles them.
//! - A way in ([`ItemSpec`]) — either an already-built value or a declarative
//!   [`ItemDescriptor`] resolved by kind against an [`ItemRegistry`].
//!
//! Descriptor options pass through [`merge_defaults`] before construction, so
//! group-wide shared options reach every item that does not override them.

mod contract;
mod id;
mod registry;
mod spec;

pub use contract::{Item, ItemValues, QueryOptions, ResetOptions};
pub use id::ItemId;
pub use registry::{ItemConstructor, ItemRegistry};
pub use spec::{BuiltItem, ItemDescriptor, ItemSpec, KIND_KEY, merge_defaults};

pub(crate) use spec::{declares_required, reject_reserved};
