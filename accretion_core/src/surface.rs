// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface contract for host presentations.
//!
//! A group never renders anything itself. The embedding layer provides the
//! visuals and implements [`Surface`] so the group can lay items out in
//! display order. Host work splits into the following pieces:
//!
//! - **Placement** — Implements the [`Surface`] trait to receive one
//!   `(position, id)` placement per registered item whenever
//!   [`ChoiceGroup::attach`] runs.
//!
//! - **Notices** — Implements [`NoticeSink`](crate::notify::NoticeSink) to
//!   react to enable/disable toggles, highlights, and page changes. Notices
//!   are the *dynamic* channel; `Surface` is the *layout* channel.
//!
//! - **Items** — The interactive members themselves implement
//!   [`Item`](crate::item::Item) and manage their own presentation state.
//!
//! # Wiring pseudocode
//!
//! A typical host wires the pieces together like this:
//!
//! ```rust,ignore
//! fn build_page(registry: &ItemRegistry, specs: Vec<ItemSpec>) -> ChoiceGroup {
//!     let mut group = ChoiceGroup::new(GroupConfig::stepper())
//!         .with_sink(Box::new(page_notices))
//!         .with_rng(Box::new(session_rng));
//!     group.set_items(registry, specs)?;
//!
//!     // Lay out: one placement per item, in display order.
//!     group.attach(&mut dom_surface);
//!     group
//! }
//! ```
//!
//! [`ChoiceGroup::attach`]: crate::group::ChoiceGroup::attach

use crate::item::ItemId;

/// Receives display placements from a group.
///
/// [`ChoiceGroup::attach`](crate::group::ChoiceGroup::attach) calls
/// [`place`](Self::place) once per display position, in display order.
/// Re-attach after a shuffle or an explicit reorder to pick up the new
/// permutation; implementations decide whether that moves existing widgets
/// or rebuilds the layout.
pub trait Surface {
    /// Places `id` at display `position`.
    fn place(&mut self, position: usize, id: &ItemId);
}
