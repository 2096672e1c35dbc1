// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item storage, registration, and group-wide lifecycle control.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use rand::RngCore;
use serde_json::Value;

use crate::config::{DisplayOrder, GroupConfig};
use crate::error::GroupError;
use crate::item::{
    Item, ItemDescriptor, ItemId, ItemRegistry, ItemSpec, ResetOptions, declares_required,
    merge_defaults, reject_reserved,
};
use crate::notify::{NoopSink, NoticeSink, ResetEvent};
use crate::rules::{AnswerMap, DisplayRules};
use crate::surface::Surface;

// ---------------------------------------------------------------------------
// Storage

/// One registered item and its registration metadata.
pub(crate) struct Entry {
    /// Stable handle, unique within the group.
    pub(crate) id: ItemId,
    /// Whether this item must report a non-empty answer.
    pub(crate) required: bool,
    /// The item itself.
    pub(crate) item: Box<dyn Item>,
}

/// An ordered composite of answerable items, collected as one unit.
///
/// Items live in insertion slots that never move; a display permutation
/// ([`order`](Self::order)) decides the sequence they are presented and
/// collected in. The group tracks an id index, group-level required and
/// disabled flags, and (in one-by-one mode) the paging cursor plus the
/// partial results gathered so far.
///
/// Construction is builder-style: [`new`](Self::new) takes the config,
/// [`with_sink`](Self::with_sink), [`with_rng`](Self::with_rng), and
/// [`with_rules`](Self::with_rules) attach the collaborators. The sink and
/// random source are owned by the group, so observers cannot call back into
/// it mid-operation.
pub struct ChoiceGroup {
    pub(crate) config: GroupConfig,
    pub(crate) entries: Vec<Entry>,
    pub(crate) index: BTreeMap<ItemId, usize>,
    /// Display permutation over entry slots. Invariant: a permutation of
    /// `[0, n)` whenever `entries` has `n` elements.
    pub(crate) order: Vec<usize>,
    pub(crate) rules: DisplayRules,
    pub(crate) sink: Box<dyn NoticeSink>,
    pub(crate) rng: Option<Box<dyn RngCore>>,
    pub(crate) disabled: bool,
    pub(crate) required: bool,
    /// Paging cursor, a display position. Always `0` outside one-by-one mode.
    pub(crate) current: usize,
    pub(crate) finished: bool,
    /// Validated answers gathered while paging, keyed by item id.
    pub(crate) partials: AnswerMap,
}

impl fmt::Debug for ChoiceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceGroup")
            .field("config", &self.config)
            .field("len", &self.entries.len())
            .field("order", &self.order)
            .field("disabled", &self.disabled)
            .field("required", &self.required)
            .field("current", &self.current)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl ChoiceGroup {
    // -- Construction --

    /// Creates an empty group with the given configuration.
    ///
    /// Notices go to a [`NoopSink`] and no random source is attached; use
    /// the `with_*` builders to change either.
    #[must_use]
    pub fn new(config: GroupConfig) -> Self {
        let required = config.required.unwrap_or(false);
        Self {
            config,
            entries: Vec::new(),
            index: BTreeMap::new(),
            order: Vec::new(),
            rules: DisplayRules::default(),
            sink: Box::new(NoopSink),
            rng: None,
            disabled: false,
            required,
            current: 0,
            finished: false,
            partials: AnswerMap::new(),
        }
    }

    /// Replaces the notice sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn NoticeSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Attaches the random source used for shuffled ordering.
    #[must_use]
    pub fn with_rng(mut self, rng: Box<dyn RngCore>) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Installs the conditional-display rules consulted while paging.
    #[must_use]
    pub fn with_rules(mut self, rules: DisplayRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replaces the random source.
    ///
    /// Re-seeding before a repeated registration reproduces a recorded
    /// session's permutation on replay.
    pub fn set_rng(&mut self, rng: Box<dyn RngCore>) {
        self.rng = Some(rng);
    }

    // -- Registration --

    /// Replaces the group's items with `specs`, in registration order.
    ///
    /// Descriptors are resolved through `registry` after merging the
    /// config's shared defaults into their options (explicit keys win).
    /// Missing ids derive as `<kind>_<position>`. Registration is
    /// all-or-nothing: on any error the previous items remain untouched.
    ///
    /// Afterwards the display order is the identity permutation, reshuffled
    /// immediately when the config asks for
    /// [`DisplayOrder::Shuffled`]. Paging state and partial results reset.
    ///
    /// # Errors
    ///
    /// - [`GroupError::InvalidInput`] for an empty `specs`, a reserved key
    ///   in the shared defaults or descriptor options, or shuffled order
    ///   without a random source.
    /// - [`GroupError::MissingCapability`] for a descriptor kind `registry`
    ///   does not know.
    /// - [`GroupError::DuplicateId`] when two specs resolve to the same id.
    /// - [`GroupError::ConfigConflict`] when an item declares a required
    ///   answer but the config overrides `required` to `false`.
    pub fn set_items(
        &mut self,
        registry: &ItemRegistry,
        specs: Vec<ItemSpec>,
    ) -> Result<(), GroupError> {
        if specs.is_empty() {
            return Err(GroupError::invalid("no item specs to register"));
        }
        reject_reserved(&self.config.shared_defaults, "shared defaults")?;
        if self.config.order == DisplayOrder::Shuffled && self.rng.is_none() {
            return Err(GroupError::invalid("shuffled order requires a random source"));
        }

        // Stage everything before touching group state, so a failing spec
        // leaves the previous registration in place.
        let mut staged: Vec<Entry> = Vec::with_capacity(specs.len());
        let mut index: BTreeMap<ItemId, usize> = BTreeMap::new();
        let mut any_required = false;
        for (position, spec) in specs.into_iter().enumerate() {
            let entry = resolve_spec(registry, &self.config, spec, position)?;
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(GroupError::DuplicateId { id: entry.id });
            }
            any_required |= entry.required;
            staged.push(entry);
        }
        if any_required && self.config.required == Some(false) {
            return Err(GroupError::conflict(
                "items declare required answers but the group overrides required to false",
            ));
        }

        self.entries = staged;
        self.index = index;
        self.required = self.config.required.unwrap_or(any_required);
        self.order = (0..self.entries.len()).collect();
        self.partials.clear();
        self.current = 0;
        self.finished = false;
        if self.disabled {
            for entry in &mut self.entries {
                entry.item.disable();
            }
        }
        if self.config.order == DisplayOrder::Shuffled {
            self.shuffle_in_place();
        }
        self.apply_paging_visibility();
        Ok(())
    }

    /// Replaces the group's items with the specs a producer yields.
    ///
    /// Covers deferred registration, where the item set depends on context
    /// known only at call time. Same rules and errors as
    /// [`set_items`](Self::set_items).
    ///
    /// # Errors
    ///
    /// See [`set_items`](Self::set_items).
    pub fn set_items_with<F>(
        &mut self,
        registry: &ItemRegistry,
        produce: F,
    ) -> Result<(), GroupError>
    where
        F: FnOnce() -> Vec<ItemSpec>,
    {
        self.set_items(registry, produce())
    }

    /// Registers one more item at the end of the display order.
    ///
    /// Same resolution rules as [`set_items`](Self::set_items); the id
    /// position for derivation is the current item count. Returns the
    /// registered id.
    ///
    /// # Errors
    ///
    /// See [`set_items`](Self::set_items); an empty-input error cannot
    /// occur here.
    pub fn add_item(
        &mut self,
        registry: &ItemRegistry,
        spec: ItemSpec,
    ) -> Result<ItemId, GroupError> {
        reject_reserved(&self.config.shared_defaults, "shared defaults")?;
        let position = self.entries.len();
        let mut entry = resolve_spec(registry, &self.config, spec, position)?;
        if self.index.contains_key(&entry.id) {
            return Err(GroupError::DuplicateId { id: entry.id });
        }
        if entry.required && self.config.required == Some(false) {
            return Err(GroupError::conflict(
                "items declare required answers but the group overrides required to false",
            ));
        }
        if self.config.required.is_none() {
            self.required |= entry.required;
        }
        if self.disabled {
            entry.item.disable();
        }
        let id = entry.id.clone();
        self.index.insert(id.clone(), position);
        self.entries.push(entry);
        self.order.push(position);
        self.apply_paging_visibility();
        Ok(id)
    }

    // -- Lifecycle control --

    /// Disables the group and every item in it.
    ///
    /// Idempotent; emits a single disabled notice on the effective
    /// transition and none when already disabled.
    pub fn disable_all(&mut self) {
        if self.disabled {
            return;
        }
        self.disabled = true;
        for entry in &mut self.entries {
            entry.item.disable();
        }
        self.sink.on_disabled();
    }

    /// Enables the group and every item in it.
    ///
    /// Idempotent; emits a single enabled notice on the effective
    /// transition. Under paging only the active item ends up interactive,
    /// the rest stay hidden and disabled.
    pub fn enable_all(&mut self) {
        if !self.disabled {
            return;
        }
        self.disabled = false;
        for entry in &mut self.entries {
            entry.item.enable();
        }
        self.sink.on_enabled();
        self.apply_paging_visibility();
    }

    /// Resets every item, the gathered partial results, and the finished
    /// latch.
    ///
    /// The display order is left alone unless `opts.reshuffle` asks for a
    /// fresh permutation. In paging mode the cursor returns to the first
    /// position and only that item is re-activated.
    ///
    /// # Errors
    ///
    /// [`GroupError::InvalidInput`] when `opts.reshuffle` is set but no
    /// random source is attached; the group is left unchanged.
    pub fn reset_all(&mut self, opts: &ResetOptions) -> Result<(), GroupError> {
        if opts.reshuffle && self.rng.is_none() {
            return Err(GroupError::invalid("reshuffling requires a random source"));
        }
        for entry in &mut self.entries {
            entry.item.reset(opts);
        }
        self.partials.clear();
        self.finished = false;
        if self.config.one_by_one {
            self.current = 0;
        }
        if opts.reshuffle {
            self.shuffle_in_place();
        }
        self.apply_paging_visibility();
        self.sink.on_reset(&ResetEvent {
            reshuffled: opts.reshuffle,
        });
        Ok(())
    }

    /// Forwards per-id values to the matching items.
    ///
    /// The round-trip companion to [`collect`](Self::collect): feeding a
    /// report's choices back restores the answers. Ids the group does not
    /// know are ignored, so a stored session can be replayed against a
    /// group whose item set has since shrunk.
    pub fn set_values(&mut self, values: &BTreeMap<ItemId, Value>) {
        for (id, value) in values {
            if let Some(&slot) = self.index.get(id) {
                self.entries[slot].item.set_values(value);
            }
        }
    }

    // -- Introspection --

    /// Number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an item with this id is registered.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    /// Whether the group as a whole must be completed.
    ///
    /// True when any registered item is required, unless the config set an
    /// explicit override.
    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    /// Whether the group is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether a paging pass has run to completion.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The display permutation: `order()[position]` is the entry slot shown
    /// at `position`.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The active display position, when paging through a non-empty group.
    #[must_use]
    pub fn current_position(&self) -> Option<usize> {
        (self.config.one_by_one && !self.entries.is_empty()).then_some(self.current)
    }

    /// Item ids in display order.
    #[must_use]
    pub fn display_ids(&self) -> Vec<ItemId> {
        self.order
            .iter()
            .map(|&slot| self.entries[slot].id.clone())
            .collect()
    }

    /// Ids of the currently visible items, in display order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<ItemId> {
        self.order
            .iter()
            .map(|&slot| &self.entries[slot])
            .filter(|entry| !entry.item.is_hidden())
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// The validated answers gathered so far while paging.
    #[must_use]
    pub fn partial_results(&self) -> &AnswerMap {
        &self.partials
    }

    /// Borrows a registered item.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&dyn Item> {
        let slot = *self.index.get(id)?;
        Some(self.entries[slot].item.as_ref())
    }

    /// Mutably borrows a registered item.
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut dyn Item> {
        let slot = *self.index.get(id)?;
        Some(self.entries[slot].item.as_mut())
    }

    /// The configuration the group was built with.
    #[must_use]
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    // -- Attachment --

    /// Realizes the group onto a rendering surface.
    ///
    /// Calls [`Surface::place`] once per item, walking display positions in
    /// order. The surface decides what placement means; the group never
    /// inspects visual state beyond the [`Item`] show/hide contract.
    pub fn attach(&self, surface: &mut dyn Surface) {
        for (position, &slot) in self.order.iter().enumerate() {
            surface.place(position, &self.entries[slot].id);
        }
    }

    // -- Paging visibility --

    /// Re-establishes show-current/hide-rest under one-by-one mode.
    ///
    /// A no-op outside paging mode or on an empty group. Idempotent, so
    /// callers re-apply it after any operation that may have moved the
    /// cursor, changed the order, or toggled items.
    pub(crate) fn apply_paging_visibility(&mut self) {
        if !self.config.one_by_one || self.entries.is_empty() {
            return;
        }
        let active = self.order[self.current];
        for (slot, entry) in self.entries.iter_mut().enumerate() {
            if slot == active {
                entry.item.show();
                if !self.disabled {
                    entry.item.enable();
                }
            } else {
                entry.item.hide();
                entry.item.disable();
            }
        }
    }
}

/// Resolves one spec into a storable entry.
///
/// `position` feeds id derivation for specs without an explicit id.
fn resolve_spec(
    registry: &ItemRegistry,
    config: &GroupConfig,
    spec: ItemSpec,
    position: usize,
) -> Result<Entry, GroupError> {
    match spec {
        ItemSpec::Built(built) => {
            let id = built
                .id
                .unwrap_or_else(|| ItemId::derived("item", position));
            Ok(Entry {
                id,
                required: built.required,
                item: built.item,
            })
        }
        ItemSpec::Descriptor(descriptor) => {
            reject_reserved(&descriptor.options, "item options")?;
            let merged = merge_defaults(&descriptor.options, &config.shared_defaults);
            let required = declares_required(&descriptor, &merged);
            let resolved = ItemDescriptor {
                options: merged,
                ..descriptor
            };
            let item = registry.resolve(&resolved)?;
            let id = resolved
                .id
                .clone()
                .unwrap_or_else(|| ItemId::derived(&resolved.kind, position));
            Ok(Entry { id, required, item })
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use serde_json::json;

    use super::*;
    use crate::group::fixtures::{
        Notice, RecordingSink, TestItem, built, built_as, no_registry, test_registry,
    };
    use crate::item::QueryOptions;

    struct PlacementLog {
        placed: Vec<(usize, ItemId)>,
    }

    impl Surface for PlacementLog {
        fn place(&mut self, position: usize, id: &ItemId) {
            self.placed.push((position, id.clone()));
        }
    }

    #[test]
    fn registers_built_items_with_derived_ids() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(
                &no_registry(),
                vec![built(TestItem::blank()), built(TestItem::blank())],
            )
            .unwrap();
        assert_eq!(group.len(), 2);
        assert!(group.contains(&ItemId::from("item_0")));
        assert!(group.contains(&ItemId::from("item_1")));
        assert_eq!(group.order(), &[0, 1]);
    }

    #[test]
    fn explicit_ids_win_over_derivation() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(
                &no_registry(),
                vec![
                    built_as("color", TestItem::blank()),
                    built(TestItem::blank()),
                ],
            )
            .unwrap();
        assert!(group.contains(&ItemId::from("color")));
        assert!(group.contains(&ItemId::from("item_1")));
    }

    #[test]
    fn descriptors_resolve_through_the_registry() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(
                &test_registry(),
                vec![
                    ItemDescriptor::new("test").into(),
                    ItemDescriptor::new("test").with_id("named").into(),
                ],
            )
            .unwrap();
        assert!(group.contains(&ItemId::from("test_0")));
        assert!(group.contains(&ItemId::from("named")));
    }

    #[test]
    fn unknown_kind_is_a_missing_capability() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        let err = group
            .set_items(
                &test_registry(),
                vec![ItemDescriptor::new("slider").into()],
            )
            .unwrap_err();
        assert_eq!(
            err,
            GroupError::MissingCapability {
                kind: "slider".into()
            }
        );
    }

    #[test]
    fn empty_registration_is_invalid() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        let err = group.set_items(&no_registry(), Vec::new()).unwrap_err();
        assert!(matches!(err, GroupError::InvalidInput { .. }));
    }

    #[test]
    fn duplicate_ids_leave_the_group_unchanged() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(
                &no_registry(),
                vec![
                    built_as("a", TestItem::blank()),
                    built_as("b", TestItem::blank()),
                ],
            )
            .unwrap();

        let err = group
            .set_items(
                &no_registry(),
                vec![
                    built_as("c", TestItem::blank()),
                    built_as("c", TestItem::blank()),
                ],
            )
            .unwrap_err();
        assert_eq!(err, GroupError::DuplicateId { id: "c".into() });

        // The failed replacement kept the previous registration intact.
        assert_eq!(group.len(), 2);
        assert!(group.contains(&ItemId::from("a")));
        assert!(!group.contains(&ItemId::from("c")));
    }

    #[test]
    fn reserved_key_is_rejected_everywhere() {
        let mut config = GroupConfig::form();
        config.shared_defaults.insert("kind".into(), json!("test"));
        let mut group = ChoiceGroup::new(config);
        let err = group
            .set_items(&test_registry(), vec![built(TestItem::blank())])
            .unwrap_err();
        assert!(matches!(err, GroupError::InvalidInput { .. }));

        let mut group = ChoiceGroup::new(GroupConfig::form());
        let err = group
            .set_items(
                &test_registry(),
                vec![
                    ItemDescriptor::new("test")
                        .with_option("kind", json!("other"))
                        .into(),
                ],
            )
            .unwrap_err();
        assert!(matches!(err, GroupError::InvalidInput { .. }));
    }

    #[test]
    fn shared_defaults_reach_descriptors() {
        let mut config = GroupConfig::form();
        config
            .shared_defaults
            .insert("requiredChoice".into(), json!(true));
        let mut group = ChoiceGroup::new(config);
        group
            .set_items(
                &test_registry(),
                vec![ItemDescriptor::new("test").into()],
            )
            .unwrap();
        assert!(group.required(), "shared default should mark the item required");
    }

    #[test]
    fn required_override_false_conflicts_with_required_items() {
        let mut config = GroupConfig::form();
        config.required = Some(false);
        let mut group = ChoiceGroup::new(config);
        let err = group
            .set_items(
                &no_registry(),
                vec![built(TestItem::blank()).required()],
            )
            .unwrap_err();
        assert!(matches!(err, GroupError::ConfigConflict { .. }));
        assert!(group.is_empty());
    }

    #[test]
    fn required_follows_the_items() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(&no_registry(), vec![built(TestItem::blank())])
            .unwrap();
        assert!(!group.required());

        group
            .set_items(
                &no_registry(),
                vec![
                    built(TestItem::blank()),
                    built(TestItem::blank()).required(),
                ],
            )
            .unwrap();
        assert!(group.required());
    }

    #[test]
    fn explicit_required_true_needs_no_required_items() {
        let mut config = GroupConfig::form();
        config.required = Some(true);
        let mut group = ChoiceGroup::new(config);
        group
            .set_items(&no_registry(), vec![built(TestItem::blank())])
            .unwrap();
        assert!(group.required());
    }

    #[test]
    fn disable_and_enable_notify_once_per_transition() {
        let (sink, log) = RecordingSink::new();
        let mut group = ChoiceGroup::new(GroupConfig::form()).with_sink(sink);
        group
            .set_items(&no_registry(), vec![built(TestItem::blank())])
            .unwrap();

        group.disable_all();
        group.disable_all();
        group.enable_all();
        group.enable_all();

        assert_eq!(*log.borrow(), vec![Notice::Disabled, Notice::Enabled]);
        assert!(!group.is_disabled());
    }

    #[test]
    fn disabled_group_disables_fresh_registrations() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group.disable_all();
        group
            .set_items(&no_registry(), vec![built_as("q", TestItem::blank())])
            .unwrap();
        assert!(group.item(&"q".into()).unwrap().is_disabled());
    }

    #[test]
    fn reset_clears_answers_and_notifies() {
        let (sink, log) = RecordingSink::new();
        let mut group = ChoiceGroup::new(GroupConfig::form()).with_sink(sink);
        group
            .set_items(
                &no_registry(),
                vec![built_as("q", TestItem::answered(json!("yes")))],
            )
            .unwrap();

        group.reset_all(&ResetOptions::default()).unwrap();

        let values = group
            .item_mut(&"q".into())
            .unwrap()
            .get_values(&QueryOptions::passive())
            .unwrap();
        assert!(values.is_blank());
        assert_eq!(*log.borrow(), vec![Notice::Reset(false)]);
    }

    #[test]
    fn reshuffle_without_a_random_source_is_invalid() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(&no_registry(), vec![built(TestItem::blank())])
            .unwrap();
        let err = group.reset_all(&ResetOptions::reshuffled()).unwrap_err();
        assert!(matches!(err, GroupError::InvalidInput { .. }));
    }

    #[test]
    fn shuffled_config_without_a_random_source_is_invalid() {
        let mut config = GroupConfig::form();
        config.order = DisplayOrder::Shuffled;
        let mut group = ChoiceGroup::new(config);
        let err = group
            .set_items(&no_registry(), vec![built(TestItem::blank())])
            .unwrap_err();
        assert!(matches!(err, GroupError::InvalidInput { .. }));
    }

    #[test]
    fn set_values_round_trips_and_ignores_unknown_ids() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(
                &no_registry(),
                vec![built_as("q1", TestItem::blank())],
            )
            .unwrap();

        let mut values = BTreeMap::new();
        values.insert(ItemId::from("q1"), json!(7));
        values.insert(ItemId::from("ghost"), json!("ignored"));
        group.set_values(&values);

        let report = group
            .item_mut(&"q1".into())
            .unwrap()
            .get_values(&QueryOptions::passive())
            .unwrap();
        assert_eq!(report.choice, Some(json!(7)));
    }

    #[test]
    fn add_item_appends_under_the_same_rules() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(&no_registry(), vec![built_as("a", TestItem::blank())])
            .unwrap();

        let id = group
            .add_item(&test_registry(), ItemDescriptor::new("test").into())
            .unwrap();
        assert_eq!(id, ItemId::from("test_1"));
        assert_eq!(group.order(), &[0, 1]);

        let err = group
            .add_item(&no_registry(), built_as("a", TestItem::blank()))
            .unwrap_err();
        assert_eq!(err, GroupError::DuplicateId { id: "a".into() });
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn add_item_extends_derived_required() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(&no_registry(), vec![built(TestItem::blank())])
            .unwrap();
        assert!(!group.required());
        group
            .add_item(&no_registry(), built(TestItem::blank()).required())
            .unwrap();
        assert!(group.required());
    }

    #[test]
    fn attach_places_every_item_in_display_order() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(
                &no_registry(),
                vec![
                    built_as("first", TestItem::blank()),
                    built_as("second", TestItem::blank()),
                ],
            )
            .unwrap();

        let mut surface = PlacementLog { placed: Vec::new() };
        group.attach(&mut surface);
        assert_eq!(
            surface.placed,
            vec![(0, ItemId::from("first")), (1, ItemId::from("second"))]
        );
    }

    #[test]
    fn paging_activates_only_the_first_item() {
        let mut group = ChoiceGroup::new(GroupConfig::stepper());
        group
            .set_items(
                &no_registry(),
                vec![
                    built_as("a", TestItem::blank()),
                    built_as("b", TestItem::blank()),
                    built_as("c", TestItem::blank()),
                ],
            )
            .unwrap();

        assert_eq!(group.current_position(), Some(0));
        assert_eq!(group.visible_items(), vec![ItemId::from("a")]);
        assert!(group.item(&"b".into()).unwrap().is_hidden());
        assert!(group.item(&"b".into()).unwrap().is_disabled());
    }

    #[test]
    fn producer_registration_matches_direct() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items_with(&no_registry(), || {
                vec![built(TestItem::blank()), built(TestItem::blank())]
            })
            .unwrap();
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn current_position_is_paging_only() {
        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(&no_registry(), vec![built(TestItem::blank())])
            .unwrap();
        assert_eq!(group.current_position(), None);
    }
}
