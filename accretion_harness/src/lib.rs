// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted items and session flow metrics for group tests and demos.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use serde_json::{Map, Value};

use accretion_core::{
    GroupError, Item, ItemRegistry, ItemValues, QueryOptions, ResetOptions, Step,
};

// ---------------------------------------------------------------------------
// EchoItem
// ---------------------------------------------------------------------------

/// A pure set/get passthrough item.
///
/// Reports whatever was last stored, grades it against an optional expected
/// answer, and counts solution attempts in the `attempts` extra. The
/// workhorse fixture for round-trip and completion-gating checks.
#[derive(Clone, Debug, Default)]
pub struct EchoItem {
    value: Option<Value>,
    expected: Option<Value>,
    hidden: bool,
    disabled: bool,
    attempts: u64,
}

impl EchoItem {
    /// Creates a blank item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an item with an answer already stored.
    #[must_use]
    pub fn answered(value: Value) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Sets the expected answer the item grades against.
    #[must_use]
    pub fn with_expected(mut self, expected: Value) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Returns how many attempt-marking queries the item has seen.
    #[must_use]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }
}

impl Item for EchoItem {
    fn get_values(&mut self, opts: &QueryOptions) -> Option<ItemValues> {
        if opts.mark_attempt {
            self.attempts += 1;
        }
        let mut extra = Map::new();
        extra.insert("attempts".into(), Value::from(self.attempts));
        Some(ItemValues {
            choice: self.value.clone(),
            is_correct: self
                .expected
                .as_ref()
                .map(|expected| self.value.as_ref() == Some(expected)),
            extra,
        })
    }

    fn set_values(&mut self, values: &Value) {
        self.value = Some(values.clone());
    }

    fn reset(&mut self, _opts: &ResetOptions) {
        self.value = None;
        self.attempts = 0;
    }

    fn enable(&mut self) {
        self.disabled = false;
    }

    fn disable(&mut self) {
        self.disabled = true;
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn show(&mut self) {
        self.hidden = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

// ---------------------------------------------------------------------------
// ScriptedItem
// ---------------------------------------------------------------------------

/// An item with a canned multi-step script.
///
/// Each script entry is one internal page; [`next`](Item::next) consumes a
/// paging step per remaining entry before the group may move on, and
/// [`prev`](Item::prev) re-enters them backwards. The reported answer is the
/// entry at the current step. Exercises the not-ready path and nested
/// paging without a real widget.
#[derive(Clone, Debug)]
pub struct ScriptedItem {
    script: Vec<Value>,
    cursor: usize,
    expected: Option<Value>,
    hidden: bool,
    disabled: bool,
    attempts: u64,
}

impl ScriptedItem {
    /// Creates an item from its script, starting at the first entry.
    #[must_use]
    pub fn new(script: Vec<Value>) -> Self {
        Self {
            script,
            cursor: 0,
            expected: None,
            hidden: false,
            disabled: false,
            attempts: 0,
        }
    }

    /// Sets the expected answer the item grades against.
    #[must_use]
    pub fn with_expected(mut self, expected: Value) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Returns the current script position.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.cursor
    }
}

impl Item for ScriptedItem {
    fn get_values(&mut self, opts: &QueryOptions) -> Option<ItemValues> {
        if opts.mark_attempt {
            self.attempts += 1;
        }
        let choice = self.script.get(self.cursor).cloned();
        let mut extra = Map::new();
        extra.insert("attempts".into(), Value::from(self.attempts));
        Some(ItemValues {
            is_correct: self
                .expected
                .as_ref()
                .map(|expected| choice.as_ref() == Some(expected)),
            choice,
            extra,
        })
    }

    fn set_values(&mut self, values: &Value) {
        if let Some(step) = self.script.get_mut(self.cursor) {
            *step = values.clone();
        } else {
            self.script.push(values.clone());
        }
    }

    fn reset(&mut self, _opts: &ResetOptions) {
        // The script is the item's content, not interaction state; only the
        // position and attempt count go back to the start.
        self.cursor = 0;
        self.attempts = 0;
    }

    fn enable(&mut self) {
        self.disabled = false;
    }

    fn disable(&mut self) {
        self.disabled = true;
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn show(&mut self) {
        self.hidden = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn next(&mut self) -> bool {
        if self.cursor + 1 < self.script.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Kind registration
// ---------------------------------------------------------------------------

/// Registers the harness kinds on a registry.
///
/// - `echo` — builds an [`EchoItem`]; honors the `value` option as the
///   initial answer and `correctChoice` as the expected one.
/// - `scripted` — builds a [`ScriptedItem`]; `script` must be an array of
///   step answers (missing means empty), `correctChoice` again sets the
///   expected answer.
pub fn register_kinds(registry: &mut ItemRegistry) {
    registry.register("echo", |descriptor| {
        Ok(Box::new(EchoItem {
            value: descriptor.options.get("value").cloned(),
            expected: descriptor.options.get("correctChoice").cloned(),
            ..EchoItem::default()
        }))
    });
    registry.register("scripted", |descriptor| {
        let script = match descriptor.options.get("script") {
            Some(Value::Array(steps)) => steps.clone(),
            Some(_) => {
                return Err(GroupError::InvalidInput {
                    reason: "`scripted` expects an array in `script`".into(),
                });
            }
            None => Vec::new(),
        };
        let mut item = ScriptedItem::new(script);
        if let Some(expected) = descriptor.options.get("correctChoice") {
            item = item.with_expected(expected.clone());
        }
        Ok(Box::new(item))
    });
}

// ---------------------------------------------------------------------------
// FlowTracker
// ---------------------------------------------------------------------------

/// Letter grade for how smoothly a paging session ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowGrade {
    /// Finished without a single refused step.
    A,
    /// Finished with no more holds than moves.
    B,
    /// Finished unevenly, or still under way and keeping pace.
    C,
    /// More refused steps than moves, and not finished.
    D,
}

impl FlowGrade {
    /// Returns a short label for status lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

/// Aggregated report returned by [`FlowTracker::observe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowReport {
    /// Current grade.
    pub grade: FlowGrade,
    /// Forward moves observed.
    pub advances: u64,
    /// Backward moves observed.
    pub retreats: u64,
    /// Refused steps observed.
    pub holds: u64,
    /// Whether the pass has completed.
    pub finished: bool,
}

/// Observes paging outcomes and aggregates a session report.
#[derive(Debug, Default)]
pub struct FlowTracker {
    advances: u64,
    retreats: u64,
    holds: u64,
    finished: bool,
}

impl FlowTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes one paging outcome and returns an updated report.
    #[must_use]
    pub fn observe(&mut self, step: &Step) -> FlowReport {
        match *step {
            Step::Moved { from, to } => {
                if to > from {
                    self.advances += 1;
                } else {
                    self.retreats += 1;
                }
            }
            Step::Held(_) => self.holds += 1,
            Step::Finished => self.finished = true,
            Step::Inactive => {}
        }
        self.report()
    }

    /// Returns the report for everything observed so far.
    #[must_use]
    pub fn report(&self) -> FlowReport {
        let moves = self.advances + self.retreats;
        FlowReport {
            grade: grade_for(moves, self.holds, self.finished),
            advances: self.advances,
            retreats: self.retreats,
            holds: self.holds,
            finished: self.finished,
        }
    }
}

fn grade_for(moves: u64, holds: u64, finished: bool) -> FlowGrade {
    if finished && holds == 0 {
        FlowGrade::A
    } else if finished && holds <= moves {
        FlowGrade::B
    } else if finished || moves >= holds {
        FlowGrade::C
    } else {
        FlowGrade::D
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use alloc::vec;

    use serde_json::json;

    use accretion_core::{ChoiceGroup, GroupConfig, HoldReason, ItemDescriptor, ItemId, ItemSpec};

    use super::*;

    #[test]
    fn echo_round_trips_values() {
        let mut item = EchoItem::new();
        let blank = item.get_values(&QueryOptions::default()).unwrap();
        assert!(blank.is_blank());
        assert_eq!(item.attempts(), 1);

        item.set_values(&json!("yes"));
        let values = item.get_values(&QueryOptions::passive()).unwrap();
        assert_eq!(values.choice, Some(json!("yes")));
        assert_eq!(item.attempts(), 1);

        item.reset(&ResetOptions::default());
        assert!(item.get_values(&QueryOptions::passive()).unwrap().is_blank());
        assert_eq!(item.attempts(), 0);
    }

    #[test]
    fn echo_grades_against_the_expected_answer() {
        let mut item = EchoItem::answered(json!("b")).with_expected(json!("a"));
        let values = item.get_values(&QueryOptions::passive()).unwrap();
        assert_eq!(values.is_correct, Some(false));

        item.set_values(&json!("a"));
        let values = item.get_values(&QueryOptions::passive()).unwrap();
        assert_eq!(values.is_correct, Some(true));
    }

    #[test]
    fn scripted_walks_its_script() {
        let mut item = ScriptedItem::new(vec![json!("draft"), json!("final")]);
        assert_eq!(
            item.get_values(&QueryOptions::passive()).unwrap().choice,
            Some(json!("draft"))
        );

        assert!(item.next());
        assert_eq!(item.current_step(), 1);
        assert_eq!(
            item.get_values(&QueryOptions::passive()).unwrap().choice,
            Some(json!("final"))
        );
        assert!(!item.next(), "past the last entry the item is ready");

        assert!(item.prev());
        assert_eq!(item.current_step(), 0);
        assert!(!item.prev());
    }

    #[test]
    fn scripted_set_values_edits_the_current_step() {
        let mut item = ScriptedItem::new(vec![json!("draft"), json!("final")]);
        item.set_values(&json!("edited"));
        assert_eq!(
            item.get_values(&QueryOptions::passive()).unwrap().choice,
            Some(json!("edited"))
        );

        item.reset(&ResetOptions::default());
        assert_eq!(item.current_step(), 0);
        assert_eq!(
            item.get_values(&QueryOptions::passive()).unwrap().choice,
            Some(json!("edited")),
            "reset returns to the start without discarding content"
        );
    }

    #[test]
    fn register_kinds_builds_from_descriptors() {
        let mut registry = ItemRegistry::new();
        register_kinds(&mut registry);

        let descriptor = ItemDescriptor::new("echo")
            .with_option("value", json!("a"))
            .with_option("correctChoice", json!("a"));
        let mut item = registry.resolve(&descriptor).unwrap();
        let values = item.get_values(&QueryOptions::passive()).unwrap();
        assert_eq!(values.choice, Some(json!("a")));
        assert_eq!(values.is_correct, Some(true));

        let err = registry.resolve(&ItemDescriptor::new("slider")).err().unwrap();
        assert!(matches!(err, GroupError::MissingCapability { .. }));
    }

    #[test]
    fn scripted_requires_an_array_script() {
        let mut registry = ItemRegistry::new();
        register_kinds(&mut registry);

        let descriptor = ItemDescriptor::new("scripted").with_option("script", json!("nope"));
        let err = registry.resolve(&descriptor).err().unwrap();
        assert!(matches!(err, GroupError::InvalidInput { .. }));
    }

    #[test]
    fn kinds_wire_into_a_stepper_group() {
        let mut registry = ItemRegistry::new();
        register_kinds(&mut registry);

        let mut group = ChoiceGroup::new(GroupConfig::stepper());
        group
            .set_items(
                &registry,
                vec![
                    ItemSpec::from(
                        ItemDescriptor::new("echo")
                            .with_id("warmup")
                            .with_option("value", json!(1)),
                    ),
                    ItemSpec::from(
                        ItemDescriptor::new("scripted")
                            .with_id("story")
                            .with_option("script", json!(["part one", "part two"])),
                    ),
                ],
            )
            .unwrap();

        assert_eq!(group.advance().unwrap(), Step::Moved { from: 0, to: 1 });
        assert_eq!(
            group.advance().unwrap(),
            Step::Held(HoldReason::NotReady),
            "the scripted item consumes one step per remaining entry"
        );
        assert_eq!(group.advance().unwrap(), Step::Finished);

        let report = group.collect();
        assert!(report.all_complete);
        assert_eq!(
            report.answers[&ItemId::from("story")].choice,
            Some(json!("part two"))
        );
    }

    #[test]
    fn correct_choice_marks_descriptors_required() {
        let mut registry = ItemRegistry::new();
        register_kinds(&mut registry);

        let mut group = ChoiceGroup::new(GroupConfig::form());
        group
            .set_items(
                &registry,
                vec![ItemSpec::from(
                    ItemDescriptor::new("echo").with_option("correctChoice", json!("a")),
                )],
            )
            .unwrap();
        assert!(group.required(), "a graded item is implicitly required");
    }

    #[test]
    fn flow_tracker_grades_a_clean_run() {
        let mut tracker = FlowTracker::new();
        let _ = tracker.observe(&Step::Moved { from: 0, to: 1 });
        let _ = tracker.observe(&Step::Moved { from: 1, to: 2 });
        let report = tracker.observe(&Step::Finished);

        assert_eq!(report.grade, FlowGrade::A);
        assert_eq!(report.advances, 2);
        assert_eq!(report.retreats, 0);
        assert!(report.finished);
    }

    #[test]
    fn flow_tracker_downgrades_held_runs() {
        let mut tracker = FlowTracker::new();
        let report = tracker.observe(&Step::Held(HoldReason::Incomplete));
        assert_eq!(report.grade, FlowGrade::D, "holding without progress");

        let report = tracker.observe(&Step::Moved { from: 0, to: 1 });
        assert_eq!(report.grade, FlowGrade::C, "under way again");

        let _ = tracker.observe(&Step::Moved { from: 1, to: 0 });
        let report = tracker.observe(&Step::Finished);
        assert_eq!(report.grade, FlowGrade::B);
        assert_eq!(report.retreats, 1);
        assert_eq!(report.holds, 1);
    }

    #[test]
    fn flow_tracker_ignores_inactive_steps() {
        let mut tracker = FlowTracker::new();
        let _ = tracker.observe(&Step::Inactive);
        let report = tracker.report();
        assert_eq!(report.advances, 0);
        assert_eq!(report.holds, 0);
        assert!(!report.finished);
    }
}
