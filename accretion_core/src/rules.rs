// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional display rules for paged groups.
//!
//! During paging, a transition skips over items whose rule rejects the
//! answers recorded so far. Items without a rule are always eligible. Rules
//! are consulted only by [`advance`](crate::group::ChoiceGroup::advance) and
//! [`retreat`](crate::group::ChoiceGroup::retreat); all-at-once forms ignore
//! them.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use serde_json::Value;

use crate::item::{ItemId, ItemValues};

/// Answers recorded so far, keyed by item id.
pub type AnswerMap = BTreeMap<ItemId, ItemValues>;

/// Decides whether one item is eligible for display during paging.
pub enum DisplayRule {
    /// An arbitrary predicate over the answers recorded so far.
    When(Box<dyn Fn(&AnswerMap) -> bool>),
    /// Eligible once every referenced item holds one of its listed choices.
    ///
    /// A referenced item with no recorded answer fails the rule.
    Matches(BTreeMap<ItemId, Vec<Value>>),
}

impl DisplayRule {
    /// Builds a predicate rule from a closure.
    #[must_use]
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&AnswerMap) -> bool + 'static,
    {
        Self::When(Box::new(predicate))
    }

    /// Builds a rule requiring `id` to hold exactly `choice`.
    #[must_use]
    pub fn requires(id: impl Into<ItemId>, choice: Value) -> Self {
        Self::requires_one_of(id, Vec::from([choice]))
    }

    /// Builds a rule requiring `id` to hold one of `choices`.
    #[must_use]
    pub fn requires_one_of(id: impl Into<ItemId>, choices: Vec<Value>) -> Self {
        let mut wanted = BTreeMap::new();
        wanted.insert(id.into(), choices);
        Self::Matches(wanted)
    }

    /// Evaluates the rule against the answers recorded so far.
    #[must_use]
    pub fn passes(&self, answers: &AnswerMap) -> bool {
        match self {
            Self::When(predicate) => predicate(answers),
            Self::Matches(wanted) => wanted.iter().all(|(id, accepted)| {
                answers
                    .get(id)
                    .and_then(|values| values.choice.as_ref())
                    .is_some_and(|choice| accepted.contains(choice))
            }),
        }
    }
}

impl fmt::Debug for DisplayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::When(_) => f.write_str("When(..)"),
            Self::Matches(wanted) => f.debug_tuple("Matches").field(wanted).finish(),
        }
    }
}

/// Per-item display rules.
#[derive(Debug, Default)]
pub struct DisplayRules {
    rules: BTreeMap<ItemId, DisplayRule>,
}

impl DisplayRules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule for `id`, replacing any previous one.
    pub fn set(&mut self, id: impl Into<ItemId>, rule: DisplayRule) {
        self.rules.insert(id.into(), rule);
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, id: impl Into<ItemId>, rule: DisplayRule) -> Self {
        self.set(id, rule);
        self
    }

    /// Returns whether any rules are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates the rule for `id`. Items without a rule are always eligible.
    #[must_use]
    pub fn passes(&self, id: &ItemId, answers: &AnswerMap) -> bool {
        self.rules.get(id).is_none_or(|rule| rule.passes(answers))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use serde_json::json;

    use super::*;

    fn answers(pairs: &[(&str, Value)]) -> AnswerMap {
        let mut map = AnswerMap::new();
        for (id, choice) in pairs {
            map.insert(ItemId::new(*id), ItemValues::answered(choice.clone()));
        }
        map
    }

    #[test]
    fn absent_rule_is_always_eligible() {
        let rules = DisplayRules::new();
        assert!(rules.passes(&ItemId::new("anything"), &AnswerMap::new()));
    }

    #[test]
    fn requires_matches_exact_choice() {
        let rule = DisplayRule::requires("color", json!("red"));
        assert!(rule.passes(&answers(&[("color", json!("red"))])));
        assert!(!rule.passes(&answers(&[("color", json!("blue"))])));
    }

    #[test]
    fn missing_answer_fails_matches() {
        let rule = DisplayRule::requires("color", json!("red"));
        assert!(!rule.passes(&AnswerMap::new()));
    }

    #[test]
    fn requires_one_of_accepts_any_listed() {
        let rule = DisplayRule::requires_one_of("size", vec![json!("s"), json!("m")]);
        assert!(rule.passes(&answers(&[("size", json!("m"))])));
        assert!(!rule.passes(&answers(&[("size", json!("xl"))])));
    }

    #[test]
    fn when_predicate_sees_answers() {
        let rule = DisplayRule::when(|answers| {
            answers
                .get(&ItemId::new("age"))
                .and_then(|values| values.choice.as_ref())
                .and_then(Value::as_i64)
                .is_some_and(|age| age >= 18)
        });
        assert!(rule.passes(&answers(&[("age", json!(30))])));
        assert!(!rule.passes(&answers(&[("age", json!(12))])));
        assert!(!rule.passes(&AnswerMap::new()));
    }

    #[test]
    fn set_replaces_existing_rule() {
        let mut rules = DisplayRules::new();
        rules.set("q", DisplayRule::requires("gate", json!("open")));
        rules.set("q", DisplayRule::when(|_| true));
        assert!(rules.passes(&ItemId::new("q"), &AnswerMap::new()));
        assert!(!rules.is_empty());
    }
}
