// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The behavioral contract a group requires of its members.

use alloc::string::String;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options for a value query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    /// Whether this query counts as a solution attempt.
    ///
    /// Items that track attempt counts or timestamps should only record them
    /// when this is set. Groups pass `false` when sweeping hidden or
    /// disabled items, so background collection never inflates attempts.
    pub mark_attempt: bool,
}

impl QueryOptions {
    /// A query that must not count as an attempt.
    #[must_use]
    pub const fn passive() -> Self {
        Self {
            mark_attempt: false,
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { mark_attempt: true }
    }
}

/// Options for a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetOptions {
    /// Whether the group should draw a fresh display order as part of the
    /// reset. Requires a random source on the group.
    pub reshuffle: bool,
}

impl ResetOptions {
    /// A reset that also redraws the display order.
    #[must_use]
    pub const fn reshuffled() -> Self {
        Self { reshuffle: true }
    }
}

/// A single item's contribution to a group report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemValues {
    /// The selected answer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<Value>,
    /// Explicit correctness verdict, when the item defines a solution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    /// Item-specific extras (attempt counts, timing, free text), flattened
    /// into the same JSON object on serialization.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemValues {
    /// Values carrying just a choice.
    #[must_use]
    pub fn answered(choice: Value) -> Self {
        Self {
            choice: Some(choice),
            ..Self::default()
        }
    }

    /// Returns `true` when any choice other than JSON `null` is present.
    ///
    /// This is the inclusion test for hidden and disabled items: they join a
    /// report only with a non-null choice.
    #[must_use]
    pub fn has_choice(&self) -> bool {
        !matches!(&self.choice, None | Some(Value::Null))
    }

    /// Returns `true` when the choice is missing, null, or empty.
    ///
    /// Empty strings and empty arrays count as blank; `0` and `false` are
    /// answers like any other. This is the completion test for required
    /// items.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match &self.choice {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(Value::Array(a)) => a.is_empty(),
            Some(_) => false,
        }
    }

    /// The same flat JSON object the serde encoding produces, built
    /// directly. Named fields win over colliding keys in
    /// [`extra`](Self::extra).
    #[must_use]
    pub fn as_json(&self) -> Value {
        let mut map = self.extra.clone();
        if let Some(choice) = &self.choice {
            map.insert("choice".into(), choice.clone());
        }
        if let Some(is_correct) = self.is_correct {
            map.insert("is_correct".into(), Value::Bool(is_correct));
        }
        Value::Object(map)
    }
}

/// A member of a choice group.
///
/// Implementations own their interaction state. The group sequences,
/// aggregates, and toggles them exclusively through this contract, so an
/// item never needs to know whether it sits in a form or a stepper.
pub trait Item {
    /// Reports the item's current values, or `None` if the item does not
    /// participate in aggregation at all (decorative separators, headings).
    ///
    /// Items returning `None` are skipped entirely: no entry in reports, no
    /// completion bookkeeping, no attempt marking.
    fn get_values(&mut self, opts: &QueryOptions) -> Option<ItemValues>;

    /// Programmatically fills in an answer, as when restoring a session or
    /// driving a scripted run.
    fn set_values(&mut self, values: &Value);

    /// Clears interaction state back to the initial presentation.
    fn reset(&mut self, opts: &ResetOptions);

    /// Re-enables interaction.
    fn enable(&mut self);

    /// Disables interaction while staying visible.
    fn disable(&mut self);

    /// Returns whether the item currently refuses interaction.
    fn is_disabled(&self) -> bool;

    /// Makes the item visible.
    fn show(&mut self);

    /// Hides the item without destroying its state.
    fn hide(&mut self);

    /// Returns whether the item is currently hidden.
    fn is_hidden(&self) -> bool;

    /// Advances the item's own internal sequence, if it keeps one.
    ///
    /// Returning `true` consumes the step: the group holds its position and
    /// reports [`Step::Held`](crate::group::Step::Held) with
    /// [`HoldReason::NotReady`](crate::group::HoldReason::NotReady). The
    /// default has no internal sequence and never consumes.
    fn next(&mut self) -> bool {
        false
    }

    /// Steps the item's internal sequence backwards.
    ///
    /// Same consumption contract as [`next`](Self::next), for
    /// [`retreat`](crate::group::ChoiceGroup::retreat).
    fn prev(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_query_marks_attempt() {
        assert!(QueryOptions::default().mark_attempt);
        assert!(!QueryOptions::passive().mark_attempt);
    }

    #[test]
    fn blank_covers_missing_null_and_empty() {
        assert!(ItemValues::default().is_blank());
        assert!(ItemValues::answered(Value::Null).is_blank());
        assert!(ItemValues::answered(json!("")).is_blank());
        assert!(ItemValues::answered(json!([])).is_blank());
    }

    #[test]
    fn zero_and_false_are_answers() {
        assert!(!ItemValues::answered(json!(0)).is_blank());
        assert!(!ItemValues::answered(json!(false)).is_blank());
        assert!(!ItemValues::answered(json!("no")).is_blank());
    }

    #[test]
    fn has_choice_excludes_only_null() {
        assert!(!ItemValues::default().has_choice());
        assert!(!ItemValues::answered(Value::Null).has_choice());
        // An empty string is a present (if blank) choice.
        assert!(ItemValues::answered(json!("")).has_choice());
        assert!(ItemValues::answered(json!(3)).has_choice());
    }

    #[test]
    fn serializes_flat() {
        let mut values = ItemValues::answered(json!("red"));
        values.is_correct = Some(true);
        values.extra.insert("attempts".into(), json!(2));

        let encoded = serde_json::to_string(&values).unwrap();
        let decoded: serde_json::Map<alloc::string::String, Value> =
            serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded["choice"], json!("red"));
        assert_eq!(decoded["is_correct"], json!(true));
        assert_eq!(decoded["attempts"], json!(2));
        assert_eq!(decoded.len(), 3);
    }
}
