// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value aggregation: sweeping items into one composite report.

use alloc::string::String;

use serde_json::{Map, Value};

use crate::group::ChoiceGroup;
use crate::item::{ItemId, QueryOptions};
use crate::notify::{HighlightEvent, HighlightReason};
use crate::rules::AnswerMap;

// ---------------------------------------------------------------------------
// Options and report

/// Options for one collection sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    /// Whether the sweep counts as a solution attempt for visible items.
    ///
    /// Hidden and disabled items are always queried passively, whatever
    /// this says.
    pub mark_attempt: bool,
    /// Whether to flag the first incomplete or incorrect required item.
    pub highlight_incomplete: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            mark_attempt: true,
            highlight_incomplete: true,
        }
    }
}

/// The composite result of one collection sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupReport {
    /// Per-item results keyed by id.
    pub answers: AnswerMap,
    /// `true` when every required, visible, enabled item reported a
    /// non-blank choice (and, when highlighting, nothing required was
    /// incorrect).
    pub all_complete: bool,
    /// `true` when any swept item reported an explicit incorrect verdict.
    pub any_incorrect: bool,
    /// The first required offender in display order, when highlighting
    /// flagged one.
    pub first_flagged: Option<ItemId>,
}

impl GroupReport {
    /// The full envelope as JSON: `answers` plus the group flags, with
    /// `first_flagged` present only when an offender was flagged.
    #[must_use]
    pub fn as_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "answers".into(),
            Value::Object(values_to_object(&self.answers)),
        );
        map.insert("all_complete".into(), Value::Bool(self.all_complete));
        map.insert("any_incorrect".into(), Value::Bool(self.any_incorrect));
        if let Some(id) = &self.first_flagged {
            map.insert("first_flagged".into(), Value::String(id.as_str().into()));
        }
        Value::Object(map)
    }

    /// The flattened shape: the bare id → values map, with the group flags
    /// merged back in only when adverse (`all_complete` false,
    /// `any_incorrect` true). Keeps the common all-good case minimal.
    #[must_use]
    pub fn simplified(&self) -> Value {
        let mut map = values_to_object(&self.answers);
        if !self.all_complete {
            map.insert("all_complete".into(), Value::Bool(false));
        }
        if self.any_incorrect {
            map.insert("any_incorrect".into(), Value::Bool(true));
        }
        Value::Object(map)
    }
}

fn values_to_object(answers: &AnswerMap) -> Map<String, Value> {
    let mut map = Map::new();
    for (id, values) in answers {
        map.insert(id.as_str().into(), values.as_json());
    }
    map
}

// ---------------------------------------------------------------------------
// The sweep

impl ChoiceGroup {
    /// Sweeps every item into a [`GroupReport`], with attempt marking and
    /// highlighting taken from the group config.
    pub fn collect(&mut self) -> GroupReport {
        let opts = CollectOptions {
            mark_attempt: self.config.mark_attempt,
            highlight_incomplete: self.config.highlight_incomplete,
        };
        self.collect_with(&opts)
    }

    /// Sweeps every item into a [`GroupReport`].
    ///
    /// Items are visited in display order. Hidden or disabled items are
    /// queried passively (never counting an attempt) and join the report
    /// only with a non-null choice; they cannot block completion. Items
    /// reporting no values at all are skipped entirely. In one-by-one mode
    /// the answers validated while paging overlay the fresh sweep, so
    /// already-accepted answers win.
    ///
    /// When `opts.highlight_incomplete` is set and some required item is
    /// blank or incorrect, exactly one highlight notice is emitted for the
    /// first such item in display order, the report records its id, and
    /// `all_complete` is forced false.
    pub fn collect_with(&mut self, opts: &CollectOptions) -> GroupReport {
        let mut answers = AnswerMap::new();
        let mut all_complete = true;
        let mut any_incorrect = false;
        let mut offender: Option<(ItemId, HighlightReason)> = None;

        for &slot in &self.order {
            let entry = &mut self.entries[slot];
            if entry.item.is_hidden() || entry.item.is_disabled() {
                if let Some(values) = entry.item.get_values(&QueryOptions::passive()) {
                    if values.has_choice() {
                        answers.insert(entry.id.clone(), values);
                    }
                }
                continue;
            }

            let query = QueryOptions {
                mark_attempt: opts.mark_attempt,
            };
            let Some(values) = entry.item.get_values(&query) else {
                continue;
            };
            let blank = values.is_blank();
            let incorrect = values.is_correct == Some(false);
            if incorrect {
                any_incorrect = true;
            }
            if entry.required && blank {
                all_complete = false;
            }
            if entry.required && (blank || incorrect) && offender.is_none() {
                let reason = if blank {
                    HighlightReason::MissingRequired
                } else {
                    HighlightReason::Incorrect
                };
                offender = Some((entry.id.clone(), reason));
            }
            answers.insert(entry.id.clone(), values);
        }

        if self.config.one_by_one {
            for (id, values) in &self.partials {
                answers.insert(id.clone(), values.clone());
            }
        }

        // Notices go out only after the sweep has settled.
        let mut first_flagged = None;
        if opts.highlight_incomplete {
            if let Some((id, reason)) = offender {
                all_complete = false;
                self.sink.on_highlighted(&HighlightEvent {
                    id: id.clone(),
                    reason,
                });
                first_flagged = Some(id);
            }
        }

        GroupReport {
            answers,
            all_complete,
            any_incorrect,
            first_flagged,
        }
    }

    /// Collects and renders per the config's `simplify` preference.
    ///
    /// The JSON-first variant of [`collect`](Self::collect) for callers
    /// that ship reports straight out as data.
    pub fn collect_value(&mut self) -> Value {
        let simplify = self.config.simplify;
        let report = self.collect();
        if simplify {
            report.simplified()
        } else {
            report.as_json()
        }
    }
}
