// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted one-at-a-time session that exercises the paging pipeline.
//!
//! Registers a small questionnaire through the harness kinds, walks it with a
//! conditional display rule and a deliberately wrong answer, records every
//! notice with a [`RecorderSink`](accretion_debug::recorder::RecorderSink),
//! then replays the recording through a pretty-printer and exports a JSON
//! transcript file.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{Value, json};

use accretion_core::{
    ChoiceGroup, DisplayRule, DisplayRules, GroupConfig, ItemDescriptor, ItemId, ItemRegistry,
    ItemSpec, ResetOptions,
};
use accretion_debug::pretty::PrettyPrintSink;
use accretion_debug::recorder::{RecorderSink, replay};
use accretion_harness::{FlowTracker, register_kinds};

const SEED: u64 = 2026;

fn main() {
    // -- registry + group --------------------------------------------------
    let mut registry = ItemRegistry::new();
    register_kinds(&mut registry);

    let mut config = GroupConfig::stepper();
    config
        .shared_defaults
        .insert("requiredChoice".into(), json!(true));

    let mut rules = DisplayRules::new();
    rules.set("extra_credit", DisplayRule::requires("quiz", json!("green")));

    let recorder = RecorderSink::new();
    let recording = recorder.recording();

    let mut group = ChoiceGroup::new(config)
        .with_sink(Box::new(recorder))
        .with_rng(Box::new(ChaCha8Rng::seed_from_u64(SEED)))
        .with_rules(rules);
    group
        .set_items(&registry, questionnaire())
        .expect("registration failed");

    // -- scripted walk -----------------------------------------------------
    let mut flow = FlowTracker::new();

    // 1. The consent item is required and still blank: the step holds and
    //    the offender is flagged.
    advance(&mut group, &mut flow);
    answer(&mut group, "consent", json!("agree"));
    advance(&mut group, &mut flow);

    // 2. A plain answer passes straight through.
    answer(&mut group, "nickname", json!("kip"));
    advance(&mut group, &mut flow);

    // 3. The briefing has two scripted pages; the first advance is consumed
    //    internally.
    advance(&mut group, &mut flow);
    advance(&mut group, &mut flow);

    // 4. A wrong quiz answer refuses the step, the corrected one passes and
    //    the rule on extra_credit skips it.
    answer(&mut group, "quiz", json!("red"));
    advance(&mut group, &mut flow);
    answer(&mut group, "quiz", json!("blue"));
    advance(&mut group, &mut flow);

    // 5. Step back and forward again across the ruled-out position.
    retreat(&mut group, &mut flow);
    advance(&mut group, &mut flow);

    // 6. The last answer finishes the pass.
    answer(&mut group, "feedback", json!("smooth"));
    advance(&mut group, &mut flow);

    // -- results -----------------------------------------------------------
    let report = group.collect();
    println!(
        "collected {} answers (all_complete={} any_incorrect={})",
        report.answers.len(),
        report.all_complete,
        report.any_incorrect,
    );
    let simplified =
        serde_json::to_string_pretty(&report.simplified()).expect("failed to render report");
    println!("{simplified}");

    let flow_report = flow.report();
    println!(
        "flow grade {} ({} advances, {} retreats, {} holds)",
        flow_report.grade.as_str(),
        flow_report.advances,
        flow_report.retreats,
        flow_report.holds,
    );

    // -- seeded reshuffle --------------------------------------------------
    group
        .reset_all(&ResetOptions::reshuffled())
        .expect("reset failed");
    let order: Vec<String> = group
        .display_ids()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("reshuffled order: {}", order.join(", "));

    // -- replay + transcript -----------------------------------------------
    let bytes = recording.bytes();
    println!("-- notice replay ({} bytes recorded) --", bytes.len());
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    replay(&bytes, &mut pretty);

    let path = "transcript.json";
    let file = File::create(path).expect("failed to create transcript.json");
    let mut writer = BufWriter::new(file);
    accretion_debug::transcript::export(&bytes, &mut writer).expect("failed to write transcript");
    println!("Wrote {path}");
}

fn questionnaire() -> Vec<ItemSpec> {
    vec![
        ItemSpec::from(ItemDescriptor::new("echo").with_id("consent")),
        ItemSpec::from(ItemDescriptor::new("echo").with_id("nickname")),
        ItemSpec::from(
            ItemDescriptor::new("scripted")
                .with_id("briefing")
                .with_option("script", json!(["part one", "part two"])),
        ),
        ItemSpec::from(
            ItemDescriptor::new("echo")
                .with_id("quiz")
                .with_option("correctChoice", json!("blue")),
        ),
        // Explicitly optional: its display rule may keep it off-screen for
        // the whole pass.
        ItemSpec::from(
            ItemDescriptor::new("echo")
                .with_id("extra_credit")
                .required(false),
        ),
        ItemSpec::from(ItemDescriptor::new("echo").with_id("feedback")),
    ]
}

fn answer(group: &mut ChoiceGroup, id: &str, value: Value) {
    let mut payload = BTreeMap::new();
    payload.insert(ItemId::from(id), value);
    group.set_values(&payload);
}

fn advance(group: &mut ChoiceGroup, flow: &mut FlowTracker) {
    let step = group.advance().expect("advance failed");
    let _ = flow.observe(&step);
    println!("advance -> {step:?}");
}

fn retreat(group: &mut ChoiceGroup, flow: &mut FlowTracker) {
    let step = group.retreat().expect("retreat failed");
    let _ = flow.observe(&step);
    println!("retreat -> {step:?}");
}
