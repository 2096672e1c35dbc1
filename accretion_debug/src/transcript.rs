// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON transcript exporter.
//!
//! [`export`] reads recorded bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes a JSON array
//! with one object per notice to the given writer, suitable for diffing
//! session runs or feeding into log tooling.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedNotice, decode};

/// Exports recorded notices as a JSON transcript.
///
/// The output is a complete JSON array of notice objects in emission order.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut notices: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedNotice::Enabled => {
                notices.push(json!({
                    "notice": "enabled",
                }));
            }
            RecordedNotice::Disabled => {
                notices.push(json!({
                    "notice": "disabled",
                }));
            }
            RecordedNotice::Highlighted { id, reason } => {
                notices.push(json!({
                    "notice": "highlight",
                    "item": id.as_str(),
                    "reason": format!("{reason:?}"),
                }));
            }
            RecordedNotice::Page { from, to, id } => {
                notices.push(json!({
                    "notice": "page",
                    "from": from,
                    "to": to,
                    "item": id.as_str(),
                }));
            }
            RecordedNotice::Finished { answered } => {
                notices.push(json!({
                    "notice": "finished",
                    "answered": answered,
                }));
            }
            RecordedNotice::Reset { reshuffled } => {
                notices.push(json!({
                    "notice": "reset",
                    "reshuffled": reshuffled,
                }));
            }
            RecordedNotice::Order { len, source } => {
                notices.push(json!({
                    "notice": "order",
                    "len": len,
                    "source": format!("{source:?}"),
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &notices)?;
    Ok(())
}
