// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and transcript export for accretion notices.
//!
//! This crate provides [`NoticeSink`](accretion_core::NoticeSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-notice output.
//! - [`recorder::RecorderSink`] — compact binary recording with
//!   [`recorder::decode`] and [`recorder::replay`] for playback.
//! - [`transcript::export`] — writes a JSON transcript from recorded bytes.

pub mod pretty;
pub mod recorder;
pub mod transcript;
