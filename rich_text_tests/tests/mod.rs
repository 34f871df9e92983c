// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `rich_text_sync`.
//!
//! - The `util` module contains the editor fixture and helpers shared by the other modules.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the fixture is compiled once.
//! - Put new tests into the module of their topic (codec, context, coordinator, surface).
//!   Property-based tests go into `properties.rs`.
//! - For test naming, put the topic of the test at the start of the name, e.g.
//!   `coordinator_echo_...` rather than `..._coordinator_echo`.
//!
//! Set `RUST_LOG=rich_text_sync=trace` to see what the coordinator does.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::float_cmp, reason = "sizes are compared after exact arithmetic")]

mod context;
mod coordinator;
mod surface;
mod util;
