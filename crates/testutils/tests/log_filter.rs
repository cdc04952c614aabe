// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Per-target filter directives applied to both default loggers.
//!
//! Kept to a single test: the filter is read once, when the default
//! loggers are first installed.

use testutils::env::TESTUTILS_LOG;
use testutils::testlog;
use testutils::TestCase;

#[test]
fn target_directives_filter_log_and_tracing_alike() {
    std::env::set_var(TESTUTILS_LOG, "warn,noisy=debug");

    let t = TestCase::new("filter");
    testlog::override_default(&t);
    log::debug!(target: "other", "log debug from other");
    tracing::debug!(target: "other", "tracing debug from other");
    log::debug!(target: "noisy::inner", "log debug from noisy");
    tracing::debug!(target: "noisy", "tracing debug from noisy");
    log::warn!(target: "other", "log warn from other");
    tracing::warn!(target: "other", "tracing warn from other");
    let report = t.finish();

    let logs = report.logs().join("\n");
    assert!(!logs.contains("debug from other"), "{logs}");
    assert!(logs.contains("log debug from noisy"), "{logs}");
    assert!(logs.contains("tracing debug from noisy"), "{logs}");
    assert!(logs.contains("log warn from other"), "{logs}");
    assert!(logs.contains("tracing warn from other"), "{logs}");
}
