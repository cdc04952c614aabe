// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial(testutils_env)]
fn log_filter_returns_none_when_unset() {
    std::env::remove_var(TESTUTILS_LOG);
    assert_eq!(log_filter(), None);
}

#[test]
#[serial(testutils_env)]
fn log_filter_returns_trimmed_value() {
    std::env::set_var(TESTUTILS_LOG, "  debug,hyper=warn ");
    let result = log_filter();
    std::env::remove_var(TESTUTILS_LOG);
    assert_eq!(result, Some("debug,hyper=warn".to_string()));
}

#[test]
#[serial(testutils_env)]
fn log_format_ignores_blank() {
    std::env::set_var(TESTUTILS_LOG_FORMAT, "   ");
    let result = log_format();
    std::env::remove_var(TESTUTILS_LOG_FORMAT);
    assert_eq!(result, None);
}

#[test]
#[serial(testutils_env)]
fn log_format_returns_value_when_set() {
    std::env::set_var(TESTUTILS_LOG_FORMAT, "compact");
    let result = log_format();
    std::env::remove_var(TESTUTILS_LOG_FORMAT);
    assert_eq!(result, Some("compact".to_string()));
}
