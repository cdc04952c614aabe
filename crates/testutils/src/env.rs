// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by testutils are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Env var name constants.
mod names {
    pub const TESTUTILS_LOG: &str = "TESTUTILS_LOG";
    pub const TESTUTILS_LOG_FORMAT: &str = "TESTUTILS_LOG_FORMAT";
}

pub use names::*;

/// `TESTUTILS_LOG` — filter directives for the default log output.
pub fn log_filter() -> Option<String> {
    var_non_empty(names::TESTUTILS_LOG)
}

/// `TESTUTILS_LOG_FORMAT` — `full` or `compact`.
pub fn log_format() -> Option<String> {
    var_non_empty(names::TESTUTILS_LOG_FORMAT)
}

fn var_non_empty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
