// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparisons that record failures instead of panicking.
//!
//! Each check reports through a [`Reporter`] and returns `true` when there
//! was nothing to report, so a test can keep going and collect every
//! mismatch at once.

use std::fmt::{Debug, Display};

use serde::Serialize;
use similar::{DiffTag, TextDiff};

use crate::deep;
use crate::reporter::Reporter;

/// Check `result` against an error expectation.
///
/// An empty `expected` means no error is expected; otherwise the error's
/// message must contain `expected`.
///
/// Returns `true` only if `result` is `Ok`, whether or not that was
/// expected: an unexpected success records a failure and still returns
/// `true`.
#[track_caller]
pub fn check_error<R, T, E>(t: &R, result: &Result<T, E>, expected: &str) -> bool
where
    R: Reporter + ?Sized,
    E: Display,
{
    match result {
        Ok(_) => {
            if !expected.is_empty() {
                t.error(&format!("unexpected success; want error {expected}"));
            }
            true
        }
        Err(err) => {
            let got = err.to_string();
            if expected.is_empty() {
                t.error(&format!("unexpected error; got {got} want no error"));
            } else if !got.contains(expected) {
                t.error(&format!("unexpected error; got {got} want {expected}"));
            }
            false
        }
    }
}

/// Check that two texts are equal, ignoring carriage returns.
///
/// On a mismatch, records `differences found`, logs a unified diff from
/// `actual` to `expected`, and returns `false`.
#[track_caller]
pub fn check_diff<R, A, E>(t: &R, actual: A, expected: E) -> bool
where
    R: Reporter + ?Sized,
    A: AsRef<[u8]>,
    E: AsRef<[u8]>,
{
    let actual = normalize(actual.as_ref());
    let expected = normalize(expected.as_ref());
    match unified_diff(&actual, &expected) {
        None => true,
        Some(diff) => {
            t.error("differences found");
            t.log(&format!("\n{diff}"));
            false
        }
    }
}

/// Check two values for equality.
///
/// On a mismatch, records a failure showing a diff of their pretty
/// `Debug` output and returns `false`.
#[track_caller]
pub fn check_deep_equal<R, T>(t: &R, actual: &T, expected: &T) -> bool
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + ?Sized,
{
    if actual == expected {
        return true;
    }
    let actual = format!("{actual:#?}\n");
    let expected = format!("{expected:#?}\n");
    let detail = unified_diff(&actual, &expected)
        .unwrap_or_else(|| format!("--- actual\n{actual}+++ expected\n{expected}"));
    t.error(&format!("actual != expected:\n{detail}"));
    false
}

/// Check two values for structural equality of their serialized form.
///
/// Types need not match, only their serde representation. On a mismatch,
/// records every differing path (up to [`deep::MAX_DIFF`]) and returns
/// `false`.
///
/// Non-finite floats serialize as `null`; see [`deep::equal_serialized`].
#[track_caller]
pub fn check_json_equal<R, A, E>(t: &R, actual: &A, expected: &E) -> bool
where
    R: Reporter + ?Sized,
    A: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    match deep::equal_serialized(actual, expected) {
        Ok(diffs) if diffs.is_empty() => true,
        Ok(diffs) => {
            t.error(&format!("actual != expected: [{}]", diffs.join(" ")));
            false
        }
        Err(err) => {
            t.error(&err.to_string());
            false
        }
    }
}

fn normalize(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('\r', "")
}

/// Unified diff with `actual`/`expected` headers, or `None` if the texts
/// have no line edits.
fn unified_diff(actual: &str, expected: &str) -> Option<String> {
    let diff = TextDiff::from_lines(actual, expected);
    if diff.ops().iter().all(|op| op.tag() == DiffTag::Equal) {
        return None;
    }
    let mut unified = diff.unified_diff();
    unified.header("actual", "expected");
    Some(unified.to_string())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
