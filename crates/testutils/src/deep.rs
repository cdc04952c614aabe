// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural comparison of serialized values.
//!
//! Differences are reported one per path, e.g. `items[2].name: a != b`.
//! Object keys are joined with `.`, array indices use `[i]`, and a
//! difference at the root has no path prefix.

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Comparison stops after this many differences.
pub const MAX_DIFF: usize = 10;

const MISSING_KEY: &str = "<does not have key>";
const MISSING_ELEMENT: &str = "<no value>";

/// Compare two values, returning their differences (empty when equal).
pub fn equal(actual: &Value, expected: &Value) -> Vec<String> {
    let mut diffs = Vec::new();
    compare(&mut diffs, "", actual, expected);
    diffs
}

/// Serialize both sides and compare them with [`equal`].
///
/// JSON has no NaN or infinity: `serde_json` serializes non-finite floats
/// as `null`, so they compare equal to `null`, `()`, `None`, and each
/// other. Compare such values with [`crate::check_deep_equal`] instead.
pub fn equal_serialized<A, E>(actual: &A, expected: &E) -> Result<Vec<String>, Error>
where
    A: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    let actual = serde_json::to_value(actual).map_err(|e| Error::serialize("actual", e))?;
    let expected = serde_json::to_value(expected).map_err(|e| Error::serialize("expected", e))?;
    Ok(equal(&actual, &expected))
}

fn compare(diffs: &mut Vec<String>, path: &str, actual: &Value, expected: &Value) {
    if diffs.len() >= MAX_DIFF {
        return;
    }
    match (actual, expected) {
        (Value::Object(a), Value::Object(e)) => {
            let mut keys: Vec<&String> = a.keys().chain(e.keys()).collect();
            keys.sort();
            keys.dedup();
            for key in keys {
                let field = join_key(path, key);
                match (a.get(key), e.get(key)) {
                    (Some(a), Some(e)) => compare(diffs, &field, a, e),
                    (Some(a), None) => push(diffs, &field, &render(a), MISSING_KEY),
                    (None, Some(e)) => push(diffs, &field, MISSING_KEY, &render(e)),
                    (None, None) => {}
                }
            }
        }
        (Value::Array(a), Value::Array(e)) => {
            for i in 0..a.len().max(e.len()) {
                let element = format!("{path}[{i}]");
                match (a.get(i), e.get(i)) {
                    (Some(a), Some(e)) => compare(diffs, &element, a, e),
                    (Some(a), None) => push(diffs, &element, &render(a), MISSING_ELEMENT),
                    (None, Some(e)) => push(diffs, &element, MISSING_ELEMENT, &render(e)),
                    (None, None) => {}
                }
            }
        }
        (a, e) if a == e => {}
        (a, e) if is_composite(a) || is_composite(e) => push(diffs, path, kind(a), kind(e)),
        (a, e) => push(diffs, path, &render(a), &render(e)),
    }
}

fn push(diffs: &mut Vec<String>, path: &str, actual: &str, expected: &str) {
    if diffs.len() >= MAX_DIFF {
        return;
    }
    if path.is_empty() {
        diffs.push(format!("{actual} != {expected}"));
    } else {
        diffs.push(format!("{path}: {actual} != {expected}"));
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Strings render without quotes; everything else as JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "deep_tests.rs"]
mod tests;
