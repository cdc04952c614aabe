// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for the fallible parts of the crate.
//!
//! Assertion mismatches are not errors; they are reported through
//! [`Reporter::error`](crate::Reporter::error).

use thiserror::Error;

/// Errors from log setup and value serialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("another tracing subscriber is already the global default")]
    ForeignSubscriber,

    #[error("another logger is already installed for the log crate")]
    ForeignLogger,

    #[error("cannot serialize {side} value: {message}")]
    Serialize {
        side: &'static str,
        message: String,
    },
}

impl Error {
    pub(crate) fn serialize(side: &'static str, err: serde_json::Error) -> Self {
        Self::Serialize {
            side,
            message: err.to_string(),
        }
    }
}
