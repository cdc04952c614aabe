// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The interface helpers use to report back to a running test.

use std::sync::Arc;

/// A test's handle for recording failures and log output.
///
/// [`TestCase`](crate::TestCase) is the implementation used in practice;
/// cleanup registration comes from [`Cleanupper`](crate::mock::Cleanupper).
pub trait Reporter {
    /// Record a failure and keep going.
    ///
    /// The location attached to the failure is the first caller up the
    /// stack that is not itself `#[track_caller]`, so helpers should carry
    /// the attribute too.
    #[track_caller]
    fn error(&self, message: &str);

    /// Append a line to the test's log.
    fn log(&self, message: &str);

    /// A `'static` handle to [`Reporter::log`] for writers that outlive a
    /// borrow of the test.
    fn log_sink(&self) -> Arc<dyn LogSink>;
}

/// The log half of a [`Reporter`], shareable across threads.
pub trait LogSink: Send + Sync {
    /// Append a line to the test's log.
    fn log(&self, message: &str);
}
