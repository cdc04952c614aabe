// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Standalone loggers bound to a single test.

use std::io::Write;

use chrono::Local;
use tracing::{Dispatch, Level};

use super::output::format_record;
use super::writer::Writer;
use crate::reporter::Reporter;

/// A `log::Log` that writes only to one test's log.
///
/// Lines are prefixed with the local date and time, e.g.
/// `2026/01/02 15:04:05  INFO my_crate: message`.
#[derive(Clone)]
pub struct TestLogger {
    writer: Writer,
    level: log::LevelFilter,
}

impl TestLogger {
    pub fn new<R: Reporter + ?Sized>(t: &R) -> Self {
        Self {
            writer: Writer::new(t),
            level: log::LevelFilter::Trace,
        }
    }

    /// Drop records more verbose than `level`
    pub fn with_level(mut self, level: log::LevelFilter) -> Self {
        self.level = level;
        self
    }
}

impl log::Log for TestLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {}",
            Local::now().format("%Y/%m/%d %H:%M:%S"),
            format_record(record)
        );
        let _ = self.writer.clone().write_all(line.as_bytes());
    }

    fn flush(&self) {}
}

/// A `log::Log` that writes only to `t`'s log.
pub fn logger<R: Reporter + ?Sized>(t: &R) -> TestLogger {
    TestLogger::new(t)
}

/// A tracing dispatcher that writes only to `t`'s log, at every level.
///
/// Use it for a scope with [`tracing::dispatcher::with_default`] instead
/// of redirecting the process-wide default.
pub fn structured_logger<R: Reporter + ?Sized>(t: &R) -> Dispatch {
    let writer = Writer::new(t);
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();
    Dispatch::new(subscriber)
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
