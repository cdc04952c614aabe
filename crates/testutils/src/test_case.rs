// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A test case that collects failures, logs, and cleanups.

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::mock::Cleanupper;
use crate::reporter::{LogSink, Reporter};

/// One item of test output, in the order it was recorded.
#[derive(Debug, Clone)]
pub enum Entry {
    /// A line passed to [`Reporter::log`].
    Log(String),
    /// A failure passed to [`Reporter::error`], with the caller's location.
    Error {
        location: &'static Location<'static>,
        message: String,
    },
    /// The finished report of a subtest.
    Subtest(Report),
}

/// Output shared between a test and the writers that log into it.
#[derive(Default)]
struct Record {
    entries: Mutex<Vec<Entry>>,
    failed: AtomicBool,
}

impl Record {
    fn push(&self, entry: Entry) {
        self.entries.lock().push(entry);
    }

    fn fail(&self) {
        self.failed.store(true, Ordering::SeqCst);
    }

    fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl LogSink for Record {
    fn log(&self, message: &str) {
        let message = message.strip_suffix('\n').unwrap_or(message);
        self.push(Entry::Log(message.to_string()));
    }
}

/// A running test.
///
/// Failures and log lines are buffered; nothing is printed unless the test
/// fails. Cleanups registered with [`Cleanupper::cleanup`] run last to
/// first when the test finishes, including when it is unwinding from a
/// panic.
///
/// Dropping an unfinished test finishes it, and a failed test then panics
/// with its report so the enclosing `#[test]` fails:
///
/// ```should_panic
/// use testutils::{check_diff, TestCase};
///
/// let t = TestCase::new("greeting");
/// check_diff(&t, "hello\n", "goodbye\n");
/// // `t` is dropped here and panics with the diff.
/// ```
///
/// Use [`TestCase::finish`] to inspect the outcome instead.
pub struct TestCase<'a> {
    name: String,
    record: Arc<Record>,
    cleanups: RefCell<Vec<Box<dyn FnOnce() + 'a>>>,
    finished: bool,
}

impl<'a> TestCase<'a> {
    /// Start a test with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record: Arc::new(Record::default()),
            cleanups: RefCell::new(Vec::new()),
            finished: false,
        }
    }

    /// The test's name; subtests are named `parent/child`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a failure has been recorded
    pub fn failed(&self) -> bool {
        self.record.failed()
    }

    /// Mark the test failed without a message
    pub fn fail(&self) {
        self.record.fail();
    }

    /// Run `f` as a subtest and return whether it passed.
    ///
    /// The subtest's cleanups run before `run` returns. A failed subtest
    /// fails this test too.
    pub fn run<'s, F>(&self, name: &str, f: F) -> bool
    where
        F: FnOnce(&TestCase<'s>),
    {
        let mut sub = TestCase::new(format!("{}/{}", self.name, name));
        f(&sub);
        let report = sub.complete();

        let passed = !report.failed();
        if !passed {
            self.fail();
        }
        self.record.push(Entry::Subtest(report));
        passed
    }

    /// Run cleanups and return the outcome without panicking.
    pub fn finish(mut self) -> Report {
        self.complete()
    }

    fn complete(&mut self) -> Report {
        self.finished = true;
        self.run_cleanups();
        Report {
            name: self.name.clone(),
            failed: self.record.failed(),
            entries: mem::take(&mut *self.record.entries.lock()),
        }
    }

    fn run_cleanups(&self) {
        // Cleanups may register further cleanups, so the borrow is released
        // before each call. A panicking cleanup does not stop the rest; the
        // first panic is resumed once the stack is empty.
        let mut panicked = None;
        loop {
            let next = self.cleanups.borrow_mut().pop();
            let Some(cleanup) = next else { break };
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(cleanup)) {
                panicked.get_or_insert(payload);
            }
        }
        if let Some(payload) = panicked {
            if !std::thread::panicking() {
                panic::resume_unwind(payload);
            }
        }
    }
}

impl Reporter for TestCase<'_> {
    #[track_caller]
    fn error(&self, message: &str) {
        self.record.fail();
        self.record.push(Entry::Error {
            location: Location::caller(),
            message: message.to_string(),
        });
    }

    fn log(&self, message: &str) {
        LogSink::log(&*self.record, message);
    }

    fn log_sink(&self) -> Arc<dyn LogSink> {
        self.record.clone()
    }
}

impl<'a> Cleanupper<'a> for TestCase<'a> {
    fn cleanup(&self, f: Box<dyn FnOnce() + 'a>) {
        self.cleanups.borrow_mut().push(f);
    }
}

impl Drop for TestCase<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let report = self.complete();
        if !report.failed() {
            return;
        }
        if std::thread::panicking() {
            eprintln!("{report}");
        } else {
            fail_harness(&report);
        }
    }
}

/// The Rust test harness only sees failures as panics.
#[allow(clippy::panic)]
fn fail_harness(report: &Report) -> ! {
    panic!("\n{report}")
}

/// The outcome of a finished [`TestCase`].
#[derive(Debug, Clone)]
pub struct Report {
    name: String,
    failed: bool,
    entries: Vec<Entry>,
}

impl Report {
    /// The test's full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this test or any of its subtests failed
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Everything recorded, in order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Messages recorded with [`Reporter::error`] by this test, not its
    /// subtests
    pub fn errors(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Error { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Lines recorded with [`Reporter::log`] by this test, not its subtests
    pub fn logs(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Log(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Find a direct subtest by its short or full name
    pub fn subtest(&self, name: &str) -> Option<&Report> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Subtest(report)
                if report.name == name
                    || report.name.rsplit('/').next() == Some(name) =>
            {
                Some(report)
            }
            _ => None,
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let status = if self.failed { "FAIL" } else { "PASS" };
        writeln!(f, "{}--- {}: {}", indent(depth), status, self.name)?;
        for entry in &self.entries {
            match entry {
                Entry::Log(message) => write_block(f, depth + 1, message)?,
                Entry::Error { location, message } => write_block(
                    f,
                    depth + 1,
                    &format!("{}:{}: {}", location.file(), location.line(), message),
                )?,
                Entry::Subtest(report) => report.render(f, depth + 1)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// Continuation lines get one extra level so multi-line messages stay grouped.
fn write_block(f: &mut fmt::Formatter<'_>, depth: usize, text: &str) -> fmt::Result {
    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        writeln!(f, "{}{}", indent(depth), first)?;
    }
    for line in lines {
        writeln!(f, "{}{}", indent(depth + 1), line)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "test_case_tests.rs"]
mod tests;
