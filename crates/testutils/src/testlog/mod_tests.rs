// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::TestCase;
use serial_test::serial;

/// Swap in a buffer for the duration of `f`, returning what it caught.
fn with_outer_buffer(f: impl FnOnce()) -> String {
    let outer = SharedBuffer::new();
    let original = swap_default_output(Box::new(outer.clone()));
    f();
    swap_default_output(original);
    outer.contents()
}

#[test]
#[serial(testutils_output, testutils_env)]
fn override_sends_default_loggers_to_test() {
    let t = TestCase::new("override");
    override_default(&t);
    log::Log::log(
        &logger(&t),
        &log::Record::builder()
            .level(log::Level::Info)
            .target("custom")
            .args(format_args!("to custom logger"))
            .build(),
    );
    log::info!("to standard logger");
    tracing::info!("to tracing");

    let report = t.finish();
    let logs = report.logs().join("\n");
    assert!(logs.contains("to custom logger"), "{logs}");
    assert!(logs.contains("to standard logger"), "{logs}");
    assert!(logs.contains("to tracing"), "{logs}");
    assert!(!report.failed());
}

#[test]
#[serial(testutils_output, testutils_env)]
fn tee_copies_to_writer() {
    let t = TestCase::new("tee");
    override_default(&t);
    let buffer = SharedBuffer::new();
    tee(&t, buffer.clone());
    log::info!("tee to standard logger");

    assert!(buffer.contents().contains("tee to standard logger"));
    let report = t.finish();
    assert!(report
        .logs()
        .iter()
        .any(|line| line.contains("tee to standard logger")));
}

#[test]
#[serial(testutils_output, testutils_env)]
fn original_output_restored_after_test() {
    let mut report = None;
    let outer = with_outer_buffer(|| {
        let t = TestCase::new("restore");
        override_default(&t);
        tracing::info!("inside test");
        report = Some(t.finish());
        tracing::info!("after test");
    });

    let report = report.unwrap();
    let logs = report.logs().join("\n");
    assert!(logs.contains("inside test"), "{logs}");
    assert!(!logs.contains("after test"), "{logs}");
    assert!(outer.contains("after test"), "{outer}");
    assert!(!outer.contains("inside test"), "{outer}");
}

#[test]
#[serial(testutils_output, testutils_env)]
fn subtest_override_ends_with_subtest() {
    let t = TestCase::new("parent");
    override_default(&t);

    t.run("child", |t| {
        override_default(t);
        tracing::info!("inside child");
    });
    tracing::info!("back in parent");

    let report = t.finish();
    let child = report.subtest("child").unwrap();
    let child_logs = child.logs().join("\n");
    let parent_logs = report.logs().join("\n");
    assert!(child_logs.contains("inside child"), "{child_logs}");
    assert!(!child_logs.contains("back in parent"), "{child_logs}");
    assert!(parent_logs.contains("back in parent"), "{parent_logs}");
    assert!(!parent_logs.contains("inside child"), "{parent_logs}");
}

#[test]
#[serial(testutils_output, testutils_env)]
fn tee_write_errors_reach_the_logger() {
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let t = TestCase::new("tee errors");
    tee(&t, Closed);
    let err = DefaultOutput.write_all(b"dropped line\n").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);

    let report = t.finish();
    assert_eq!(report.logs(), vec!["dropped line"]);
}
