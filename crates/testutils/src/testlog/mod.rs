// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Control over logging during tests.
//!
//! Lines written with [`Reporter::log`] only show up when their test fails.
//! Code under test that logs through the `tracing` or `log` macros writes to
//! a process-wide output instead, so every failure would show the log noise
//! of every test. The functions here send that output to the current test:
//!
//! ```
//! use testutils::{testlog, TestCase};
//!
//! let t = TestCase::new("quiet on success");
//! testlog::override_default(&t);
//! tracing::info!("only printed if this test fails");
//! # let report = t.finish();
//! # assert!(report.logs().iter().any(|l| l.contains("only printed")));
//! ```
//!
//! The default output is shared by the whole process: tests that override
//! it must not run concurrently with each other.

mod config;
mod logger;
mod output;
mod writer;

use std::io::Write;

use crate::mock::Cleanupper;
use crate::reporter::Reporter;

pub use config::{LogConfig, LogFormat};
pub use logger::{logger, structured_logger, TestLogger};
pub use output::{init, swap_default_output, DefaultOutput};
pub use writer::{SharedBuffer, TeeWriter, Writer};

/// Send the default loggers' output to `t`'s log until `t` finishes.
pub fn override_default<'a, T>(t: &T)
where
    T: Reporter + Cleanupper<'a> + ?Sized,
{
    redirect(t, Box::new(Writer::new(t)));
}

/// Like [`override_default`], and also copy the output to `w`.
///
/// Write errors from `w` are returned to the logger.
pub fn tee<'a, T, W>(t: &T, w: W)
where
    T: Reporter + Cleanupper<'a> + ?Sized,
    W: Write + Send + 'static,
{
    redirect(t, Box::new(TeeWriter::new(t, w)));
}

fn redirect<'a, T>(t: &T, writer: Box<dyn Write + Send>)
where
    T: Reporter + Cleanupper<'a> + ?Sized,
{
    if let Err(err) = init() {
        t.log(&format!(
            "testlog: {err}; default log output may not reach this test"
        ));
    }
    let previous = swap_default_output(writer);
    t.cleanup(Box::new(move || {
        swap_default_output(previous);
    }));
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
