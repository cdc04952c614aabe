// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers shared across projects.
//!
//! - [`TestCase`]: a test that buffers failures and logs, runs cleanups,
//!   and supports subtests. It implements [`Reporter`] and
//!   [`mock::Cleanupper`], the interfaces every other helper takes.
//! - [`check_error`], [`check_diff`], [`check_deep_equal`],
//!   [`check_json_equal`]: comparisons that record a failure and return
//!   `false` instead of panicking.
//! - [`mock`]: install/restore mocks, restorable at the end of a test.
//! - [`testlog`]: send the default loggers' output to the current test.
//!
//! ```
//! use std::cell::Cell;
//! use testutils::mock::{bind, until_cleanup};
//! use testutils::{check_diff, check_error, TestCase};
//!
//! let retries = Cell::new(3);
//! let t = TestCase::new("render");
//! t.run("no retries", |t| {
//!     until_cleanup(t, bind(&retries, 0));
//!     check_error(t, &"7".parse::<u8>(), "");
//!     check_diff(t, format!("retries={}\n", retries.get()), "retries=0\n");
//! });
//! assert_eq!(retries.get(), 3);
//! assert!(!t.finish().failed());
//! ```

mod check;
pub mod deep;
pub mod env;
mod error;
mod reporter;
mod test_case;
pub mod testlog;

/// Re-exported mock types from the testutils-mock crate.
pub mod mock {
    pub use testutils_mock::{
        bind, group, install, restore, until_cleanup, Bind, Cleanupper, Group, Mock, Slot,
    };
}

pub use check::{check_deep_equal, check_diff, check_error, check_json_equal};
pub use error::Error;
pub use reporter::{LogSink, Reporter};
pub use test_case::{Entry, Report, TestCase};
