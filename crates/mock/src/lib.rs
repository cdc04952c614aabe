// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reversible state changes for tests.
//!
//! A [`Mock`] can be installed and restored. Instead of pairing every
//! replacement with a manual teardown:
//!
//! ```
//! use std::cell::Cell;
//! use testutils_mock::{bind, Mock};
//!
//! let endpoint = Cell::new("https://prod");
//! let retries = Cell::new(3);
//!
//! let mut first = bind(&endpoint, "http://localhost");
//! first.install();
//! let mut second = bind(&retries, 0);
//! second.install();
//! // ...
//! second.restore();
//! first.restore();
//! # assert_eq!(endpoint.get(), "https://prod");
//! ```
//!
//! the replacements can be grouped and undone together, in reverse order:
//!
//! ```
//! use std::cell::Cell;
//! use testutils_mock::{bind, group, Mock};
//!
//! let endpoint = Cell::new("https://prod");
//! let retries = Cell::new(3);
//!
//! let mut mocks = group![bind(&endpoint, "http://localhost"), bind(&retries, 0)];
//! mocks.install();
//! assert_eq!(endpoint.get(), "http://localhost");
//! mocks.restore();
//! assert_eq!((endpoint.get(), retries.get()), ("https://prod", 3));
//! ```
//!
//! or handed to anything that runs cleanups at the end of a test with
//! [`until_cleanup`].

mod bind;
mod group;

pub use bind::{bind, Bind, Slot};
pub use group::Group;

/// A reversible change to some state.
pub trait Mock {
    /// Apply the change.
    fn install(&mut self);
    /// Undo the change made by [`Mock::install`].
    fn restore(&mut self);
}

/// Install each mock, first to last.
///
/// There is no rollback: if an install panics, the mocks before it stay
/// installed.
pub fn install<M: Mock>(mocks: &mut [M]) {
    for mock in mocks.iter_mut() {
        mock.install();
    }
}

/// Restore each mock, last to first, so mocks that depend on earlier ones
/// are undone before them.
pub fn restore<M: Mock>(mocks: &mut [M]) {
    for mock in mocks.iter_mut().rev() {
        mock.restore();
    }
}

/// Something that can run a callback when a test ends.
///
/// Callbacks are expected to run once, after the test and its subtests
/// complete, in reverse registration order.
pub trait Cleanupper<'a> {
    /// Register `f` to run at the end of the test.
    fn cleanup(&self, f: Box<dyn FnOnce() + 'a>);
}

/// Install `mocks` now and restore them when `t` runs its cleanups.
///
/// `mocks` is any [`Mock`]: a single [`Bind`], a tuple, or a [`Group`].
pub fn until_cleanup<'a, C, M>(t: &C, mut mocks: M)
where
    C: Cleanupper<'a> + ?Sized,
    M: Mock + 'a,
{
    mocks.install();
    t.cleanup(Box::new(move || mocks.restore()));
}

impl<M: Mock + ?Sized> Mock for Box<M> {
    fn install(&mut self) {
        (**self).install();
    }

    fn restore(&mut self) {
        (**self).restore();
    }
}

impl<M: Mock + ?Sized> Mock for &mut M {
    fn install(&mut self) {
        (**self).install();
    }

    fn restore(&mut self) {
        (**self).restore();
    }
}

impl<M: Mock> Mock for Vec<M> {
    fn install(&mut self) {
        install(self);
    }

    fn restore(&mut self) {
        restore(self);
    }
}

impl<M: Mock, const N: usize> Mock for [M; N] {
    fn install(&mut self) {
        install(self);
    }

    fn restore(&mut self) {
        restore(self);
    }
}

// Tuples install left to right and restore right to left.
macro_rules! tuple_mock {
    ($($name:ident . $idx:tt),+ ; $($rev:tt),+) => {
        impl<$($name: Mock),+> Mock for ($($name,)+) {
            fn install(&mut self) {
                $(self.$idx.install();)+
            }

            fn restore(&mut self) {
                $(self.$rev.restore();)+
            }
        }
    };
}

tuple_mock!(A.0; 0);
tuple_mock!(A.0, B.1; 1, 0);
tuple_mock!(A.0, B.1, C.2; 2, 1, 0);
tuple_mock!(A.0, B.1, C.2, D.3; 3, 2, 1, 0);
tuple_mock!(A.0, B.1, C.2, D.3, E.4; 4, 3, 2, 1, 0);
tuple_mock!(A.0, B.1, C.2, D.3, E.4, F.5; 5, 4, 3, 2, 1, 0);

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
