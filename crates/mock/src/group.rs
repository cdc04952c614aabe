// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Heterogeneous mock collections.

use crate::{install, restore, Mock};

/// A collection of mocks treated as one.
///
/// Installs in insertion order and restores in reverse.
#[derive(Default)]
pub struct Group<'a> {
    mocks: Vec<Box<dyn Mock + 'a>>,
}

impl<'a> Group<'a> {
    /// Create an empty group
    pub fn new() -> Self {
        Self { mocks: Vec::new() }
    }

    /// Append a mock, builder style
    pub fn with<M: Mock + 'a>(mut self, mock: M) -> Self {
        self.push(mock);
        self
    }

    /// Append a mock
    pub fn push<M: Mock + 'a>(&mut self, mock: M) {
        self.mocks.push(Box::new(mock));
    }

    /// Number of mocks in the group
    pub fn len(&self) -> usize {
        self.mocks.len()
    }

    /// Check if the group is empty
    pub fn is_empty(&self) -> bool {
        self.mocks.is_empty()
    }
}

impl Mock for Group<'_> {
    fn install(&mut self) {
        install(&mut self.mocks);
    }

    fn restore(&mut self) {
        restore(&mut self.mocks);
    }
}

impl<'a> From<Vec<Box<dyn Mock + 'a>>> for Group<'a> {
    fn from(mocks: Vec<Box<dyn Mock + 'a>>) -> Self {
        Self { mocks }
    }
}

impl<'a> FromIterator<Box<dyn Mock + 'a>> for Group<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Mock + 'a>>>(iter: I) -> Self {
        Self {
            mocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<Box<dyn Mock + 'a>> for Group<'a> {
    fn extend<I: IntoIterator<Item = Box<dyn Mock + 'a>>>(&mut self, iter: I) {
        self.mocks.extend(iter);
    }
}

/// Build a [`Group`] from a list of mocks of any types.
///
/// ```
/// use std::cell::Cell;
/// use testutils_mock::{bind, group};
///
/// let name = Cell::new("a");
/// let count = Cell::new(1);
/// let mocks = group![bind(&name, "b"), bind(&count, 2)];
/// assert_eq!(mocks.len(), 2);
/// ```
#[macro_export]
macro_rules! group {
    () => {
        $crate::Group::new()
    };
    ($($mock:expr),+ $(,)?) => {
        $crate::Group::new()$(.with($mock))+
    };
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
