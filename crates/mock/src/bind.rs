// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mocks that overwrite a value and put the original back.

use std::cell::{Cell, RefCell};
use std::mem;
use std::rc::Rc;
use std::sync::atomic::{
    AtomicBool, AtomicI32, AtomicI64, AtomicIsize, AtomicU32, AtomicU64, AtomicUsize, Ordering,
};
use std::sync::{Arc, PoisonError};

use crate::Mock;

/// A shared location whose value can be swapped out.
pub trait Slot {
    /// The stored value type.
    type Value;

    /// Store `value`, returning what was there before.
    fn replace(&self, value: Self::Value) -> Self::Value;
}

impl<T> Slot for Cell<T> {
    type Value = T;

    fn replace(&self, value: T) -> T {
        Cell::replace(self, value)
    }
}

/// Panics if the cell is borrowed at install or restore time.
impl<T> Slot for RefCell<T> {
    type Value = T;

    fn replace(&self, value: T) -> T {
        RefCell::replace(self, value)
    }
}

impl<T> Slot for parking_lot::Mutex<T> {
    type Value = T;

    fn replace(&self, value: T) -> T {
        mem::replace(&mut *self.lock(), value)
    }
}

impl<T> Slot for parking_lot::RwLock<T> {
    type Value = T;

    fn replace(&self, value: T) -> T {
        mem::replace(&mut *self.write(), value)
    }
}

// A test that panicked while holding the lock should not stop the restore.
impl<T> Slot for std::sync::Mutex<T> {
    type Value = T;

    fn replace(&self, value: T) -> T {
        let mut guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        mem::replace(&mut *guard, value)
    }
}

impl<T> Slot for std::sync::RwLock<T> {
    type Value = T;

    fn replace(&self, value: T) -> T {
        let mut guard = self.write().unwrap_or_else(PoisonError::into_inner);
        mem::replace(&mut *guard, value)
    }
}

macro_rules! atomic_slot {
    ($($atomic:ty => $value:ty),+ $(,)?) => {
        $(
            impl Slot for $atomic {
                type Value = $value;

                fn replace(&self, value: $value) -> $value {
                    self.swap(value, Ordering::SeqCst)
                }
            }
        )+
    };
}

atomic_slot! {
    AtomicBool => bool,
    AtomicI32 => i32,
    AtomicI64 => i64,
    AtomicIsize => isize,
    AtomicU32 => u32,
    AtomicU64 => u64,
    AtomicUsize => usize,
}

impl<S: Slot + ?Sized> Slot for &S {
    type Value = S::Value;

    fn replace(&self, value: S::Value) -> S::Value {
        (**self).replace(value)
    }
}

impl<S: Slot + ?Sized> Slot for Rc<S> {
    type Value = S::Value;

    fn replace(&self, value: S::Value) -> S::Value {
        (**self).replace(value)
    }
}

impl<S: Slot + ?Sized> Slot for Arc<S> {
    type Value = S::Value;

    fn replace(&self, value: S::Value) -> S::Value {
        (**self).replace(value)
    }
}

enum State<T> {
    /// Holds the mock value, waiting to be installed.
    Pending(T),
    /// Holds the original value taken out of the slot.
    Installed(T),
    /// Transient, only seen between take and put back.
    Empty,
}

/// A [`Mock`] that stores a value in a [`Slot`] on install and puts the
/// original back on restore.
///
/// Restoring keeps the mock value, so the same `Bind` can be installed
/// again. Installing an installed `Bind`, or restoring one that is not
/// installed, does nothing.
pub struct Bind<S: Slot> {
    slot: S,
    state: State<S::Value>,
}

/// Create a [`Bind`] that sets `slot` to `value` while installed.
///
/// ```
/// use parking_lot::Mutex;
/// use testutils_mock::{bind, Mock};
///
/// static ENDPOINT: Mutex<&str> = parking_lot::const_mutex("https://prod");
///
/// let mut mock = bind(&ENDPOINT, "http://localhost");
/// mock.install();
/// assert_eq!(*ENDPOINT.lock(), "http://localhost");
/// mock.restore();
/// assert_eq!(*ENDPOINT.lock(), "https://prod");
/// ```
pub fn bind<S: Slot>(slot: S, value: S::Value) -> Bind<S> {
    Bind {
        slot,
        state: State::Pending(value),
    }
}

impl<S: Slot> Bind<S> {
    /// Check whether the mock value is currently in the slot
    pub fn is_installed(&self) -> bool {
        matches!(self.state, State::Installed(_))
    }
}

impl<S: Slot> Mock for Bind<S> {
    fn install(&mut self) {
        self.state = match mem::replace(&mut self.state, State::Empty) {
            State::Pending(value) => State::Installed(self.slot.replace(value)),
            other => other,
        };
    }

    fn restore(&mut self) {
        self.state = match mem::replace(&mut self.state, State::Empty) {
            State::Installed(original) => State::Pending(self.slot.replace(original)),
            other => other,
        };
    }
}

#[cfg(test)]
#[path = "bind_tests.rs"]
mod tests;
