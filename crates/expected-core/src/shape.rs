//! Sugar for the three degenerate shapes.
//!
//! All four shapes run on the one generic engine. What changes per shape is
//! only which conversions make sense: a void error turns the container into
//! an optional, a void value into a fallible action, and both together into
//! a flag.

use crate::expected::Expected;
use crate::storage::Slot;

// =============================================================================
// Expected<V, ()>: value or nothing
// =============================================================================

impl<V> Expected<V, ()> {
    /// The empty container.
    #[inline]
    pub const fn none() -> Self {
        Self::from_error(())
    }

    /// Drops the value, if any, and marks the container empty.
    pub fn reset(&mut self) {
        self.commit(Slot::Error(()));
    }

    /// Moves the value out, leaving the container empty.
    pub fn take(&mut self) -> Option<V> {
        match self.commit(Slot::Error(())) {
            Slot::Value(value) => Some(value),
            Slot::Error(()) => None,
        }
    }

    pub fn into_option(self) -> Option<V> {
        self.ok()
    }
}

impl<V> From<Option<V>> for Expected<V, ()> {
    fn from(option: Option<V>) -> Self {
        match option {
            Some(value) => Self::from_value(value),
            None => Self::none(),
        }
    }
}

impl<V> From<Expected<V, ()>> for Option<V> {
    fn from(expected: Expected<V, ()>) -> Self {
        expected.into_option()
    }
}

// =============================================================================
// Expected<(), E>: success or error
// =============================================================================

impl<E> Expected<(), E> {
    /// The successful outcome of an action with no result.
    #[inline]
    pub const fn success() -> Self {
        Self::from_value(())
    }
}

// =============================================================================
// Expected<(), ()>: yes or no
// =============================================================================

impl Expected<(), ()> {
    #[inline]
    pub const fn yes() -> Self {
        Self::from_value(())
    }

    #[inline]
    pub const fn no() -> Self {
        Self::from_error(())
    }

    /// Flips the flag.
    pub fn toggle(&mut self) {
        let next = match self.slot {
            Slot::Value(()) => Slot::Error(()),
            Slot::Error(()) => Slot::Value(()),
        };
        self.commit(next);
    }

    /// Copies only the presence of another container, whatever its payloads.
    pub fn from_presence<V, E>(other: &Expected<V, E>) -> Self {
        Self::from(other.has_value())
    }
}

impl From<bool> for Expected<(), ()> {
    fn from(flag: bool) -> Self {
        if flag { Self::yes() } else { Self::no() }
    }
}

impl From<Expected<(), ()>> for bool {
    fn from(expected: Expected<(), ()>) -> Self {
        expected.has_value()
    }
}
