//! The container type, its constructors and its read-side API.
//!
//! Transitions between alternatives live in [`crate::lifecycle`], the
//! combinators in [`crate::monadic`], cross-type conversion in
//! [`crate::convert`] and shape-specific helpers in [`crate::shape`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::access::{BAD_ACCESS, BadAccess};
use crate::marker::Unexpect;
use crate::storage::{Alternative, Slot};
use crate::unexpected::Unexpected;

/// A value of type `V` or an error of type `E`, never both, never neither.
///
/// Either side may be `()`, which makes that side a pure presence flag.
#[derive(PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use = "an Expected may hold an error that should be handled"]
pub struct Expected<V, E = ()> {
    pub(crate) slot: Slot<V, E>,
}

impl<V, E> Expected<V, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a container holding the value alternative.
    #[inline]
    pub const fn from_value(value: V) -> Self {
        Self {
            slot: Slot::Value(value),
        }
    }

    /// Builds a container holding the error alternative.
    #[inline]
    pub const fn from_error(error: E) -> Self {
        Self {
            slot: Slot::Error(error),
        }
    }

    /// Unwraps the error wrapper into the error alternative.
    #[inline]
    pub fn from_unexpected(unexpected: Unexpected<E>) -> Self {
        Self::from_error(unexpected.into_error())
    }

    /// Builds the value in place from a closure.
    pub fn in_place_value(make: impl FnOnce() -> V) -> Self {
        Self::from_value(make())
    }

    /// Builds the error in place from a closure.
    pub fn in_place_error(make: impl FnOnce() -> E) -> Self {
        Self::from_error(make())
    }

    /// Default-constructs the error alternative.
    pub fn with_default_error(_: Unexpect) -> Self
    where
        E: Default,
    {
        Self::from_error(E::default())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether the value alternative is live.
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self.slot, Slot::Value(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        !self.has_value()
    }

    /// Which alternative is live.
    #[inline]
    pub fn alternative(&self) -> Alternative {
        self.slot.alternative()
    }

    // =========================================================================
    // Value access
    // =========================================================================

    /// Borrows the value, or reports the live error.
    pub fn value(&self) -> Result<&V, BadAccess<&E>> {
        match &self.slot {
            Slot::Value(value) => Ok(value),
            Slot::Error(error) => Err(BadAccess::value(error)),
        }
    }

    pub fn value_mut(&mut self) -> Result<&mut V, BadAccess<&mut E>> {
        match &mut self.slot {
            Slot::Value(value) => Ok(value),
            Slot::Error(error) => Err(BadAccess::value(error)),
        }
    }

    /// Moves the value out, or hands back the live error inside the
    /// bad access.
    pub fn into_value(self) -> Result<V, BadAccess<E>> {
        match self.slot {
            Slot::Value(value) => Ok(value),
            Slot::Error(error) => Err(BadAccess::value(error)),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    /// Panics with the live error if the error alternative is live.
    #[track_caller]
    pub fn unwrap_value(self) -> V
    where
        E: fmt::Debug,
    {
        match self.into_value() {
            Ok(value) => value,
            Err(access) => panic!("{}: {:?}", BAD_ACCESS, access.error()),
        }
    }

    pub fn as_value(&self) -> Option<&V> {
        match &self.slot {
            Slot::Value(value) => Some(value),
            Slot::Error(_) => None,
        }
    }

    /// Converts into an `Option`, dropping the error.
    pub fn ok(self) -> Option<V> {
        match self.slot {
            Slot::Value(value) => Some(value),
            Slot::Error(_) => None,
        }
    }

    pub fn value_or(self, default: V) -> V {
        match self.slot {
            Slot::Value(value) => value,
            Slot::Error(_) => default,
        }
    }

    /// Returns the value, or computes one from the live error.
    pub fn value_or_else(self, f: impl FnOnce(E) -> V) -> V {
        match self.slot {
            Slot::Value(value) => value,
            Slot::Error(error) => f(error),
        }
    }

    pub fn value_or_default(self) -> V
    where
        V: Default,
    {
        self.value_or_else(|_| V::default())
    }

    // =========================================================================
    // Error access
    // =========================================================================

    /// Borrows the error, or reports that the value is live.
    pub fn error(&self) -> Result<&E, BadAccess> {
        match &self.slot {
            Slot::Error(error) => Ok(error),
            Slot::Value(_) => Err(BadAccess::error_side()),
        }
    }

    pub fn error_mut(&mut self) -> Result<&mut E, BadAccess> {
        match &mut self.slot {
            Slot::Error(error) => Ok(error),
            Slot::Value(_) => Err(BadAccess::error_side()),
        }
    }

    pub fn into_error(self) -> Result<E, BadAccess> {
        match self.slot {
            Slot::Error(error) => Ok(error),
            Slot::Value(_) => Err(BadAccess::error_side()),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    /// Panics with the live value if the value alternative is live.
    #[track_caller]
    pub fn unwrap_error(self) -> E
    where
        V: fmt::Debug,
    {
        match self.slot {
            Slot::Error(error) => error,
            Slot::Value(value) => panic!("{}: {:?}", BAD_ACCESS, value),
        }
    }

    pub fn as_error(&self) -> Option<&E> {
        match &self.slot {
            Slot::Error(error) => Some(error),
            Slot::Value(_) => None,
        }
    }

    /// Converts into an `Option` of the error, dropping the value.
    pub fn err(self) -> Option<E> {
        match self.slot {
            Slot::Error(error) => Some(error),
            Slot::Value(_) => None,
        }
    }

    // =========================================================================
    // Reference forms
    // =========================================================================

    /// Borrows both sides, so combinators can run without consuming `self`.
    pub fn as_ref(&self) -> Expected<&V, &E> {
        Expected {
            slot: self.slot.as_ref(),
        }
    }

    /// Mutably borrows both sides.
    pub fn as_mut(&mut self) -> Expected<&mut V, &mut E> {
        Expected {
            slot: self.slot.as_mut(),
        }
    }

    /// Converts into the standard library result.
    pub fn into_result(self) -> Result<V, E> {
        match self.slot {
            Slot::Value(value) => Ok(value),
            Slot::Error(error) => Err(error),
        }
    }
}

impl<V: Clone, E: Clone> Expected<&V, &E> {
    /// Clones the borrowed payload into an owned container.
    pub fn cloned(self) -> Expected<V, E> {
        match self.slot {
            Slot::Value(value) => Expected::from_value(value.clone()),
            Slot::Error(error) => Expected::from_error(error.clone()),
        }
    }
}

impl<V: Copy, E: Copy> Expected<&V, &E> {
    pub fn copied(self) -> Expected<V, E> {
        match self.slot {
            Slot::Value(value) => Expected::from_value(*value),
            Slot::Error(error) => Expected::from_error(*error),
        }
    }
}

impl<V: Default, E> Default for Expected<V, E> {
    /// Holds a default-constructed value.
    fn default() -> Self {
        Self::from_value(V::default())
    }
}

impl<V: Clone, E: Clone> Clone for Expected<V, E> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }

    /// Copy-assignment with the strong guarantee across alternatives.
    ///
    /// When both sides hold the same alternative the payload is updated in
    /// place. Otherwise the source payload is cloned aside first, so a panic
    /// in `clone` leaves `self` exactly as it was.
    fn clone_from(&mut self, source: &Self) {
        match (&mut self.slot, &source.slot) {
            (Slot::Value(dst), Slot::Value(src)) => dst.clone_from(src),
            (Slot::Error(dst), Slot::Error(src)) => dst.clone_from(src),
            _ => {
                let staged = source.slot.clone();
                self.commit(staged);
            }
        }
    }
}

impl<V: Copy, E: Copy> Copy for Expected<V, E> {}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Expected<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Slot::Error(error) => f.debug_tuple("Error").field(error).finish(),
        }
    }
}

impl<V, E> From<Result<V, E>> for Expected<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<V, E> From<Expected<V, E>> for Result<V, E> {
    fn from(expected: Expected<V, E>) -> Self {
        expected.into_result()
    }
}
