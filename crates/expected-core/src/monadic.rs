//! The combinator algebra.
//!
//! Every combinator consumes the container and acts on the live alternative
//! only; the other alternative is passed through untouched. To run a
//! combinator without giving up the container, go through [`Expected::as_ref`]
//! or [`Expected::as_mut`] first, or clone it.
//!
//! A callback on a void side receives the unit payload, so `|()| ...` is the
//! "no arguments" form.

use crate::expected::Expected;
use crate::storage::Slot;

/// What an [`Expected::and_then`] callback may return.
///
/// Either a whole container of the same type, returned as is, or a bare value,
/// which becomes the value alternative.
pub trait Continuation<V, E> {
    fn resume(self) -> Expected<V, E>;
}

impl<V, E> Continuation<V, E> for V {
    #[inline]
    fn resume(self) -> Expected<V, E> {
        Expected::from_value(self)
    }
}

impl<V, E> Continuation<V, E> for Expected<V, E> {
    #[inline]
    fn resume(self) -> Expected<V, E> {
        self
    }
}

/// What an [`Expected::or_else`] callback may return.
///
/// A whole container replaces the failed one. A callback returning `()` runs
/// for its effect only: it gets a clone of the error and the original error
/// stays in place.
pub trait Recovery<V, E>: Sized {
    fn recover<F>(error: E, f: F) -> Expected<V, E>
    where
        F: FnOnce(E) -> Self;
}

impl<V, E> Recovery<V, E> for Expected<V, E> {
    #[inline]
    fn recover<F>(error: E, f: F) -> Expected<V, E>
    where
        F: FnOnce(E) -> Self,
    {
        f(error)
    }
}

impl<V, E: Clone> Recovery<V, E> for () {
    fn recover<F>(error: E, f: F) -> Expected<V, E>
    where
        F: FnOnce(E) -> Self,
    {
        f(error.clone());
        Expected::from_error(error)
    }
}

impl<V, E> Expected<V, E> {
    /// Chains a computation onto the value.
    ///
    /// `f` runs only when the value is live. The error type cannot change,
    /// and a live error is returned verbatim.
    pub fn and_then<F, R>(self, f: F) -> Self
    where
        F: FnOnce(V) -> R,
        R: Continuation<V, E>,
    {
        match self.slot {
            Slot::Value(value) => f(value).resume(),
            Slot::Error(error) => Self::from_error(error),
        }
    }

    /// Maps the value, keeping the error.
    ///
    /// When `f` returns `()` the result is a live void value: the callback
    /// ran for its effect only.
    pub fn transform<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self.slot {
            Slot::Value(value) => Expected::from_value(f(value)),
            Slot::Error(error) => Expected::from_error(error),
        }
    }

    /// Recovers from the error.
    ///
    /// `f` runs only when the error is live. It may return a replacement
    /// container, or `()`, in which case the original error is kept.
    pub fn or_else<F, R>(self, f: F) -> Self
    where
        F: FnOnce(E) -> R,
        R: Recovery<V, E>,
    {
        match self.slot {
            Slot::Value(value) => Self::from_value(value),
            Slot::Error(error) => R::recover(error, f),
        }
    }

    /// Runs `f` on the live error for its effect and discards its result.
    ///
    /// The error is lent rather than moved, so whatever `f` returns, the
    /// container comes back unchanged.
    pub fn or_else_effect<T>(self, f: impl FnOnce(&E) -> T) -> Self {
        if let Slot::Error(error) = &self.slot {
            f(error);
        }
        self
    }

    /// Maps the error, keeping the value.
    pub fn transform_error<G, F>(self, f: F) -> Expected<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self.slot {
            Slot::Value(value) => Expected::from_value(value),
            Slot::Error(error) => Expected::from_error(f(error)),
        }
    }

    /// Calls `f` with the value, if live.
    pub fn inspect(self, f: impl FnOnce(&V)) -> Self {
        if let Slot::Value(value) = &self.slot {
            f(value);
        }
        self
    }

    /// Calls `f` with the error, if live.
    pub fn inspect_error(self, f: impl FnOnce(&E)) -> Self {
        if let Slot::Error(error) = &self.slot {
            f(error);
        }
        self
    }
}

impl<E> Expected<(), E> {
    /// Runs `f` when the void value is live and discards its result.
    ///
    /// [`Expected::and_then`] only accepts `()` or a whole container from the
    /// callback; this form takes a callback returning anything.
    pub fn and_then_effect<T>(self, f: impl FnOnce(()) -> T) -> Self {
        if self.has_value() {
            f(());
        }
        self
    }
}

impl<V, E> Expected<Expected<V, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Expected<V, E> {
        match self.slot {
            Slot::Value(inner) => inner,
            Slot::Error(error) => Expected::from_error(error),
        }
    }
}
