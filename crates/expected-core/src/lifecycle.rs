//! The lifecycle engine: every operation that changes which alternative is
//! live, or replaces the live payload.
//!
//! A transition always builds the incoming payload before the outgoing one is
//! touched. If building fails (an `Err` from the factory, or a panic) nothing
//! has been mutated, so the container is observably identical to before the
//! call. Committing is a move, and moves cannot fail, so once the new payload
//! exists the rest of the transition cannot fail either.

use std::mem;

use crate::expected::Expected;
use crate::storage::Slot;
use crate::unexpected::Unexpected;

impl<V, E> Expected<V, E> {
    /// Replaces the slot wholesale and returns the previous one.
    pub(crate) fn commit(&mut self, next: Slot<V, E>) -> Slot<V, E> {
        let from = self.slot.alternative();
        let to = next.alternative();
        if from != to {
            tracing::trace!(%from, %to, "reinit");
        }
        mem::replace(&mut self.slot, next)
    }

    fn live_value(&mut self) -> &mut V {
        match &mut self.slot {
            Slot::Value(value) => value,
            Slot::Error(_) => unreachable!("value alternative was just committed"),
        }
    }

    fn live_error(&mut self) -> &mut E {
        match &mut self.slot {
            Slot::Error(error) => error,
            Slot::Value(_) => unreachable!("error alternative was just committed"),
        }
    }

    // =========================================================================
    // Reinit
    // =========================================================================

    /// Makes the value alternative live, whatever was live before.
    pub fn reinit_value(&mut self, value: V) -> &mut V {
        self.commit(Slot::Value(value));
        self.live_value()
    }

    /// Makes the error alternative live, whatever was live before.
    pub fn reinit_error(&mut self, error: E) -> &mut E {
        self.commit(Slot::Error(error));
        self.live_error()
    }

    /// Makes the value alternative live from a factory that may fail.
    ///
    /// On `Err` the container keeps its previous alternative and payload and
    /// the factory's error is returned.
    pub fn try_reinit_value<X>(
        &mut self,
        make: impl FnOnce() -> Result<V, X>,
    ) -> Result<&mut V, X> {
        match make() {
            Ok(value) => Ok(self.reinit_value(value)),
            Err(err) => {
                tracing::debug!(kept = %self.alternative(), "value reinit rolled back");
                Err(err)
            }
        }
    }

    /// Makes the error alternative live from a factory that may fail.
    pub fn try_reinit_error<X>(
        &mut self,
        make: impl FnOnce() -> Result<E, X>,
    ) -> Result<&mut E, X> {
        match make() {
            Ok(error) => Ok(self.reinit_error(error)),
            Err(err) => {
                tracing::debug!(kept = %self.alternative(), "error reinit rolled back");
                Err(err)
            }
        }
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// Move-assigns another container into this one.
    pub fn assign(&mut self, other: Self) {
        let next = match (&mut self.slot, other.slot) {
            (Slot::Value(dst), Slot::Value(src)) => {
                *dst = src;
                return;
            }
            (Slot::Error(dst), Slot::Error(src)) => {
                *dst = src;
                return;
            }
            (_, next) => next,
        };
        self.commit(next);
    }

    /// Assigns a value: in place if the value is live, otherwise by reinit.
    pub fn assign_value(&mut self, value: V) {
        match &mut self.slot {
            Slot::Value(dst) => *dst = value,
            Slot::Error(_) => {
                self.reinit_value(value);
            }
        }
    }

    /// Assigns an error: in place if the error is live, otherwise by reinit.
    pub fn assign_error(&mut self, unexpected: Unexpected<E>) {
        let error = unexpected.into_error();
        match &mut self.slot {
            Slot::Error(dst) => *dst = error,
            Slot::Value(_) => {
                self.reinit_error(error);
            }
        }
    }

    // =========================================================================
    // Emplace and swap
    // =========================================================================

    /// Drops whatever is live and stores `value`.
    pub fn emplace(&mut self, value: V) -> &mut V {
        self.reinit_value(value)
    }

    /// Builds a value and stores it, dropping whatever was live.
    ///
    /// `make` runs before the container is touched, so if it panics the
    /// previous payload is still in place.
    pub fn emplace_with(&mut self, make: impl FnOnce() -> V) -> &mut V {
        let value = make();
        self.reinit_value(value)
    }

    /// Exchanges the contents of two containers.
    ///
    /// Same alternatives swap payloads; different alternatives trade places.
    /// No payload is constructed or dropped, so this cannot fail.
    pub fn swap(&mut self, other: &mut Self) {
        let (ours, theirs) = (self.alternative(), other.alternative());
        if ours != theirs {
            tracing::trace!(from = %ours, to = %theirs, "swap across alternatives");
        }
        mem::swap(&mut self.slot, &mut other.slot);
    }

    /// Takes the contents, leaving `replacement` behind.
    pub fn replace(&mut self, replacement: Self) -> Self {
        Self {
            slot: self.commit(replacement.slot),
        }
    }
}

/// Free-function form of [`Expected::swap`].
pub fn swap<V, E>(lhs: &mut Expected<V, E>, rhs: &mut Expected<V, E>) {
    lhs.swap(rhs);
}
