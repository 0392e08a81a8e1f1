//! The error wrapper.
//!
//! `Unexpected<E>` owns exactly one error payload and exists so that an error
//! can be handed to a container without being mistaken for a value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Expected;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Unexpected<E> {
    error: E,
}

impl<E> Unexpected<E> {
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// Builds the carried error from a closure.
    pub fn from_fn(make: impl FnOnce() -> E) -> Self {
        Self::new(make())
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn error_mut(&mut self) -> &mut E {
        &mut self.error
    }

    pub fn into_error(self) -> E {
        self.error
    }

    pub fn map<G>(self, f: impl FnOnce(E) -> G) -> Unexpected<G> {
        Unexpected::new(f(self.error))
    }
}

impl<V, E> From<Unexpected<E>> for Expected<V, E> {
    fn from(unexpected: Unexpected<E>) -> Self {
        Expected::from_unexpected(unexpected)
    }
}
