//! Presence markers.
//!
//! When a side is void there is no payload expression to tell "construct as
//! value" apart from "construct as error". These two stateless tokens carry
//! that choice instead.

use crate::Expected;

/// Selects the value alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Expect;

/// Selects the error alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unexpect;

/// "Construct as value."
pub const EXPECT: Expect = Expect;

/// "Construct as error."
pub const UNEXPECT: Unexpect = Unexpect;

impl<E> From<Expect> for Expected<(), E> {
    fn from(_: Expect) -> Self {
        Expected::from_value(())
    }
}

impl<V> From<Unexpect> for Expected<V, ()> {
    fn from(_: Unexpect) -> Self {
        Expected::from_error(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_builds_live_void_value() {
        let done: Expected<(), String> = EXPECT.into();
        assert!(done.has_value());
    }

    #[test]
    fn test_unexpect_builds_void_error() {
        let missing: Expected<u32, ()> = UNEXPECT.into();
        assert!(!missing.has_value());
    }

    #[test]
    fn test_markers_on_boolean_shape() {
        assert!(Expected::<(), ()>::from(EXPECT).has_value());
        assert!(!Expected::<(), ()>::from(UNEXPECT).has_value());
    }

    #[test]
    fn test_markers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Expect>(), 0);
        assert_eq!(std::mem::size_of::<Unexpect>(), 0);
    }
}
