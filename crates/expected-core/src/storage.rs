//! Tagged storage: the discriminant and the slot holding the live payload.
//!
//! The slot is a closed two-case enum, so the "exactly one alternative is
//! live" invariant is enforced by the type system and drop glue destroys
//! exactly the live member. A void side is the unit type and costs nothing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

/// Which alternative of an [`Expected`](crate::Expected) is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alternative {
    /// The success payload is live.
    Value,
    /// The error payload is live.
    Error,
}

impl Alternative {
    /// Returns the alternative as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    #[inline]
    pub fn is_value(self) -> bool {
        matches!(self, Alternative::Value)
    }

    /// The other alternative.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Alternative::Value => Alternative::Error,
            Alternative::Error => Alternative::Value,
        }
    }
}

impl From<bool> for Alternative {
    fn from(has_value: bool) -> Self {
        if has_value {
            Alternative::Value
        } else {
            Alternative::Error
        }
    }
}

/// Storage for at most one payload. The variant is the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub(crate) enum Slot<V, E> {
    Value(V),
    Error(E),
}

impl<V, E> Slot<V, E> {
    #[inline]
    pub(crate) fn alternative(&self) -> Alternative {
        match self {
            Slot::Value(_) => Alternative::Value,
            Slot::Error(_) => Alternative::Error,
        }
    }

    pub(crate) fn as_ref(&self) -> Slot<&V, &E> {
        match self {
            Slot::Value(value) => Slot::Value(value),
            Slot::Error(error) => Slot::Error(error),
        }
    }

    pub(crate) fn as_mut(&mut self) -> Slot<&mut V, &mut E> {
        match self {
            Slot::Value(value) => Slot::Value(value),
            Slot::Error(error) => Slot::Error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternative_display() {
        assert_eq!(Alternative::Value.to_string(), "Value");
        assert_eq!(Alternative::Error.as_str(), "Error");
    }

    #[test]
    fn test_opposite_is_an_involution() {
        for alt in [Alternative::Value, Alternative::Error] {
            assert_ne!(alt.opposite(), alt);
            assert_eq!(alt.opposite().opposite(), alt);
        }
    }

    #[test]
    fn test_alternative_from_flag() {
        assert_eq!(Alternative::from(true), Alternative::Value);
        assert_eq!(Alternative::from(false), Alternative::Error);
        assert!(Alternative::from(true).is_value());
    }

    #[test]
    fn test_slot_tracks_live_member() {
        let mut slot: Slot<u8, &str> = Slot::Value(1);
        assert_eq!(slot.alternative(), Alternative::Value);
        slot = Slot::Error("boom");
        assert_eq!(slot.alternative(), Alternative::Error);
        assert_eq!(slot.as_ref(), Slot::Error(&"boom"));
    }

    #[test]
    fn test_void_slot_is_flag_sized() {
        assert_eq!(std::mem::size_of::<Slot<(), ()>>(), 1);
        assert_eq!(
            std::mem::size_of::<Slot<u64, ()>>(),
            std::mem::size_of::<Option<u64>>()
        );
    }
}
