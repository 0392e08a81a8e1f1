//! # expected-core
//!
//! A discriminated value-or-error container, [`Expected<V, E>`], and the
//! monadic algebra that chains fallible computations over it.
//!
//! Either side may be "void": the unit type `()` stands in for a payload that
//! carries no data, only presence. That gives four shapes out of one generic
//! engine:
//!
//! | shape | reads as |
//! |---|---|
//! | `Expected<V, E>` | value or error |
//! | `Expected<V, ()>` | value or nothing (an optional) |
//! | `Expected<(), E>` | success or error (a fallible action) |
//! | `Expected<(), ()>` | yes or no |
//!
//! ```rust
//! use expected_core::{Expected, Unexpected};
//!
//! let parsed: Expected<i32, String> = Expected::from_value(3);
//! let doubled = parsed
//!     .and_then(|n| n + 4)
//!     .transform(|n| n * 2)
//!     .or_else(|e| Expected::from_unexpected(Unexpected::new(e)));
//! assert_eq!(doubled.into_value().ok(), Some(14));
//! ```

pub mod access;
pub mod convert;
pub mod expected;
pub mod lifecycle;
pub mod marker;
pub mod monadic;
pub mod shape;
pub mod storage;
pub mod unexpected;

pub use access::BadAccess;
pub use expected::Expected;
pub use lifecycle::swap;
pub use marker::{EXPECT, Expect, UNEXPECT, Unexpect};
pub use monadic::{Continuation, Recovery};
pub use storage::Alternative;
pub use unexpected::Unexpected;

pub use expected_error::{Error, ErrorKind, Result};
