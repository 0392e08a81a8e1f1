//! A value-or-error container with a chainable combinator algebra.
//!
//! This crate is the public face of the workspace: it re-exports the
//! container from `expected-core` and the workspace error from
//! `expected-error`. Most callers only need the prelude.
//!
//! ```rust
//! use expected::prelude::*;
//!
//! fn parse_port(raw: &str) -> Expected<u16, String> {
//!     raw.parse::<u16>().map_err(|err| err.to_string()).into()
//! }
//!
//! let port = parse_port("8080")
//!     .and_then(|p| {
//!         if p < 1024 {
//!             Expected::from_error(format!("{p} is privileged"))
//!         } else {
//!             Expected::from_value(p)
//!         }
//!     })
//!     .transform(u32::from);
//! assert_eq!(port.value(), Ok(&8080));
//!
//! let missing = parse_port("").or_else(|_| Expected::from_value(80));
//! assert_eq!(missing.value(), Ok(&80));
//! ```

pub use expected_core::{
    Alternative, BadAccess, Continuation, EXPECT, Expect, Expected, Recovery, UNEXPECT,
    Unexpect, Unexpected, swap,
};
pub use expected_error::{Error, ErrorKind, Result};

pub mod prelude {
    pub use expected_core::{BadAccess, EXPECT, Expected, UNEXPECT, Unexpected};
}
