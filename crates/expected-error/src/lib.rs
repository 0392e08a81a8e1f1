//! # expected-error
//!
//! Unified error handling for the `expected` workspace.
//!
//! The container itself never raises errors for domain failures: those live
//! in-band as the error alternative. This crate covers the out-of-band channel,
//! i.e. contract violations (reading the side that is not live) and failed
//! cross-type conversions.
//!
//! - **ErrorKind**: what went wrong (e.g. `BadValueAccess`, `ConversionFailed`)
//! - **Error Context**: where it went wrong, as key-value pairs
//! - **Error Source**: the underlying error, boxed, without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use expected_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ConversionFailed, "value out of range")
//!         .with_operation("expected::try_convert_from")
//!         .with_context("side", "value"))
//! }
//! ```
//!
//! ## Principles
//!
//! - Fallible workspace APIs return `Result<T, expected_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the workspace Error
pub type Result<T> = std::result::Result<T, Error>;
