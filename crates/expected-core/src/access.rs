//! Bad access: the contract violation raised when the side that is not live
//! gets read.
//!
//! Reading the value while the error is live yields a `BadAccess<E>` that
//! carries the live error (by reference or by value, matching the accessor).
//! Reading the error while the value is live yields the generic marker
//! `BadAccess<()>`.

use std::fmt;

use expected_error::Error;

use crate::storage::Alternative;

pub(crate) const BAD_ACCESS: &str = "bad access to expected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadAccess<E = ()> {
    requested: Alternative,
    error: E,
}

impl<E> BadAccess<E> {
    /// The value was requested; `error` is what was live instead.
    pub(crate) fn value(error: E) -> Self {
        tracing::debug!(requested = "value", "{}", BAD_ACCESS);
        Self {
            requested: Alternative::Value,
            error,
        }
    }

    /// The alternative the caller tried to read.
    pub fn requested(&self) -> Alternative {
        self.requested
    }

    /// The live error, when the value was requested.
    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn error_mut(&mut self) -> &mut E {
        &mut self.error
    }

    pub fn into_error(self) -> E {
        self.error
    }

    pub fn map<G>(self, f: impl FnOnce(E) -> G) -> BadAccess<G> {
        BadAccess {
            requested: self.requested,
            error: f(self.error),
        }
    }
}

impl BadAccess {
    /// The error was requested while the value was live.
    pub(crate) fn error_side() -> Self {
        tracing::debug!(requested = "error", "{}", BAD_ACCESS);
        Self {
            requested: Alternative::Error,
            error: (),
        }
    }
}

impl<E> fmt::Display for BadAccess<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BAD_ACCESS)
    }
}

impl<E: fmt::Debug> std::error::Error for BadAccess<E> {}

impl<E: fmt::Debug> From<BadAccess<E>> for Error {
    fn from(access: BadAccess<E>) -> Self {
        match access.requested {
            Alternative::Value => Error::bad_value_access(BAD_ACCESS)
                .with_operation("expected::value")
                .with_context("live_error", format!("{:?}", access.error)),
            Alternative::Error => {
                Error::bad_error_access(BAD_ACCESS).with_operation("expected::error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expected_error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_request_carries_error() {
        let access = BadAccess::value(42);
        assert_eq!(access.requested(), Alternative::Value);
        assert_eq!(*access.error(), 42);
        assert_eq!(access.into_error(), 42);
    }

    #[test]
    fn test_error_request_is_generic_marker() {
        let access = BadAccess::error_side();
        assert_eq!(access.requested(), Alternative::Error);
        assert_eq!(access.to_string(), "bad access to expected");
    }

    #[test]
    fn test_map_keeps_requested_side() {
        let access = BadAccess::value("io").map(str::len);
        assert_eq!(access.requested(), Alternative::Value);
        assert_eq!(*access.error(), 2);
    }

    #[test]
    fn test_converts_into_workspace_error() {
        let err: Error = BadAccess::value(String::from("timeout")).into();
        assert_eq!(err.kind(), ErrorKind::BadValueAccess);
        assert_eq!(err.operation(), "expected::value");
        assert_eq!(err.context_value("live_error"), Some("\"timeout\""));

        let err: Error = BadAccess::error_side().into();
        assert_eq!(err.kind(), ErrorKind::BadErrorAccess);
        assert!(err.kind().is_contract_violation());
    }

    #[test]
    fn test_is_std_error() {
        let access = BadAccess::value(1u8);
        let _: &dyn std::error::Error = &access;
    }
}
