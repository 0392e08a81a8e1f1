//! Error kinds for container operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to tell a contract violation apart from a
/// conversion that could not be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Contract violations
    // =========================================================================
    /// The value was read while the error alternative was live
    BadValueAccess,

    /// The error was read while the value alternative was live
    BadErrorAccess,

    // =========================================================================
    // Conversion errors
    // =========================================================================
    /// A payload could not be converted into the target payload type
    ConversionFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this kind signals a programming error rather than bad input
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, ErrorKind::BadValueAccess | ErrorKind::BadErrorAccess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::BadValueAccess.to_string(), "BadValueAccess");
        assert_eq!(ErrorKind::ConversionFailed.as_str(), "ConversionFailed");
    }

    #[test]
    fn test_is_contract_violation() {
        assert!(ErrorKind::BadValueAccess.is_contract_violation());
        assert!(ErrorKind::BadErrorAccess.is_contract_violation());
        assert!(!ErrorKind::ConversionFailed.is_contract_violation());
    }
}
