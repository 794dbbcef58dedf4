//! Error kinds for nodetag operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to tell input-contract violations apart from
/// plain I/O trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Generation errors
    // =========================================================================
    /// A tag lacks the namespace prefix required to derive a method name
    MalformedTagName,

    /// A symbol space grew into the value range of another space
    RangeOverflow,

    /// Invariant violation
    InvariantViolation,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether this kind reports a broken input contract rather than an
    /// environment problem.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            ErrorKind::MalformedTagName | ErrorKind::RangeOverflow | ErrorKind::InvariantViolation
        )
    }
}
