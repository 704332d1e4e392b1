//! Calculator error types
//!
//! [`CalcError`] covers everything the engine can refuse to do. None of these
//! are fatal: the session keeps running and the stack is left as it was before
//! the failed call.

use thiserror::Error;

/// Errors returned by [`Calculator`](super::Calculator) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The pending text is not an integer, real, or complex literal
    #[error("Invalid input: {literal}")]
    InvalidLiteral { literal: String },

    /// The stack holds fewer values than the operator consumes
    #[error("'{op}' needs {needed} operand(s), stack has {available}")]
    InsufficientOperands {
        op: char,
        needed: usize,
        available: usize,
    },

    /// The operator is not defined for the operand's kind (e.g. `%` on complex)
    #[error("'{op}' is not defined for {kind} values")]
    UnsupportedOperands { op: char, kind: &'static str },
}

impl CalcError {
    /// Whether the error should be shown to the user.
    ///
    /// Operators applied to a too-short stack are silently dropped.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, CalcError::InsufficientOperands { .. })
    }
}
