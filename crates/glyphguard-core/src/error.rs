//! Unified error type for the workspace.
//!
//! Detection itself never fails: malformed input (an empty name, an
//! unresolvable node) is a benign no-finding, and per-symbol or per-file
//! problems never abort the pass. Errors surface only around remediation,
//! where a host rename facility can reject a request. Subsystem errors are
//! bridged into [`GuardError`] via `From` implementations (the engine crate
//! provides the bridge for its rename errors).

use thiserror::Error;

/// Unified error type surfaced to callers of the engine.
#[derive(Debug, Error)]
pub enum GuardError {
    /// Bad input from the caller (e.g. an empty replacement name).
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// The remediation target does not denote a known symbol.
    #[error("no symbol found for {target}")]
    SymbolNotFound { target: String },

    /// A namespace name-reference node does not resolve to a declaration.
    #[error("namespace reference does not resolve to a declaration")]
    UnresolvedNamespace,

    /// The host rename facility rejected the request.
    #[error("rename rejected by host: {reason}")]
    RenameRejected { reason: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl GuardError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        GuardError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a symbol not found error.
    pub fn symbol_not_found(target: impl Into<String>) -> Self {
        GuardError::SymbolNotFound {
            target: target.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        GuardError::Internal {
            message: message.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GuardError::invalid_args("empty name").to_string(),
            "invalid arguments: empty name"
        );
        assert_eq!(
            GuardError::symbol_not_found("sym_3").to_string(),
            "no symbol found for sym_3"
        );
        assert_eq!(
            GuardError::UnresolvedNamespace.to_string(),
            "namespace reference does not resolve to a declaration"
        );
    }
}
