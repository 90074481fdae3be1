//! Host interface: what the engine consumes and what it delegates.
//!
//! The engine does not parse or resolve names. A host (compiler front end,
//! IDE workspace, or the in-memory [`crate::model::ProgramModel`]) supplies
//! the symbol/reference model and the file inputs through [`ProgramHost`],
//! and owns the one mutating operation, whole-program rename, behind
//! [`RenameHost`].
//!
//! A rename is a command object ([`RenameRequest`]) submitted to the host's
//! edit pipeline. The host must apply the declaration and every reference
//! as a single logical edit or fail without side effects; the engine
//! assumes no atomicity beyond that contract and never retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use glyphguard_core::error::GuardError;

use crate::model::{FileId, NodeId, SourceFile, Symbol, SymbolId, TextResource};

// ============================================================================
// Program Host
// ============================================================================

/// Read-only view of the host's program model for one analysis pass.
///
/// The engine never mutates anything behind this trait. Enumeration order
/// is unspecified; diagnostics are order-independent.
pub trait ProgramHost {
    /// All declared symbols, including locals.
    fn symbols(&self) -> Vec<&Symbol>;

    /// Look up a symbol by ID.
    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    /// All source files.
    fn source_files(&self) -> Vec<&SourceFile>;

    /// Look up a source file by ID.
    fn file(&self, id: FileId) -> Option<&SourceFile>;

    /// Designated auxiliary text resources.
    fn text_resources(&self) -> Vec<&TextResource>;

    /// Resolve a namespace name-reference node to the declared namespace
    /// symbol, or `None` when the node does not denote one.
    fn resolve_namespace_ref(&self, node: NodeId) -> Option<SymbolId>;
}

// ============================================================================
// Rename Host
// ============================================================================

/// Whole-program rename request: target symbol and replacement name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    /// Symbol to rename.
    pub symbol: SymbolId,
    /// Replacement name. Not validated by the engine; the host decides
    /// whether an empty or colliding name is acceptable.
    pub new_name: String,
}

/// Result of a successful rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOutcome {
    /// Snapshot counter of the updated program.
    pub snapshot: u64,
    /// Number of files modified.
    pub files_changed: usize,
    /// Number of sites rewritten (declaration plus references).
    pub edits_applied: usize,
}

/// Typed failures a rename host may return.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The replacement name is not acceptable to this host.
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The request names a symbol the host does not know.
    #[error("unknown symbol {symbol}")]
    UnknownSymbol { symbol: SymbolId },

    /// Edit sites conflict with the current program text.
    #[error("edit conflict: {message}")]
    Conflict { message: String },

    /// Host-specific rejection (e.g. a collision policy).
    #[error("rename rejected: {reason}")]
    Rejected { reason: String },
}

/// The host's rename facility: the sole mutator of the program model.
///
/// `&mut self` gives single-writer semantics; batched remediation must
/// serialize requests through one mutable handle.
pub trait RenameHost {
    /// Apply a whole-program rename atomically, or fail without changes.
    fn rename(&mut self, request: &RenameRequest) -> Result<RenameOutcome, RenameError>;
}

// ============================================================================
// Error Bridge
// ============================================================================

impl From<RenameError> for GuardError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::InvalidName { name, reason } => GuardError::InvalidArguments {
                message: format!("invalid name '{}': {}", name, reason),
            },
            RenameError::UnknownSymbol { symbol } => GuardError::SymbolNotFound {
                target: symbol.to_string(),
            },
            err @ (RenameError::Conflict { .. } | RenameError::Rejected { .. }) => {
                GuardError::RenameRejected {
                    reason: err.to_string(),
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod error_bridging {
        use super::*;

        #[test]
        fn invalid_name_maps_to_invalid_arguments() {
            let err = RenameError::InvalidName {
                name: String::new(),
                reason: "name cannot be empty".to_string(),
            };
            assert!(matches!(
                GuardError::from(err),
                GuardError::InvalidArguments { .. }
            ));
        }

        #[test]
        fn unknown_symbol_maps_to_symbol_not_found() {
            let err = RenameError::UnknownSymbol {
                symbol: SymbolId(7),
            };
            match GuardError::from(err) {
                GuardError::SymbolNotFound { target } => assert_eq!(target, "sym_7"),
                other => panic!("unexpected: {other}"),
            }
        }

        #[test]
        fn conflict_maps_to_rename_rejected() {
            let err = RenameError::Conflict {
                message: "stale".to_string(),
            };
            assert!(matches!(
                GuardError::from(err),
                GuardError::RenameRejected { .. }
            ));
        }
    }

    mod request_serde {
        use super::*;

        #[test]
        fn request_round_trips() {
            let req = RenameRequest {
                symbol: SymbolId(3),
                new_name: "TypeName".to_string(),
            };
            let json = serde_json::to_string(&req).unwrap();
            let back: RenameRequest = serde_json::from_str(&json).unwrap();
            assert_eq!(back, req);
        }
    }
}
