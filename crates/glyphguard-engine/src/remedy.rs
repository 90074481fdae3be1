//! Remediation engine: strip/substitute fixes delegating to host rename.
//!
//! For every diagnostic the engine offers both strategies side by side:
//!
//! - **Strip** removes every non-ASCII code unit from the name;
//! - **Substitute** replaces known homoglyphs with their Latin look-alike
//!   and removes the rest.
//!
//! Each offered fix carries a ready [`RenameRequest`]; the caller (user or
//! batch fixer) picks one and submits it through [`RenameHost`]. The
//! engine does not validate candidate names (a strip can produce an empty
//! or colliding name; the host's rename facility decides) and never
//! retries a rejected rename.
//!
//! The homoglyph table is injected at construction, not read from a
//! global, so tests can swap in alternative tables.

use tracing::debug;

use glyphguard_core::diagnostic::Diagnostic;
use glyphguard_core::error::GuardError;
use glyphguard_core::homoglyph::{strip_non_ascii, substitute_homoglyphs, HomoglyphTable};

use crate::host::{ProgramHost, RenameHost, RenameOutcome, RenameRequest};
use crate::model::{NodeId, SymbolId};

// ============================================================================
// Fix Types
// ============================================================================

/// Remediation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStrategy {
    /// Remove non-ASCII code units.
    Strip,
    /// Replace known homoglyphs, remove the rest.
    Substitute,
}

impl FixStrategy {
    /// User-facing action title.
    pub fn title(&self) -> &'static str {
        match self {
            FixStrategy::Strip => "Remove non-ASCII symbols",
            FixStrategy::Substitute => "Replace non-ASCII symbols",
        }
    }
}

/// The declaration a diagnostic points at.
///
/// Most kinds carry the declared symbol directly. A namespace diagnostic
/// carries the specific name-reference node instead, because a namespace
/// can be declared in several places and only the host can resolve the
/// node back to the right declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclTarget {
    Type(SymbolId),
    Method(SymbolId),
    Field(SymbolId),
    Property(SymbolId),
    Local(SymbolId),
    NamespaceRef(NodeId),
}

/// One offered fix: a titled rename request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameFix {
    /// Which strategy produced the candidate name.
    pub strategy: FixStrategy,
    /// User-facing action title.
    pub title: &'static str,
    /// Ready-to-submit rename request.
    pub request: RenameRequest,
}

// ============================================================================
// Remediation Engine
// ============================================================================

/// Computes fix offers and delegates the chosen rename to the host.
#[derive(Debug, Clone)]
pub struct RemediationEngine {
    table: HomoglyphTable,
}

impl RemediationEngine {
    /// Create an engine with an injected homoglyph table.
    pub fn new(table: HomoglyphTable) -> Self {
        RemediationEngine { table }
    }

    /// Create an engine with the builtin table.
    pub fn with_builtin_table() -> Self {
        RemediationEngine::new(HomoglyphTable::builtin())
    }

    /// Offer both fixes for a diagnostic.
    ///
    /// Returns an empty vector when the target does not resolve to a
    /// known symbol (e.g. a namespace-name node with no enclosing
    /// namespace declaration): a silent decline, never an error.
    pub fn fixes_for<H: ProgramHost>(
        &self,
        host: &H,
        diagnostic: &Diagnostic,
        target: &DeclTarget,
    ) -> Vec<RenameFix> {
        let symbol_id = match *target {
            DeclTarget::Type(id)
            | DeclTarget::Method(id)
            | DeclTarget::Field(id)
            | DeclTarget::Property(id)
            | DeclTarget::Local(id) => id,
            DeclTarget::NamespaceRef(node) => match host.resolve_namespace_ref(node) {
                Some(id) => id,
                None => {
                    debug!(%node, kind = %diagnostic.kind, "namespace reference unresolved, declining fix");
                    return Vec::new();
                }
            },
        };

        let Some(symbol) = host.symbol(symbol_id) else {
            debug!(symbol = %symbol_id, "target symbol unknown, declining fix");
            return Vec::new();
        };

        let strip = RenameFix {
            strategy: FixStrategy::Strip,
            title: FixStrategy::Strip.title(),
            request: RenameRequest {
                symbol: symbol_id,
                new_name: strip_non_ascii(&symbol.name),
            },
        };
        let substitute = RenameFix {
            strategy: FixStrategy::Substitute,
            title: FixStrategy::Substitute.title(),
            request: RenameRequest {
                symbol: symbol_id,
                new_name: substitute_homoglyphs(&symbol.name, &self.table),
            },
        };
        vec![strip, substitute]
    }

    /// Apply a chosen fix through the host's rename facility.
    ///
    /// The host's result is surfaced verbatim; no recovery, no retry.
    pub fn apply<H: RenameHost>(
        &self,
        host: &mut H,
        fix: &RenameFix,
    ) -> Result<RenameOutcome, GuardError> {
        host.rename(&fix.request).map_err(GuardError::from)
    }
}

// ============================================================================
// Tests
// ============================================================================
