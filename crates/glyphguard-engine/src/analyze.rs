//! Analysis orchestration: one pass over symbols and files.
//!
//! The pass is synchronous and CPU-bound. Each walker operates only on
//! host-owned data and appends to an order-independent collection, so a
//! host may also invoke the walkers itself, concurrently across
//! independent compilation units, and concatenate the results.

use tracing::debug;

use glyphguard_core::diagnostic::Diagnostic;

use crate::files::walk_files;
use crate::host::ProgramHost;
use crate::walker::walk_symbols;

/// Run the full detection pass: symbol names, file names, free text.
///
/// Never fails; an empty program yields an empty vector.
pub fn run_analysis<H: ProgramHost>(host: &H) -> Vec<Diagnostic> {
    let mut diagnostics = walk_symbols(host);
    diagnostics.extend(walk_files(host));
    debug!(count = diagnostics.len(), "detection pass complete");
    diagnostics
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProgramModel, SiteRef, Symbol, SymbolKind};
    use glyphguard_core::diagnostic::NameKind;
    use glyphguard_core::types::Span;

    #[test]
    fn empty_program_yields_no_diagnostics() {
        let model = ProgramModel::new();
        assert!(run_analysis(&model).is_empty());
    }

    #[test]
    fn pass_combines_symbol_and_file_findings() {
        let mut model = ProgramModel::new();
        let f = model.add_file("src/Прog.cs", "class TypeNameЖ {}");
        let id = model.next_symbol_id();
        model.insert_symbol(Symbol::new(
            id,
            SymbolKind::Type,
            "TypeNameЖ",
            SiteRef::new(f, Span::new(6, 16)),
        ));
        model.add_resource("strings.txt", "bаd token");

        let diagnostics = run_analysis(&model);
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(
            diagnostics
                .iter()
                .filter(|d| d.kind == NameKind::File)
                .count(),
            2
        );
    }
}
