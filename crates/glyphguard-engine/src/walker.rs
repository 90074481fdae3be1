//! Symbol walker: scan every declared name and emit diagnostics.
//!
//! Exactly one diagnostic per symbol with an offending name, regardless of
//! its reference count, anchored at the declaration. Two categories are
//! excluded to avoid double-reporting:
//! - property-accessor methods (the owning property is checked instead),
//! - locals declared inside a field initializer (the field is checked).
//!
//! Symbols are evaluated independently: a symbol that cannot be located
//! is skipped without suppressing diagnostics for the rest.

use tracing::warn;

use glyphguard_core::diagnostic::Diagnostic;
use glyphguard_core::scan::scan_name;
use glyphguard_core::text::byte_offset_to_position;
use glyphguard_core::types::Location;

use crate::host::ProgramHost;
use crate::model::{Symbol, SymbolKind};

/// Walk all declared symbols, producing one diagnostic per offending name.
pub fn walk_symbols<H: ProgramHost>(host: &H) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for symbol in host.symbols() {
        if let Some(diagnostic) = check_symbol(host, symbol) {
            diagnostics.push(diagnostic);
        }
    }
    diagnostics
}

/// Check one symbol's name; `None` when clean or excluded from the walk.
pub fn check_symbol<H: ProgramHost>(host: &H, symbol: &Symbol) -> Option<Diagnostic> {
    match symbol.kind {
        SymbolKind::Method if symbol.flags.property_accessor => return None,
        SymbolKind::Local if symbol.flags.field_initializer => return None,
        _ => {}
    }

    let hit = scan_name(&symbol.name)?;

    let Some(file) = host.file(symbol.decl.file) else {
        // Benign: this symbol cannot be anchored, others still report.
        warn!(symbol = %symbol.id, file = %symbol.decl.file, "declaration file missing, skipping");
        return None;
    };
    let (line, col) = byte_offset_to_position(&file.content, symbol.decl.span.start as usize);
    let location = Location::with_span(file.path.clone(), line, col, symbol.decl.span);

    Some(Diagnostic::from_hit(
        symbol.kind.name_kind(),
        &symbol.name,
        hit,
        location,
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProgramModel, SiteRef, SymbolFlags};
    use glyphguard_core::diagnostic::NameKind;
    use glyphguard_core::types::Span;

    fn add(
        model: &mut ProgramModel,
        kind: SymbolKind,
        name: &str,
        decl: SiteRef,
        flags: SymbolFlags,
    ) {
        let id = model.next_symbol_id();
        model.insert_symbol(Symbol::new(id, kind, name, decl).with_flags(flags));
    }

    #[test]
    fn clean_symbols_produce_no_diagnostics() {
        let mut model = ProgramModel::new();
        let f = model.add_file("a.cs", "class TypeName {}");
        add(
            &mut model,
            SymbolKind::Type,
            "TypeName",
            SiteRef::new(f, Span::new(6, 14)),
            SymbolFlags::default(),
        );
        assert!(walk_symbols(&model).is_empty());
    }

    #[test]
    fn offending_type_reports_kind_and_position() {
        let mut model = ProgramModel::new();
        let f = model.add_file("a.cs", "class TypeNameЖ {}");
        add(
            &mut model,
            SymbolKind::Type,
            "TypeNameЖ",
            SiteRef::new(f, Span::new(6, 16)),
            SymbolFlags::default(),
        );

        let diagnostics = walk_symbols(&model);
        assert_eq!(diagnostics.len(), 1);
        let d = &diagnostics[0];
        assert_eq!(d.kind, NameKind::Type);
        assert_eq!(d.glyph, 'Ж');
        assert_eq!(d.index, 8);
        assert_eq!(d.location.line, 1);
        assert_eq!(d.location.col, 7);
    }

    #[test]
    fn one_diagnostic_per_symbol_regardless_of_references() {
        let mut model = ProgramModel::new();
        let f = model.add_file("a.cs", "var iы = 0; iы += 1; use(iы);");
        let id = model.next_symbol_id();
        model.insert_symbol(
            Symbol::new(id, SymbolKind::Local, "iы", SiteRef::new(f, Span::new(4, 7))).with_refs(
                vec![
                    SiteRef::new(f, Span::new(13, 16)),
                    SiteRef::new(f, Span::new(27, 30)),
                ],
            ),
        );
        assert_eq!(walk_symbols(&model).len(), 1);
    }

    #[test]
    fn property_accessor_methods_are_skipped() {
        let mut model = ProgramModel::new();
        let f = model.add_file("a.cs", "int Valuеж { get; set; }");
        add(
            &mut model,
            SymbolKind::Property,
            "Valuеж",
            SiteRef::new(f, Span::new(4, 12)),
            SymbolFlags::default(),
        );
        // Synthetic accessors carry the property's offending name.
        add(
            &mut model,
            SymbolKind::Method,
            "get_Valuеж",
            SiteRef::new(f, Span::new(4, 12)),
            SymbolFlags {
                property_accessor: true,
                ..Default::default()
            },
        );

        let diagnostics = walk_symbols(&model);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, NameKind::Property);
    }

    #[test]
    fn field_initializer_locals_are_skipped() {
        let mut model = ProgramModel::new();
        let f = model.add_file("a.cs", "int iж = Make(out var tmpы);");
        add(
            &mut model,
            SymbolKind::Field,
            "iж",
            SiteRef::new(f, Span::new(4, 7)),
            SymbolFlags::default(),
        );
        add(
            &mut model,
            SymbolKind::Local,
            "tmpы",
            SiteRef::new(f, Span::new(23, 28)),
            SymbolFlags {
                field_initializer: true,
                ..Default::default()
            },
        );

        let diagnostics = walk_symbols(&model);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, NameKind::Field);
    }

    #[test]
    fn namespace_symbols_report_namespace_kind() {
        let mut model = ProgramModel::new();
        let f = model.add_file(
            "Program.cs",
            "namespace ConsoleApplication1Ж {}",
        );
        add(
            &mut model,
            SymbolKind::Namespace,
            "ConsoleApplication1Ж",
            SiteRef::new(f, Span::new(10, 31)),
            SymbolFlags::default(),
        );

        let diagnostics = walk_symbols(&model);
        assert_eq!(diagnostics.len(), 1);
        let d = &diagnostics[0];
        assert_eq!(d.kind, NameKind::Namespace);
        assert_eq!(d.glyph, 'Ж');
        assert_eq!(d.index, 19);
    }
}
