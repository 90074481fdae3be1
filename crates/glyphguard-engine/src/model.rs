//! In-memory program model: symbols, files, resources, and atomic rename.
//!
//! [`ProgramModel`] is the reference implementation of the host interface
//! in [`crate::host`]. A real host (compiler front end, IDE workspace)
//! owns its own symbol table and rename machinery; this model exists so
//! the engine is usable and testable without one. It stores:
//!
//! - source files with full content,
//! - symbols with declaration and reference sites (byte spans),
//! - auxiliary text resources as line sequences,
//! - namespace name-reference nodes bound to their declared symbol.
//!
//! Its rename is a discrete transaction: every site is validated (bounds,
//! current text, overlaps) before any byte is touched, and a single
//! failure leaves the model unchanged.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use glyphguard_core::types::Span;

use crate::host::{
    ProgramHost, RenameError, RenameHost, RenameOutcome, RenameRequest,
};

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a source file within a model snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct FileId(pub u32);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file_{}", self.0)
    }
}

/// Unique identifier for a symbol within a model snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sym_{}", self.0)
    }
}

/// Unique identifier for a syntax node registered with the model.
///
/// Only namespace name-reference nodes need identities here: a namespace
/// can be declared in several places, so a diagnostic points at one
/// specific name reference rather than at the merged symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

// ============================================================================
// Symbol Types
// ============================================================================

/// Kind of declared symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Type,
    Method,
    Field,
    Property,
    Namespace,
    Local,
}

impl SymbolKind {
    /// Diagnostic kind label for this symbol kind.
    pub fn name_kind(&self) -> glyphguard_core::diagnostic::NameKind {
        use glyphguard_core::diagnostic::NameKind;
        match self {
            SymbolKind::Type => NameKind::Type,
            SymbolKind::Method => NameKind::Method,
            SymbolKind::Field => NameKind::Field,
            SymbolKind::Property => NameKind::Property,
            SymbolKind::Namespace => NameKind::Namespace,
            SymbolKind::Local => NameKind::Local,
        }
    }
}

/// Walk-exclusion flags carried by a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymbolFlags {
    /// Method synthesized as a property accessor (get/set). Excluded from
    /// the walk; the owning property is checked instead.
    pub property_accessor: bool,
    /// Local declared inside a field initializer. Excluded from the walk;
    /// the field's own check covers it.
    pub field_initializer: bool,
}

/// One occurrence of a symbol in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRef {
    /// File containing the site.
    pub file: FileId,
    /// Byte span of the identifier text at the site.
    pub span: Span,
}

impl SiteRef {
    /// Create a new site reference.
    pub fn new(file: FileId, span: Span) -> Self {
        SiteRef { file, span }
    }
}

/// A declared program entity together with its use sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Symbol ID (stable within a snapshot).
    pub id: SymbolId,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Declared name.
    pub name: String,
    /// Walk-exclusion flags.
    pub flags: SymbolFlags,
    /// Declaration site.
    pub decl: SiteRef,
    /// Reference sites (excluding the declaration).
    pub refs: Vec<SiteRef>,
}

impl Symbol {
    /// Create a symbol with no references and default flags.
    pub fn new(id: SymbolId, kind: SymbolKind, name: impl Into<String>, decl: SiteRef) -> Self {
        Symbol {
            id,
            kind,
            name: name.into(),
            flags: SymbolFlags::default(),
            decl,
            refs: Vec::new(),
        }
    }

    /// Attach reference sites.
    pub fn with_refs(mut self, refs: Vec<SiteRef>) -> Self {
        self.refs = refs;
        self
    }

    /// Attach walk-exclusion flags.
    pub fn with_flags(mut self, flags: SymbolFlags) -> Self {
        self.flags = flags;
        self
    }
}

// ============================================================================
// File and Resource Types
// ============================================================================

/// A source file with full content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File ID (stable within a snapshot).
    pub id: FileId,
    /// Workspace-relative path.
    pub path: String,
    /// Full file content.
    pub content: String,
}

impl SourceFile {
    /// Base name of the file: final path component with the extension
    /// stripped. Empty when the path has no usable stem.
    pub fn base_name(&self) -> &str {
        Path::new(&self.path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }
}

/// A designated auxiliary text resource, held as lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextResource {
    /// Resource path.
    pub path: String,
    /// Resource content, one entry per line.
    pub lines: Vec<String>,
}

// ============================================================================
// Program Model
// ============================================================================

/// In-memory program model and reference rename host.
#[derive(Debug, Default)]
pub struct ProgramModel {
    files: BTreeMap<FileId, SourceFile>,
    symbols: BTreeMap<SymbolId, Symbol>,
    resources: Vec<TextResource>,
    namespace_refs: BTreeMap<NodeId, SymbolId>,
    next_file: u32,
    next_symbol: u32,
    next_node: u32,
    snapshot: u64,
}

impl ProgramModel {
    /// Create an empty model.
    pub fn new() -> Self {
        ProgramModel::default()
    }

    /// Current snapshot counter; bumps on every successful rename.
    pub fn snapshot(&self) -> u64 {
        self.snapshot
    }

    /// Add a source file, returning its ID.
    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) -> FileId {
        let id = FileId(self.next_file);
        self.next_file += 1;
        self.files.insert(
            id,
            SourceFile {
                id,
                path: path.into(),
                content: content.into(),
            },
        );
        id
    }

    /// Add an auxiliary text resource from raw text.
    pub fn add_resource(&mut self, path: impl Into<String>, text: &str) {
        self.push_resource(TextResource {
            path: path.into(),
            lines: text.lines().map(str::to_string).collect(),
        });
    }

    /// Add a pre-built auxiliary text resource, e.g. one collected by
    /// [`crate::files::load_resources`].
    pub fn push_resource(&mut self, resource: TextResource) {
        self.resources.push(resource);
    }

    /// Allocate the next symbol ID.
    pub fn next_symbol_id(&mut self) -> SymbolId {
        let id = SymbolId(self.next_symbol);
        self.next_symbol += 1;
        id
    }

    /// Insert a symbol built with an ID from [`ProgramModel::next_symbol_id`].
    pub fn insert_symbol(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.id, symbol);
    }

    /// Register a namespace name-reference node bound to a declared symbol.
    ///
    /// Returns the node ID a diagnostic can carry. Binding to a non-
    /// namespace symbol is allowed here; resolution rejects it later.
    pub fn bind_namespace_ref(&mut self, target: SymbolId) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.namespace_refs.insert(id, target);
        id
    }

    /// Register a namespace name-reference node with no binding, modelling
    /// a node the host could not resolve.
    pub fn unresolved_namespace_ref(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        id
    }

    /// Content of a file, for assertions and host callers.
    pub fn file_content(&self, id: FileId) -> Option<&str> {
        self.files.get(&id).map(|f| f.content.as_str())
    }

    /// Gather all edit sites for a symbol, grouped per file and validated:
    /// in bounds, on char boundaries, holding the expected old text, and
    /// non-overlapping. Read-only; called before any mutation.
    fn validated_sites(
        &self,
        symbol: &Symbol,
    ) -> Result<BTreeMap<FileId, Vec<Span>>, RenameError> {
        let mut per_file: BTreeMap<FileId, Vec<Span>> = BTreeMap::new();
        per_file.entry(symbol.decl.file).or_default().push(symbol.decl.span);
        for site in &symbol.refs {
            per_file.entry(site.file).or_default().push(site.span);
        }

        for (file_id, spans) in &mut per_file {
            let file = self
                .files
                .get(file_id)
                .ok_or_else(|| RenameError::Conflict {
                    message: format!("symbol {} references unknown {}", symbol.id, file_id),
                })?;

            spans.sort_by_key(|s| s.start);
            for pair in spans.windows(2) {
                if pair[0].overlaps(&pair[1]) {
                    return Err(RenameError::Conflict {
                        message: format!(
                            "overlapping edit sites {} and {} in {}",
                            pair[0], pair[1], file.path
                        ),
                    });
                }
            }

            let file_span = Span::new(0, file.content.len() as u64);
            for span in spans.iter() {
                let start = span.start as usize;
                let end = span.end as usize;
                let in_bounds = file_span.contains(span)
                    && file.content.is_char_boundary(start)
                    && file.content.is_char_boundary(end);
                if !in_bounds {
                    return Err(RenameError::Conflict {
                        message: format!("site {} out of bounds in {}", span, file.path),
                    });
                }
                if &file.content[start..end] != symbol.name {
                    return Err(RenameError::Conflict {
                        message: format!(
                            "site {} in {} does not hold '{}'",
                            span, file.path, symbol.name
                        ),
                    });
                }
            }
        }

        Ok(per_file)
    }
}

// ============================================================================
// Host Trait Implementations
// ============================================================================

impl ProgramHost for ProgramModel {
    fn symbols(&self) -> Vec<&Symbol> {
        self.symbols.values().collect()
    }

    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(&id)
    }

    fn source_files(&self) -> Vec<&SourceFile> {
        self.files.values().collect()
    }

    fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(&id)
    }

    fn text_resources(&self) -> Vec<&TextResource> {
        self.resources.iter().collect()
    }

    fn resolve_namespace_ref(&self, node: NodeId) -> Option<SymbolId> {
        let target = *self.namespace_refs.get(&node)?;
        match self.symbols.get(&target) {
            Some(symbol) if symbol.kind == SymbolKind::Namespace => Some(target),
            _ => None,
        }
    }
}

impl RenameHost for ProgramModel {
    /// Rename a symbol at its declaration and every reference site.
    ///
    /// All-or-nothing: validation of every site happens before the first
    /// edit, so a conflict leaves the model untouched. Renaming onto a
    /// name that already exists elsewhere is permitted (host policy); an
    /// empty or non-identifier-shaped name is rejected.
    fn rename(&mut self, request: &RenameRequest) -> Result<RenameOutcome, RenameError> {
        validate_identifier(&request.new_name)?;

        let symbol = self
            .symbols
            .get(&request.symbol)
            .ok_or(RenameError::UnknownSymbol {
                symbol: request.symbol,
            })?
            .clone();

        let per_file = self.validated_sites(&symbol)?;

        // Past this point nothing can fail; apply edits end to start so
        // earlier spans in the same file stay valid.
        let old_len = symbol.name.len() as i64;
        let new_len = request.new_name.len() as i64;
        let mut edits_applied = 0usize;

        for (file_id, spans) in &per_file {
            let file = self.files.get_mut(file_id).expect("validated above");
            for span in spans.iter().rev() {
                file.content
                    .replace_range(span.start as usize..span.end as usize, &request.new_name);
                edits_applied += 1;
            }
        }

        // Re-anchor every stored site in the edited files, not just the
        // renamed symbol's: each site shifts by the length delta of the
        // edited spans before it, and the renamed symbol's own sites take
        // the new name's length.
        let delta = new_len - old_len;
        let shift = |site: SiteRef, len: u64| -> SiteRef {
            let earlier = per_file
                .get(&site.file)
                .map(|spans| spans.iter().filter(|s| s.start < site.span.start).count())
                .unwrap_or(0) as i64;
            let start = (site.span.start as i64 + earlier * delta) as u64;
            SiteRef::new(site.file, Span::new(start, start + len))
        };

        for symbol in self.symbols.values_mut() {
            let renamed = symbol.id == request.symbol;
            let relocate = |site: SiteRef| {
                let len = if renamed { new_len as u64 } else { site.span.len() };
                shift(site, len)
            };
            symbol.decl = relocate(symbol.decl);
            let refs: Vec<SiteRef> = symbol.refs.iter().map(|s| relocate(*s)).collect();
            symbol.refs = refs;
            if renamed {
                symbol.name = request.new_name.clone();
            }
        }

        self.snapshot += 1;
        tracing::debug!(
            symbol = %request.symbol,
            new_name = %request.new_name,
            edits = edits_applied,
            "rename applied"
        );

        Ok(RenameOutcome {
            snapshot: self.snapshot,
            files_changed: per_file.len(),
            edits_applied,
        })
    }
}

/// Identifier shape accepted by this host: non-empty, starts with a letter
/// or underscore, continues with alphanumerics or underscores. Non-ASCII
/// letters are allowed; rejecting them is the analysis' job, not the
/// rename facility's.
fn validate_identifier(name: &str) -> Result<(), RenameError> {
    if name.is_empty() {
        return Err(RenameError::InvalidName {
            name: name.to_string(),
            reason: "name cannot be empty".to_string(),
        });
    }
    let mut chars = name.chars();
    let first = chars.next().expect("non-empty");
    if !first.is_alphabetic() && first != '_' {
        return Err(RenameError::InvalidName {
            name: name.to_string(),
            reason: "must start with letter or underscore".to_string(),
        });
    }
    for ch in chars {
        if !ch.is_alphanumeric() && ch != '_' {
            return Err(RenameError::InvalidName {
                name: name.to_string(),
                reason: format!("invalid character: '{}'", ch),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
