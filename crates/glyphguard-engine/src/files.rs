//! File walker: source file names and auxiliary free-text resources.
//!
//! Two independent checks, both emitting diagnostics with the `File` kind
//! label:
//! - the **file name check** scans each source file's base name (extension
//!   stripped) exactly like a symbol name, anchoring a hit to a zero-length
//!   location at the start of the file, since a file-name finding has no
//!   meaningful character position inside the text;
//! - the **free-text check** drains the mixed-script matcher over every
//!   line of every designated resource, emitting one diagnostic per match,
//!   anchored at the match's line and column. The subject name of a
//!   free-text diagnostic is the resource path.
//!
//! Resource lines carry no byte offsets; a match's column is its UTF-16
//! start offset plus one, and its end is recoverable from the token length.

use std::fs;
use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use glyphguard_core::diagnostic::{Diagnostic, NameKind};
use glyphguard_core::matcher::mixed_script_matches;
use glyphguard_core::scan::scan_name;
use glyphguard_core::types::Location;

use crate::host::ProgramHost;
use crate::model::{SourceFile, TextResource};

// ============================================================================
// Walk
// ============================================================================

/// Run both file-level checks across the host's inputs.
pub fn walk_files<H: ProgramHost>(host: &H) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for file in host.source_files() {
        if let Some(diagnostic) = check_file_name(file) {
            diagnostics.push(diagnostic);
        }
    }
    for resource in host.text_resources() {
        diagnostics.extend(check_resource(resource));
    }
    diagnostics
}

/// Scan a source file's base name; `None` when the stem is empty or clean.
pub fn check_file_name(file: &SourceFile) -> Option<Diagnostic> {
    let base = file.base_name();
    if base.is_empty() {
        return None;
    }
    let hit = scan_name(base)?;
    Some(Diagnostic::from_hit(
        NameKind::File,
        base,
        hit,
        Location::file_start(file.path.clone()),
    ))
}

/// Scan every line of a resource for mixed-script tokens.
pub fn check_resource(resource: &TextResource) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (line_idx, line) in resource.lines.iter().enumerate() {
        for m in mixed_script_matches(line) {
            let location = Location::new(
                resource.path.clone(),
                (line_idx + 1) as u32,
                (m.start + 1) as u32,
            );
            diagnostics.push(Diagnostic::from_char(
                NameKind::File,
                resource.path.clone(),
                m.glyph,
                m.index,
                location,
            ));
        }
    }
    diagnostics
}

// ============================================================================
// Resource Loading
// ============================================================================

/// Collect auxiliary text resources under a directory.
///
/// Files whose extension matches one of `extensions` (compared without the
/// dot, case-insensitively) are read as resources; unreadable entries are
/// skipped with a warning rather than failing the load, matching the
/// detection pass's per-file independence. Results are sorted by path.
pub fn load_resources(root: &Path, extensions: &[&str]) -> Vec<TextResource> {
    let mut resources = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("skipping unreadable directory entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let matches_ext = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)));
        if !matches_ext {
            continue;
        }
        match fs::read_to_string(entry.path()) {
            Ok(text) => resources.push(TextResource {
                path: entry.path().display().to_string(),
                lines: text.lines().map(str::to_string).collect(),
            }),
            Err(err) => {
                warn!(path = %entry.path().display(), "skipping unreadable resource: {err}");
            }
        }
    }

    resources.sort_by(|a, b| a.path.cmp(&b.path));
    resources
}

// ============================================================================
// Tests
// ============================================================================
