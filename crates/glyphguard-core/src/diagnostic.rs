//! Diagnostic types and message formatting.
//!
//! A diagnostic records exactly one offending name or free-text match:
//! the subject name, the offending character and its 0-based code-unit
//! index, a kind label, and a pre-formatted message. Severity is uniformly
//! advisory: detection never escalates to an error and never blocks a
//! build.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scan::NonAsciiHit;
use crate::types::Location;

// ============================================================================
// Name Kind
// ============================================================================

/// What kind of name a diagnostic is about.
///
/// `File` covers both source file names and free-text resource matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    Type,
    Method,
    Field,
    Property,
    Namespace,
    Local,
    File,
}

impl NameKind {
    /// Human-readable label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            NameKind::Type => "Type",
            NameKind::Method => "Method",
            NameKind::Field => "Field",
            NameKind::Property => "Property",
            NameKind::Namespace => "Namespace",
            NameKind::Local => "Local",
            NameKind::File => "File",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Severity
// ============================================================================

/// Diagnostic severity.
///
/// Only `Warning` is produced: findings are always advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Warning,
}

// ============================================================================
// Diagnostic
// ============================================================================

/// One finding: a name (or free-text token) mixing ASCII with non-ASCII.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Where the finding is anchored.
    pub location: Location,
    /// Subject name: the identifier, file base name, or resource path.
    pub name: String,
    /// Offending character as displayed (U+FFFD for an unpaired surrogate).
    pub glyph: char,
    /// Raw UTF-16 code unit of the offending character.
    pub unit: u16,
    /// 0-based code-unit index of the offending character.
    pub index: usize,
    /// Kind label.
    pub kind: NameKind,
    /// Pre-formatted message.
    pub message: String,
    /// Always `Warning`.
    pub severity: Severity,
}

impl Diagnostic {
    /// Build a diagnostic from a scanner hit.
    pub fn from_hit(
        kind: NameKind,
        name: impl Into<String>,
        hit: NonAsciiHit,
        location: Location,
    ) -> Self {
        let name = name.into();
        let glyph = hit.glyph();
        Diagnostic {
            message: format_message(kind, &name, glyph, hit.index),
            location,
            name,
            glyph,
            unit: hit.unit,
            index: hit.index,
            kind,
            severity: Severity::Warning,
        }
    }

    /// Build a diagnostic from an arbitrary offending character.
    ///
    /// Used for free-text matches, where the reported character is the
    /// token's first character and may itself be ASCII.
    pub fn from_char(
        kind: NameKind,
        name: impl Into<String>,
        glyph: char,
        index: usize,
        location: Location,
    ) -> Self {
        let name = name.into();
        let unit = u16::try_from(u32::from(glyph)).unwrap_or(0xFFFD);
        Diagnostic {
            message: format_message(kind, &name, glyph, index),
            location,
            name,
            glyph,
            unit,
            index,
            kind,
            severity: Severity::Warning,
        }
    }
}

/// Format the uniform diagnostic message.
pub fn format_message(kind: NameKind, name: &str, glyph: char, index: usize) -> String {
    format!(
        "{} name of '{}' contains non-ASCII letters (symbol '{}' at index {})",
        kind.label(),
        name,
        glyph,
        index
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_name;

    mod message_format {
        use super::*;

        #[test]
        fn type_message_matches_expected_shape() {
            let hit = scan_name("TypeNameЖ").unwrap();
            let d = Diagnostic::from_hit(
                NameKind::Type,
                "TypeNameЖ",
                hit,
                Location::new("Program.cs", 3, 11),
            );
            assert_eq!(
                d.message,
                "Type name of 'TypeNameЖ' contains non-ASCII letters (symbol 'Ж' at index 8)"
            );
        }

        #[test]
        fn field_message_matches_expected_shape() {
            let hit = scan_name("iж").unwrap();
            let d = Diagnostic::from_hit(NameKind::Field, "iж", hit, Location::new("a.cs", 5, 13));
            assert_eq!(
                d.message,
                "Field name of 'iж' contains non-ASCII letters (symbol 'ж' at index 1)"
            );
        }

        #[test]
        fn file_match_can_report_ascii_glyph() {
            let d = Diagnostic::from_char(
                NameKind::File,
                "docs/readme.txt",
                'a',
                4,
                Location::new("docs/readme.txt", 2, 5),
            );
            assert_eq!(d.glyph, 'a');
            assert_eq!(d.unit, 'a' as u32 as u16);
            assert!(d.message.starts_with("File name of 'docs/readme.txt'"));
        }
    }

    mod severity_and_serde {
        use super::*;

        #[test]
        fn severity_is_always_warning() {
            let hit = scan_name("xы").unwrap();
            let d = Diagnostic::from_hit(NameKind::Local, "xы", hit, Location::new("a.cs", 1, 1));
            assert_eq!(d.severity, Severity::Warning);
        }

        #[test]
        fn diagnostic_round_trips_through_json() {
            let hit = scan_name("TypeNameЖ").unwrap();
            let d = Diagnostic::from_hit(
                NameKind::Type,
                "TypeNameЖ",
                hit,
                Location::new("Program.cs", 3, 11),
            );
            let json = serde_json::to_string(&d).unwrap();
            assert!(json.contains("\"severity\":\"warning\""));
            assert!(json.contains("\"kind\":\"type\""));
            let back: Diagnostic = serde_json::from_str(&json).unwrap();
            assert_eq!(back, d);
        }
    }

    mod kind_labels {
        use super::*;

        #[test]
        fn labels_cover_all_kinds() {
            assert_eq!(NameKind::Type.label(), "Type");
            assert_eq!(NameKind::Method.label(), "Method");
            assert_eq!(NameKind::Field.label(), "Field");
            assert_eq!(NameKind::Property.label(), "Property");
            assert_eq!(NameKind::Namespace.label(), "Namespace");
            assert_eq!(NameKind::Local.label(), "Local");
            assert_eq!(NameKind::File.label(), "File");
        }
    }
}
