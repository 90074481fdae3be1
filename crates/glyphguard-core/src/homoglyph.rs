//! Closed homoglyph table and the two name transforms built on it.
//!
//! The table maps Cyrillic letters that are visually identical to Latin
//! letters onto their Latin counterparts. It is a fixed, closed mapping,
//! not a general Unicode confusables database, and is injected into the
//! remediation engine as an immutable configuration value, so tests can
//! substitute alternative tables.
//!
//! Both transforms operate over UTF-16 code units, matching the scanner in
//! [`crate::scan`]:
//! - [`strip_non_ascii`] drops every unit above the ASCII limit.
//! - [`substitute_homoglyphs`] maps known look-alikes to Latin and drops
//!   everything else above the limit (unmapped units behave as strip).

use std::collections::BTreeMap;

use crate::scan::ASCII_LIMIT;

/// Builtin look-alike pairs: Cyrillic letter to its Latin equivalent.
///
/// Upper and lower case are separate entries so substitution preserves the
/// original casing.
const BUILTIN_PAIRS: &[(char, char)] = &[
    ('с', 'c'),
    ('С', 'C'),
    ('а', 'a'),
    ('А', 'A'),
    ('о', 'o'),
    ('О', 'O'),
    ('Н', 'H'),
    ('р', 'p'),
    ('Р', 'P'),
    ('М', 'M'),
    ('к', 'k'),
    ('К', 'K'),
    ('х', 'x'),
    ('Х', 'X'),
    ('Т', 'T'),
    ('ь', 'b'),
    ('е', 'e'),
    ('Е', 'E'),
    ('В', 'B'),
    ('г', 'r'),
];

// ============================================================================
// Homoglyph Table
// ============================================================================

/// Immutable mapping from look-alike code units to ASCII characters.
///
/// Keys are UTF-16 code units; every builtin entry is a BMP character, so
/// the unit and the scalar value coincide. Entries outside the BMP cannot
/// be represented and are ignored by [`HomoglyphTable::from_pairs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomoglyphTable {
    map: BTreeMap<u16, char>,
}

impl HomoglyphTable {
    /// The builtin closed table of Cyrillic/Latin look-alikes.
    pub fn builtin() -> Self {
        HomoglyphTable::from_pairs(BUILTIN_PAIRS.iter().copied())
    }

    /// Build a table from (look-alike, replacement) pairs.
    ///
    /// Pairs whose look-alike is not a single BMP code unit are skipped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        let map = pairs
            .into_iter()
            .filter_map(|(from, to)| u16::try_from(u32::from(from)).ok().map(|unit| (unit, to)))
            .collect();
        HomoglyphTable { map }
    }

    /// An empty table: substitution degenerates to stripping.
    pub fn empty() -> Self {
        HomoglyphTable {
            map: BTreeMap::new(),
        }
    }

    /// Look up the Latin replacement for a code unit.
    pub fn lookup(&self, unit: u16) -> Option<char> {
        self.map.get(&unit).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for HomoglyphTable {
    fn default() -> Self {
        HomoglyphTable::builtin()
    }
}

// ============================================================================
// Name Transforms
// ============================================================================

/// Remove every code unit above the ASCII limit, keeping the rest in
/// original order.
///
/// May produce an empty string; callers decide whether that is acceptable
/// as a name. Idempotent.
pub fn strip_non_ascii(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for unit in name.encode_utf16() {
        if unit <= ASCII_LIMIT {
            out.push(unit_to_ascii_char(unit));
        }
    }
    out
}

/// Replace known look-alikes with their Latin counterpart and drop every
/// other code unit above the ASCII limit.
///
/// For a name containing only mapped homoglyphs the result is pure ASCII
/// with the original letter casing; unmapped units behave as in
/// [`strip_non_ascii`].
pub fn substitute_homoglyphs(name: &str, table: &HomoglyphTable) -> String {
    let mut out = String::with_capacity(name.len());
    for unit in name.encode_utf16() {
        if unit <= ASCII_LIMIT {
            out.push(unit_to_ascii_char(unit));
        } else if let Some(latin) = table.lookup(unit) {
            out.push(latin);
        }
    }
    out
}

/// Convert a code unit known to be `<= ASCII_LIMIT` to its character.
fn unit_to_ascii_char(unit: u16) -> char {
    debug_assert!(unit <= ASCII_LIMIT);
    char::from(unit as u8)
}

// ============================================================================
// Tests
// ============================================================================
