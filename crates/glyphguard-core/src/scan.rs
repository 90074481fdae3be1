//! Non-ASCII name scanning over UTF-16 code units.
//!
//! Scanning is defined over UTF-16 **code units**, not code points. A
//! character outside the Basic Multilingual Plane is observed as two
//! separate surrogate units, each of which exceeds the ASCII limit and is
//! reported individually. This mirrors the contract of the upstream
//! analyzer this check is compatible with; see [`NonAsciiHit::glyph`] for
//! how an unpaired surrogate half is rendered.
//!
//! The same scan is applied to symbol names and file base names.

/// Highest code-unit value that counts as plain ASCII.
///
/// The comparison is strict (`> 128`), so the boundary value 128 itself is
/// not offending. Inherited contract; do not tighten to 127.
pub const ASCII_LIMIT: u16 = 128;

/// First offending code unit found in a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonAsciiHit {
    /// Raw UTF-16 code unit value.
    pub unit: u16,
    /// 0-based code-unit index within the scanned name.
    pub index: usize,
}

impl NonAsciiHit {
    /// Display glyph for the offending unit.
    ///
    /// An unpaired surrogate half has no scalar value and renders as
    /// U+FFFD; the raw unit is still available in `self.unit`.
    pub fn glyph(&self) -> char {
        char::from_u32(u32::from(self.unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Scan a name for its first non-ASCII code unit.
///
/// Returns `None` for an empty name or a name whose units are all within
/// [`ASCII_LIMIT`]. Otherwise returns the lowest-index offending unit.
/// Deterministic, no side effects.
pub fn scan_name(name: &str) -> Option<NonAsciiHit> {
    name.encode_utf16()
        .enumerate()
        .find(|&(_, unit)| unit > ASCII_LIMIT)
        .map(|(index, unit)| NonAsciiHit { unit, index })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod clean_names {
        use super::*;

        #[test]
        fn ascii_name_has_no_hit() {
            assert_eq!(scan_name("TypeName"), None);
            assert_eq!(scan_name("snake_case_123"), None);
            assert_eq!(scan_name("x"), None);
        }

        #[test]
        fn empty_name_has_no_hit() {
            assert_eq!(scan_name(""), None);
        }

        #[test]
        fn boundary_unit_128_is_not_offending() {
            // U+0080 encodes as the code unit 128, exactly at the limit.
            assert_eq!(scan_name("a\u{80}b"), None);
        }
    }

    mod offending_names {
        use super::*;

        #[test]
        fn single_cyrillic_letter_at_end() {
            let hit = scan_name("TypeNameЖ").unwrap();
            assert_eq!(hit.glyph(), 'Ж');
            assert_eq!(hit.index, 8);
        }

        #[test]
        fn single_offending_unit_at_position() {
            let hit = scan_name("iж").unwrap();
            assert_eq!(hit.glyph(), 'ж');
            assert_eq!(hit.index, 1);
        }

        #[test]
        fn first_of_multiple_is_reported() {
            let hit = scan_name("aжbыc").unwrap();
            assert_eq!(hit.glyph(), 'ж');
            assert_eq!(hit.index, 1);
        }

        #[test]
        fn offending_at_start() {
            let hit = scan_name("Жabc").unwrap();
            assert_eq!(hit.index, 0);
        }

        #[test]
        fn unit_129_is_offending() {
            let hit = scan_name("\u{81}").unwrap();
            assert_eq!(hit.unit, 0x81);
            assert_eq!(hit.index, 0);
        }
    }

    mod surrogate_pairs {
        use super::*;

        #[test]
        fn astral_char_reports_high_surrogate_half() {
            // U+1D51E (mathematical fraktur a) is two UTF-16 units.
            let hit = scan_name("a𝔞").unwrap();
            assert_eq!(hit.index, 1);
            assert_eq!(hit.unit, 0xD835);
            assert_eq!(hit.glyph(), char::REPLACEMENT_CHARACTER);
        }

        #[test]
        fn index_counts_units_not_chars() {
            // The astral char occupies indices 1 and 2; the Cyrillic letter
            // after it sits at unit index 3 but the scan stops earlier.
            let hit = scan_name("a𝔞ж").unwrap();
            assert_eq!(hit.index, 1);
        }
    }
}
