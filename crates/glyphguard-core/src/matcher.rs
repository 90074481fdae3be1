//! Mixed-script token matcher for free text.
//!
//! Free text (auxiliary resources such as docs or string tables) is not a
//! single identifier, so a line may yield several findings. The matcher is
//! an explicit tokenizer plus a boolean predicate:
//!
//! - a **token** is a maximal run of word characters: ASCII alphanumerics,
//!   `_`, or letters from the Cyrillic homoglyph-adjacent range (а–я, А–Я,
//!   ё, Ё);
//! - a token **matches** iff it contains at least one ASCII Latin letter
//!   AND at least one Cyrillic-range letter.
//!
//! The mixed-script requirement deliberately excludes tokens written
//! entirely in one script: all-Cyrillic text is legitimate foreign-language
//! content, and pure-ASCII text is not spoofing. The reported offending
//! character is the token's *first* character (not necessarily the first
//! non-ASCII one), an intentional simplification kept for compatibility.
//!
//! Offsets are UTF-16 code-unit offsets within the line, consistent with
//! how names are indexed in [`crate::scan`].

// ============================================================================
// Token Match
// ============================================================================

/// One mixed-script token found in a line of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
    /// Start offset of the token in the line (UTF-16 code units).
    pub start: usize,
    /// End offset, exclusive (UTF-16 code units).
    pub end: usize,
    /// First character of the matched token.
    pub glyph: char,
    /// Offending index reported for the match; equals `start`.
    pub index: usize,
    /// The matched token text.
    pub text: String,
}

// ============================================================================
// Character Classes
// ============================================================================

/// Letters from the closed homoglyph-adjacent range.
pub fn is_cyrillic_adjacent(c: char) -> bool {
    ('а'..='я').contains(&c) || ('А'..='Я').contains(&c) || c == 'ё' || c == 'Ё'
}

/// Characters that can be part of a token.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || is_cyrillic_adjacent(c)
}

// ============================================================================
// Matcher
// ============================================================================

/// Lazy iterator over mixed-script tokens in one line.
///
/// Restartable per line and finite: each call to `next` resumes after the
/// previous token's end and scans to end of line at most once overall.
pub struct MixedScriptMatches<'a> {
    chars: std::str::Chars<'a>,
    utf16_pos: usize,
}

impl Iterator for MixedScriptMatches<'_> {
    type Item = TokenMatch;

    fn next(&mut self) -> Option<TokenMatch> {
        loop {
            // Skip to the next token start.
            let first = loop {
                let c = self.chars.next()?;
                if is_word_char(c) {
                    break c;
                }
                self.utf16_pos += c.len_utf16();
            };

            let start = self.utf16_pos;
            let mut text = String::new();
            let mut has_ascii_letter = first.is_ascii_alphabetic();
            let mut has_cyrillic = is_cyrillic_adjacent(first);
            text.push(first);
            self.utf16_pos += first.len_utf16();

            // Consume the rest of the token; peek without committing so the
            // delimiter after the token is re-examined on the next round.
            loop {
                let mut lookahead = self.chars.clone();
                match lookahead.next() {
                    Some(c) if is_word_char(c) => {
                        self.chars = lookahead;
                        has_ascii_letter |= c.is_ascii_alphabetic();
                        has_cyrillic |= is_cyrillic_adjacent(c);
                        text.push(c);
                        self.utf16_pos += c.len_utf16();
                    }
                    _ => break,
                }
            }

            if has_ascii_letter && has_cyrillic {
                return Some(TokenMatch {
                    start,
                    end: self.utf16_pos,
                    glyph: first,
                    index: start,
                    text,
                });
            }
            // Single-script token: keep scanning the rest of the line.
        }
    }
}

/// Iterate mixed-script token matches in a line of free text.
pub fn mixed_script_matches(line: &str) -> MixedScriptMatches<'_> {
    MixedScriptMatches {
        chars: line.chars(),
        utf16_pos: 0,
    }
}

// ============================================================================
// Tests
// ============================================================================
