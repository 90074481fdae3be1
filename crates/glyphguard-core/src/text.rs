//! Byte offset to line:column conversion.
//!
//! Lines and columns are **1-indexed** (editor convention); byte offsets
//! are **0-indexed**. Columns count Unicode scalar values, not bytes, so
//! positions stay meaningful in files containing multi-byte characters;
//! which is the normal case for the sources this workspace analyzes.

// ============================================================================
// Conversions
// ============================================================================

/// Convert a byte offset to 1-indexed line and column (Unicode-aware).
///
/// If `offset` exceeds the content length, returns the position at the end
/// of the content.
pub fn byte_offset_to_position(content: &str, offset: usize) -> (u32, u32) {
    let mut line = 1u32;
    let mut col = 1u32;
    let mut current = 0usize;

    for ch in content.chars() {
        if current >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
        current += ch.len_utf8();
    }

    (line, col)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_content() {
        assert_eq!(byte_offset_to_position("hello", 0), (1, 1));
    }

    #[test]
    fn second_line() {
        let content = "line1\nline2";
        assert_eq!(byte_offset_to_position(content, 6), (2, 1));
        assert_eq!(byte_offset_to_position(content, 8), (2, 3));
    }

    #[test]
    fn columns_count_chars_not_bytes() {
        // 'ж' is 2 bytes but one column.
        let content = "aж b";
        assert_eq!(byte_offset_to_position(content, 3), (1, 3));
    }

    #[test]
    fn offset_past_end_clamps() {
        assert_eq!(byte_offset_to_position("ab", 99), (1, 3));
    }
}
