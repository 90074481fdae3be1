//! Common location and span types shared across the workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Span
// ============================================================================

/// Byte offsets into file content (snapshot-scoped).
///
/// Spans are half-open intervals: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: u64,
    /// End byte offset (exclusive).
    pub end: u64,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: u64, end: u64) -> Self {
        assert!(
            start <= end,
            "Span start ({}) must be <= end ({})",
            start,
            end
        );
        Span { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span overlaps with another.
    ///
    /// Two spans overlap if they share any byte positions.
    /// Adjacent spans (one ends where another starts) do NOT overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if this span contains another span entirely.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

// ============================================================================
// Location
// ============================================================================

/// Location in a source file or text resource.
///
/// - `file`: Workspace-relative path
/// - `line`: 1-indexed line number
/// - `col`: 1-indexed column
/// - `byte_start` / `byte_end`: Optional byte span within the file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// File path (workspace-relative).
    pub file: String,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub col: u32,
    /// Byte offset from file start (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_start: Option<u64>,
    /// Byte offset end, exclusive (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_end: Option<u64>,
}

impl Location {
    /// Create a new location without byte offsets.
    pub fn new(file: impl Into<String>, line: u32, col: u32) -> Self {
        Location {
            file: file.into(),
            line,
            col,
            byte_start: None,
            byte_end: None,
        }
    }

    /// Create a location with a full byte span.
    pub fn with_span(file: impl Into<String>, line: u32, col: u32, span: Span) -> Self {
        Location {
            file: file.into(),
            line,
            col,
            byte_start: Some(span.start),
            byte_end: Some(span.end),
        }
    }

    /// Zero-length location at the very start of a file.
    ///
    /// Used for findings that concern a file as a whole (e.g. its name)
    /// rather than any particular character inside it.
    pub fn file_start(file: impl Into<String>) -> Self {
        Location::with_span(file, 1, 1, Span::new(0, 0))
    }

    /// Comparison key for deterministic sorting: (file, line, col).
    fn sort_key(&self) -> (&str, u32, u32) {
        (&self.file, self.line, self.col)
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod span_tests {
        use super::*;

        #[test]
        fn span_overlap_detection() {
            let a = Span::new(0, 10);
            let b = Span::new(5, 15);
            let c = Span::new(10, 20);
            assert!(a.overlaps(&b));
            assert!(b.overlaps(&a));
            // Adjacent spans do not overlap
            assert!(!a.overlaps(&c));
        }

        #[test]
        fn span_containment() {
            let outer = Span::new(0, 100);
            let inner = Span::new(10, 20);
            assert!(outer.contains(&inner));
            assert!(!inner.contains(&outer));
        }

        #[test]
        fn empty_span() {
            let s = Span::new(5, 5);
            assert!(s.is_empty());
            assert_eq!(s.len(), 0);
            // An empty span strictly inside another still overlaps it; only
            // a disjoint span does not.
            assert!(s.overlaps(&Span::new(0, 10)));
            assert!(!s.overlaps(&Span::new(10, 20)));
        }

        #[test]
        #[should_panic(expected = "must be <=")]
        fn inverted_span_panics() {
            let _ = Span::new(10, 5);
        }
    }

    mod location_tests {
        use super::*;

        #[test]
        fn location_serializes_without_optional_offsets() {
            let loc = Location::new("src/app.cs", 42, 8);
            let json = serde_json::to_string(&loc).unwrap();
            assert!(!json.contains("byte_start"));
            assert!(!json.contains("byte_end"));
            assert!(json.contains("\"line\":42"));
        }

        #[test]
        fn file_start_is_zero_length() {
            let loc = Location::file_start("Прog.cs");
            assert_eq!(loc.line, 1);
            assert_eq!(loc.col, 1);
            assert_eq!(loc.byte_start, Some(0));
            assert_eq!(loc.byte_end, Some(0));
        }

        #[test]
        fn ordering_is_by_file_then_position() {
            let a = Location::new("a.cs", 2, 1);
            let b = Location::new("a.cs", 2, 5);
            let c = Location::new("b.cs", 1, 1);
            assert!(a < b);
            assert!(b < c);
        }
    }
}
