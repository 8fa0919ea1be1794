/*!
# Source position types (TextSpan, Position, LineIndex)

Centralized location types used across the analyzer. The engine itself works
in byte offsets; line/column positions exist only for diagnostic display.
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Half-open byte span `[start, end)` within one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: u32,
    pub end: u32,
}

impl TextSpan {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    pub fn empty_at(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when the two spans share at least one byte. An empty span never
    /// overlaps anything, even sitting inside a non-empty span.
    pub fn overlaps(&self, other: &TextSpan) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    pub fn contains(&self, other: &TextSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}

/// Position in source code (zero-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Line index for fast offset->(line,column) mapping.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offsets where each line starts. Arc keeps clones cheap.
    line_starts: Arc<Vec<u32>>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut starts = Vec::with_capacity(text.len() / 32 + 1);
        starts.push(0u32);
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                starts.push((i + 1) as u32);
            }
        }
        Self { line_starts: Arc::new(starts) }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn to_position(&self, offset: u32) -> Position {
        // Binary search for the last line_start <= offset.
        let starts = &self.line_starts;
        let mut lo = 0usize;
        let mut hi = starts.len();
        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if starts[mid] <= offset {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let line_start = starts[lo];
        Position::new(lo, (offset - line_start) as usize, offset as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_overlap() {
        let a = TextSpan::new(2, 6);
        assert!(a.overlaps(&TextSpan::new(5, 9)));
        assert!(a.overlaps(&TextSpan::new(0, 3)));
        assert!(!a.overlaps(&TextSpan::new(6, 9)));
        assert!(!a.overlaps(&TextSpan::new(0, 2)));
    }

    #[test]
    fn test_empty_span_never_overlaps() {
        let empty = TextSpan::empty_at(4);
        assert!(!empty.overlaps(&TextSpan::new(0, 10)));
        assert!(!TextSpan::new(0, 10).overlaps(&empty));
        assert!(!empty.overlaps(&empty));
    }

    #[test]
    fn test_line_index_basic() {
        let text = "line1\nline2\nlast";
        let idx = LineIndex::new(text);
        assert_eq!(idx.line_count(), 3);
        let p = idx.to_position(7); // 'i' in line2
        assert_eq!(p.line, 1);
        assert_eq!(p.column, 1);
    }

    #[test]
    fn test_line_index_offset_on_line_start() {
        let idx = LineIndex::new("ab\ncd");
        let p = idx.to_position(3);
        assert_eq!(p.line, 1);
        assert_eq!(p.column, 0);
    }
}
