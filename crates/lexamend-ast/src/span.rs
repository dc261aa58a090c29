//! Source location tracking

use serde::{Deserialize, Serialize};

/// A span representing a range in the source sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the start
    pub start: usize,
    /// Byte offset of the end (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Merge two spans into one that covers both
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Whether `other` lies entirely within this span
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The source text this span covers
    pub fn text(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::dummy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_covers_both() {
        let a = Span::new(4, 10);
        let b = Span::new(7, 15);
        let merged = a.merge(b);
        assert_eq!(merged, Span::new(4, 15));
        assert!(merged.contains(a));
        assert!(merged.contains(b));
    }

    #[test]
    fn test_merge_disjoint() {
        let merged = Span::new(0, 2).merge(Span::new(8, 9));
        assert_eq!(merged, Span::new(0, 9));
    }
}
