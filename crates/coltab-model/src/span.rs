use serde::{Deserialize, Serialize};

/// Half-open character interval `[start, end)` within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if the two intervals share at least one position.
    ///
    /// Touching intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.ends_before(other) || other.ends_before(self))
    }

    /// Returns true if this interval lies entirely to the left of `other`.
    pub fn ends_before(&self, other: &Span) -> bool {
        self.end <= other.start
    }
}

/// A maximal run of non-whitespace characters and where it sits on its line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            span: Span::new(start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_partial() {
        assert!(Span::new(0, 3).overlaps(&Span::new(2, 5)));
        assert!(Span::new(2, 5).overlaps(&Span::new(0, 3)));
    }

    #[test]
    fn test_overlap_containment() {
        assert!(Span::new(0, 10).overlaps(&Span::new(4, 5)));
        assert!(Span::new(4, 5).overlaps(&Span::new(0, 10)));
    }

    #[test]
    fn test_touching_spans_do_not_overlap() {
        let left = Span::new(0, 3);
        let right = Span::new(3, 6);
        assert!(!left.overlaps(&right));
        assert!(!right.overlaps(&left));
        assert!(left.ends_before(&right));
        assert!(!right.ends_before(&left));
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(4, 9);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(2, 2).is_empty());
    }
}
