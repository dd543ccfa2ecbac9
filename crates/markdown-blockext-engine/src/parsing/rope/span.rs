/// A byte range `[start, end)` into the rope.
///
/// Blocks store spans rather than copied text; slicing the rope with a
/// block's span reproduces its exact source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at `at`.
    pub fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_takes_outer_bounds() {
        let a = Span::new(4, 10);
        let b = Span::new(0, 6);
        assert_eq!(a.cover(b), Span::new(0, 10));
    }

    #[test]
    fn contains_is_inclusive_of_bounds() {
        let outer = Span::new(2, 8);
        assert!(outer.contains(Span::new(2, 8)));
        assert!(outer.contains(Span::empty(5)));
        assert!(!outer.contains(Span::new(1, 3)));
    }

    #[test]
    fn len_saturates() {
        assert_eq!(Span::new(5, 3).len(), 0);
        assert!(Span::empty(7).is_empty());
    }
}
