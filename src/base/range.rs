use std::fmt::{self, Debug};

/// Half-open `[start, end)` byte range into the parsed source.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    const UNKNOWN_POS: usize = usize::MAX;

    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Range start should not exceed its end");

        Range { start, end }
    }

    /// The shared marker for spans that are not tracked (see `TextSpans::Unknown`).
    #[inline]
    pub const fn unknown() -> Self {
        Range {
            start: Self::UNKNOWN_POS,
            end: Self::UNKNOWN_POS,
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.start == Self::UNKNOWN_POS && self.end == Self::UNKNOWN_POS
    }

    #[inline]
    pub fn len(&self) -> usize {
        if self.is_unknown() {
            0
        } else {
            self.end - self.start
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        !self.is_unknown() && self.start <= offset && offset < self.end
    }
}

impl Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("[?..?)")
        } else {
            write!(f, "[{}..{})", self.start, self.end)
        }
    }
}

impl From<std::ops::Range<usize>> for Range {
    #[inline]
    fn from(range: std::ops::Range<usize>) -> Self {
        Range::new(range.start, range.end)
    }
}
