//! Byte ranges tying blocks back to the lines they were scanned from.
//!
//! Offsets are stored as `u32`, so spans address the first 4 GiB of input.
//! Offsets past that point saturate at `u32::MAX` instead of wrapping; the
//! tree itself is unaffected, only the reported positions clamp.

/// A half-open byte range `[start, end)` in the source text.
///
/// ```rust
/// use temarlije_md::span::Span;
///
/// let heading = Span::new(0, 6);
/// let list = Span::new(8, 16);
/// assert_eq!(heading.merge(list), Span::new(0, 16));
/// assert_eq!(list.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a span from `usize` byte offsets, clamping each to `u32::MAX`.
    #[inline]
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self::new(clamp_offset(start), clamp_offset(end))
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[inline]
fn clamp_offset(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
