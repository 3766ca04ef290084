//! The numeric buffer and index-range views over it.
//!
//! One [`DigitBuffer`] is owned per top-level conversion. Every recursive
//! step of the rewrite engine borrows the same buffer, so a position marked
//! consumed in one frame is immediately seen as consumed by all others.
//! [`View`]s are plain `(begin, end)` ranges; operations that read or
//! write buffer content borrow the buffer explicitly.

use std::borrow::Cow;

use super::types::PLACEHOLDER;

/// Mutable character buffer holding the number under transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBuffer {
    bytes: Vec<u8>,
    revision: u64,
}

impl DigitBuffer {
    /// Create a buffer from a numeric string. Digits are opaque symbols.
    pub fn new(number: &str) -> Self {
        Self {
            bytes: number.as_bytes().to_vec(),
            revision: 0,
        }
    }

    /// Number of positions in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no positions at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw buffer content, placeholders included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Buffer content as text, placeholders included.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Counter bumped every time a [`View::fill`] changes at least one position.
    ///
    /// Two equal revisions mean the buffer text is unchanged in between.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// A view spanning the whole buffer.
    #[inline]
    pub fn full_view(&self) -> View {
        View::new(0, self.bytes.len())
    }

    /// Number of positions not yet overwritten by the placeholder.
    pub fn unconsumed(&self) -> usize {
        self.full_view().unconsumed(self)
    }

    /// The buffer with every placeholder removed: the digits no rule consumed.
    pub fn residue(&self) -> String {
        let kept: Vec<u8> = self
            .bytes
            .iter()
            .copied()
            .filter(|&b| b != PLACEHOLDER)
            .collect();
        String::from_utf8_lossy(&kept).into_owned()
    }
}

/// A `[begin, end)` window over a [`DigitBuffer`].
///
/// `0 <= begin <= end <= buffer.len()` holds for every view handed out by
/// the buffer, the matcher and the engine. An empty view means "no match"
/// or "nothing left to process".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct View {
    begin: usize,
    end: usize,
}

impl View {
    /// Create a view over `[begin, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end`.
    #[inline]
    pub fn new(begin: usize, end: usize) -> Self {
        assert!(begin <= end, "view begin {begin} past end {end}");
        Self { begin, end }
    }

    /// An empty view anchored at `end`.
    #[inline]
    pub fn empty_at(end: usize) -> Self {
        Self::new(end, end)
    }

    /// Left boundary (inclusive).
    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Right boundary (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of positions covered.
    #[inline]
    pub fn size(&self) -> usize {
        self.end - self.begin
    }

    /// Empty views signal "no match" or "nothing left".
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The view reaches the right end of the buffer.
    #[inline]
    pub fn right_aligned(&self, buffer: &DigitBuffer) -> bool {
        self.end == buffer.len()
    }

    /// The view starts at the left end of the buffer.
    #[inline]
    pub fn left_aligned(&self) -> bool {
        self.begin == 0
    }

    /// Same end, new begin.
    #[inline]
    pub fn with_begin(&self, begin: usize) -> Self {
        Self::new(begin, self.end)
    }

    /// Buffer content covered by this view.
    #[inline]
    pub fn slice<'a>(&self, buffer: &'a DigitBuffer) -> &'a [u8] {
        &buffer.bytes[self.begin..self.end]
    }

    /// Positions in this view not yet overwritten by the placeholder.
    pub fn unconsumed(&self, buffer: &DigitBuffer) -> usize {
        self.slice(buffer).iter().filter(|&&b| b != PLACEHOLDER).count()
    }

    /// Overwrite every position of the view with `placeholder`.
    ///
    /// Returns the number of positions that actually changed. The buffer
    /// revision moves only when that number is non-zero.
    pub fn fill(&self, buffer: &mut DigitBuffer, placeholder: u8) -> usize {
        let mut changed = 0;
        for b in &mut buffer.bytes[self.begin..self.end] {
            if *b != placeholder {
                *b = placeholder;
                changed += 1;
            }
        }
        if changed > 0 {
            buffer.revision += 1;
        }
        changed
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}
