//! Source location spans tied to their originating file.

use std::fmt;
use std::ops::Range;

use crate::SourceFileRef;

/// Error when creating a span from a range that exceeds `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => write!(
                f,
                "span start {} (0x{:X}) exceeds u32::MAX (0x{:X})",
                v,
                v,
                u32::MAX
            ),
            SpanError::EndTooLarge(v) => write!(
                f,
                "span end {} (0x{:X}) exceeds u32::MAX (0x{:X})",
                v,
                v,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for SpanError {}

/// Half-open source region `[start, start + length)` within one file.
///
/// Derived once from an AST node when a diagnostic is created and never
/// mutated afterward. Staying inside the file is the position resolver's
/// obligation: `start + length` is assumed not to pass the file's end.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceSpan {
    /// File the region belongs to.
    pub file: SourceFileRef,
    /// Byte offset from the file start.
    pub start: u32,
    /// Width of the region in bytes.
    pub length: u32,
}

impl SourceSpan {
    /// Create a new span.
    pub fn new(file: SourceFileRef, start: u32, length: u32) -> Self {
        SourceSpan {
            file,
            start,
            length,
        }
    }

    /// Try to create a span from a byte range.
    ///
    /// Returns an error if the range exceeds `u32::MAX` bytes.
    /// Use this for fallible conversion when handling user input.
    pub fn try_from_range(file: SourceFileRef, range: Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        // A reversed range clamps to an empty span at its start.
        Ok(SourceSpan {
            file,
            start,
            length: end.saturating_sub(start),
        })
    }

    /// Create from a byte range.
    ///
    /// # Panics
    /// Panics if the range exceeds `u32::MAX` bytes.
    /// Use `try_from_range` for fallible conversion when handling user input.
    pub fn from_range(file: SourceFileRef, range: Range<usize>) -> Self {
        Self::try_from_range(file, range).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create a point span (zero-length).
    pub fn point(file: SourceFileRef, offset: u32) -> Self {
        SourceSpan {
            file,
            start: offset,
            length: 0,
        }
    }

    /// Byte offset one past the end of the region.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.length
    }

    /// Width of the region in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.length
    }

    /// Check if the region is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Convert to a `std::ops::Range` of byte offsets.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.file, self.start, self.end())
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.file, self.start, self.end())
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::SourceSpan;
    crate::static_assert_size!(SourceSpan, 24);
}
