//! Positions in generated output.
//!
//! A [`SourceLocation`] names a point in emitted text by three coordinates:
//! the absolute character offset, the 0-based line index, and the 0-based
//! character index within that line. All three count Unicode scalar values,
//! not bytes.

use std::fmt;

/// Position of the write cursor in generated output.
///
/// # Invariants
/// - `column_index <= absolute_offset`
/// - `column_index` is 0 immediately after a line break
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    /// Characters written since the start of output.
    pub absolute_offset: usize,
    /// Line breaks seen so far.
    pub line_index: usize,
    /// Characters since the last line break.
    pub column_index: usize,
}

impl SourceLocation {
    /// Start of output.
    pub const ZERO: SourceLocation = SourceLocation {
        absolute_offset: 0,
        line_index: 0,
        column_index: 0,
    };

    /// Create a new location.
    #[inline]
    pub const fn new(absolute_offset: usize, line_index: usize, column_index: usize) -> Self {
        SourceLocation {
            absolute_offset,
            line_index,
            column_index,
        }
    }

    /// 1-based line number, as printed in `#line` directives and editors.
    #[inline]
    pub const fn line_number(&self) -> usize {
        self.line_index + 1
    }

    /// Whether this location sits at the start of a line.
    #[inline]
    pub const fn is_line_start(&self) -> bool {
        self.column_index == 0
    }

    /// Advance along the current line by `count` characters.
    #[inline]
    #[must_use]
    pub const fn advance_columns(self, count: usize) -> SourceLocation {
        SourceLocation {
            absolute_offset: self.absolute_offset + count,
            line_index: self.line_index,
            column_index: self.column_index + count,
        }
    }
}

impl fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}@{}",
            self.line_index, self.column_index, self.absolute_offset
        )
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_number(), self.column_index + 1)
    }
}

#[cfg(test)]
mod tests;
