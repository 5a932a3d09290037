//! Regions of the original template source.
//!
//! Generated code is attributed back to the template it came from through
//! `#line` directives. A [`SourceSpan`] carries everything such a directive
//! needs. A span without a file path is "unmapped": code generated from it
//! is not attributed to any original location.

use crate::SourceLocation;

/// Immutable descriptor of a region in an original source document.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceSpan {
    /// Path of the original document. `None` means "no mapping".
    pub file_path: Option<String>,
    /// Character offset of the region start.
    pub absolute_index: usize,
    /// 0-based line of the region start.
    pub line_index: usize,
    /// 0-based character within the start line.
    pub character_index: usize,
    /// Length of the region in characters.
    pub length: usize,
}

impl SourceSpan {
    /// Create a span attributed to `file_path`.
    pub fn new(
        file_path: impl Into<String>,
        absolute_index: usize,
        line_index: usize,
        character_index: usize,
        length: usize,
    ) -> Self {
        SourceSpan {
            file_path: Some(file_path.into()),
            absolute_index,
            line_index,
            character_index,
            length,
        }
    }

    /// Create a span with no file path.
    pub const fn unmapped(
        absolute_index: usize,
        line_index: usize,
        character_index: usize,
        length: usize,
    ) -> Self {
        SourceSpan {
            file_path: None,
            absolute_index,
            line_index,
            character_index,
            length,
        }
    }

    /// Create a span starting at `location`.
    pub fn from_location(
        file_path: Option<String>,
        location: SourceLocation,
        length: usize,
    ) -> Self {
        SourceSpan {
            file_path,
            absolute_index: location.absolute_offset,
            line_index: location.line_index,
            character_index: location.column_index,
            length,
        }
    }

    /// The file path, treating an empty path the same as a missing one.
    #[inline]
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref().filter(|path| !path.is_empty())
    }

    /// Whether code generated from this span should be mapped back to it.
    #[inline]
    pub fn is_mapped(&self) -> bool {
        self.file_path().is_some()
    }

    /// 1-based line number of the region start.
    #[inline]
    pub const fn line_number(&self) -> usize {
        self.line_index + 1
    }
}
