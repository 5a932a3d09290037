//! Code writer configuration.

use std::fmt;
use std::str::FromStr;

use crate::CodegenError;

/// Default indentation step for scoped builders.
pub const DEFAULT_INDENT_SIZE: usize = 4;

/// Default width of a tab character when indenting with tabs.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Line terminator written by [`CodeWriter::newline`](crate::CodeWriter::newline).
///
/// Only the two sequences C# tooling accepts are representable. The
/// position tracker still understands a bare `\r` written as raw text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NewLine {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl NewLine {
    /// The terminator text.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            NewLine::Lf => "\n",
            NewLine::CrLf => "\r\n",
        }
    }
}

impl FromStr for NewLine {
    type Err = CodegenError;

    /// Accepts the raw sequences (`"\n"`, `"\r\n"`) or their names
    /// (`lf`, `crlf`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "\n" => Ok(NewLine::Lf),
            "\r\n" => Ok(NewLine::CrLf),
            _ if s.eq_ignore_ascii_case("lf") => Ok(NewLine::Lf),
            _ if s.eq_ignore_ascii_case("crlf") => Ok(NewLine::CrLf),
            _ => Err(CodegenError::InvalidNewLine(s.to_owned())),
        }
    }
}

impl fmt::Display for NewLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewLine::Lf => f.write_str("lf"),
            NewLine::CrLf => f.write_str("crlf"),
        }
    }
}

/// Configuration for a [`CodeWriter`](crate::CodeWriter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeWriterOptions {
    /// Columns added by each nested block scope.
    pub indent_size: usize,

    /// Terminator written for explicit newlines.
    pub new_line: NewLine,

    /// Materialize indentation as tabs (plus remainder spaces).
    pub indent_with_tabs: bool,

    /// Columns covered by one tab when `indent_with_tabs` is set.
    pub tab_size: usize,
}

impl Default for CodeWriterOptions {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
            new_line: NewLine::Lf,
            indent_with_tabs: false,
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

impl CodeWriterOptions {
    /// Default options with a different indentation step.
    pub fn with_indent_size(indent_size: usize) -> Self {
        Self {
            indent_size,
            ..Default::default()
        }
    }

    /// Default options with a different line terminator.
    pub fn with_new_line(new_line: NewLine) -> Self {
        Self {
            new_line,
            ..Default::default()
        }
    }

    /// Default options indenting with tabs of `tab_size` columns.
    pub fn with_tabs(tab_size: usize) -> Self {
        Self {
            indent_with_tabs: true,
            tab_size,
            ..Default::default()
        }
    }

    /// Check that sizes are usable.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.indent_size == 0 {
            return Err(CodegenError::InvalidIndentSize {
                field: "indent_size",
            });
        }
        if self.tab_size == 0 {
            return Err(CodegenError::InvalidIndentSize { field: "tab_size" });
        }
        Ok(())
    }

    /// Split an indent width into `(tabs, spaces)`.
    #[inline]
    pub(crate) fn indent_units(&self, width: usize) -> (usize, usize) {
        if self.indent_with_tabs {
            (width / self.tab_size, width % self.tab_size)
        } else {
            (0, width)
        }
    }
}
