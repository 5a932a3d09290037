//! Code Writer
//!
//! Append-only text buffer that keeps the write cursor's location current
//! and materializes indentation lazily.
//!
//! # Indentation
//!
//! Indentation is never written eagerly. A write that ends in a line break
//! leaves the writer "after newline"; the next write that does not itself
//! start with a line break first emits the current indent, then clears the
//! flag. Line breaks embedded inside a single write are not indented.

use std::fmt;

use rzr_ir::SourceLocation;

use crate::options::CodeWriterOptions;
use crate::tracker::{self, is_line_break};
use crate::CodegenError;

/// Initial buffer capacity for a fresh writer.
const INITIAL_CAPACITY: usize = 4096;

/// Source-tracking output buffer.
///
/// A writer belongs to one generation session. It is not synchronized:
/// callers sharing it across threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buffer: String,
    location: SourceLocation,
    current_indent: usize,
    /// Cursor is right after a line break and the indent for the new line
    /// has not been written yet.
    is_after_new_line: bool,
    options: CodeWriterOptions,
}

impl CodeWriter {
    /// Create a writer with default options.
    pub fn new() -> Self {
        Self::from_valid_options(CodeWriterOptions::default(), INITIAL_CAPACITY)
    }

    /// Create a writer with custom options.
    pub fn with_options(options: CodeWriterOptions) -> Result<Self, CodegenError> {
        options.validate()?;
        tracing::debug!(
            indent_size = options.indent_size,
            new_line = %options.new_line,
            indent_with_tabs = options.indent_with_tabs,
            tab_size = options.tab_size,
            "code writer options"
        );
        Ok(Self::from_valid_options(options, INITIAL_CAPACITY))
    }

    /// Create a writer with default options and pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_valid_options(CodeWriterOptions::default(), capacity)
    }

    fn from_valid_options(options: CodeWriterOptions, capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            location: SourceLocation::ZERO,
            current_indent: 0,
            is_after_new_line: true,
            options,
        }
    }

    /// Get the writer's configuration.
    pub fn options(&self) -> &CodeWriterOptions {
        &self.options
    }

    /// Current cursor location.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Indent width applied at the start of the next line.
    #[inline]
    pub fn current_indent(&self) -> usize {
        self.current_indent
    }

    /// Set the indent width applied at the start of the next line.
    ///
    /// Text already on the current line is unaffected.
    pub fn set_current_indent(&mut self, width: usize) {
        self.current_indent = width;
    }

    /// Whether the cursor is right after a line break with indentation
    /// still pending.
    #[inline]
    pub fn is_after_new_line(&self) -> bool {
        self.is_after_new_line
    }

    /// Length of the output in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Last character written, if any.
    pub fn last_char(&self) -> Option<char> {
        self.buffer.chars().next_back()
    }

    /// Whether the output ends with `\n`.
    ///
    /// A bare `\r` tail does not count: a following `\n` would join it into
    /// a single `\r\n` break.
    pub fn ends_with_new_line(&self) -> bool {
        self.buffer.ends_with('\n')
    }

    /// Borrow the output written so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Copy of the output written so far.
    ///
    /// Does not reset the writer; calling it twice without writing in
    /// between yields identical text.
    pub fn generate_code(&self) -> String {
        self.buffer.clone()
    }

    /// Consume the writer and return its output.
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Write `text`, indenting first if the cursor starts a fresh line.
    ///
    /// Writing an empty string is a no-op.
    pub fn write(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if self.is_after_new_line && !is_line_break(text.as_bytes()[0]) {
            self.materialize_indent(self.current_indent);
        }
        self.append(text);
        self
    }

    /// Write `text` if present. `None` is a no-op.
    pub fn write_optional(&mut self, text: Option<&str>) -> &mut Self {
        match text {
            Some(text) => self.write(text),
            None => self,
        }
    }

    /// Write the configured line terminator.
    pub fn newline(&mut self) -> &mut Self {
        let new_line = self.options.new_line.as_str();
        self.write(new_line)
    }

    /// Write `text` followed by the configured line terminator.
    pub fn writeln(&mut self, text: &str) -> &mut Self {
        self.write(text).newline()
    }

    /// Emit `width` columns of indentation now, if the cursor starts a
    /// fresh line. Mid-line this does nothing.
    ///
    /// The pending indent for the line is consumed, so the next write is
    /// not indented again.
    pub fn indent(&mut self, width: usize) -> &mut Self {
        if self.is_after_new_line {
            self.materialize_indent(width);
        }
        self
    }

    /// Start a new line unless the cursor already sits at one.
    pub fn ensure_line_start(&mut self) -> &mut Self {
        if !self.is_empty() && !self.location.is_line_start() {
            self.newline();
        }
        self
    }

    /// Write `token` when the last character written is not whitespace.
    ///
    /// Used to separate an opening brace from preceding code.
    pub(crate) fn auto_space(&mut self, token: &str) {
        if self.last_char().is_some_and(|c| !c.is_whitespace()) {
            self.write(token);
        }
    }

    fn materialize_indent(&mut self, width: usize) {
        self.is_after_new_line = false;
        let (tabs, spaces) = self.options.indent_units(width);
        if tabs + spaces == 0 {
            return;
        }
        self.buffer.extend(std::iter::repeat('\t').take(tabs));
        self.buffer.extend(std::iter::repeat(' ').take(spaces));
        self.location = self.location.advance_columns(tabs + spaces);
    }

    fn append(&mut self, text: &str) {
        let preceding = self.buffer.as_bytes().last().copied();
        self.buffer.push_str(text);
        self.location = tracker::advance(self.location, preceding, text);
        self.is_after_new_line = text.as_bytes().last().is_some_and(|&b| is_line_break(b));
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for CodeWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s);
        Ok(())
    }
}

impl fmt::Display for CodeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
