//! Scoped Builders
//!
//! Guards that bracket a region of output. Creating a guard writes the
//! opening text; dropping it writes the closing text, on every exit path
//! including early returns and unwinding.
//!
//! Each guard holds the writer's only mutable borrow and derefs to the
//! writer, so the body writes through the guard and an outer guard cannot
//! be closed while an inner one is alive.
//!
//! ```
//! use rzr_codegen::CodeWriter;
//!
//! let mut writer = CodeWriter::new();
//! {
//!     let mut scope = writer.build_scope();
//!     scope.write("Inside");
//! }
//! assert_eq!(writer.as_str(), "{\n    Inside\n}\n");
//! ```

use std::ops::{Deref, DerefMut};

use rzr_ir::SourceSpan;

use crate::CodeWriter;

/// Directive keyword mapping following lines to an original location.
pub const LINE_DIRECTIVE: &str = "#line";

/// Directive restoring the compiler's own line numbering.
pub const LINE_DEFAULT_DIRECTIVE: &str = "#line default";

/// Directive hiding following lines from debuggers and symbol views.
pub const LINE_HIDDEN_DIRECTIVE: &str = "#line hidden";

/// A `{ ... }` block.
///
/// Opening: a space if the previous character is not whitespace, `{`, a
/// newline, and one indent step. Closing: a newline if the previous
/// character is not whitespace, the indent step removed, `}`, a newline.
#[must_use = "the block closes as soon as the guard is dropped"]
pub struct BlockScope<'w> {
    writer: &'w mut CodeWriter,
    /// Indent in effect before the block opened.
    outer_indent: usize,
    /// Indent set for the block body.
    body_indent: usize,
}

impl<'w> BlockScope<'w> {
    pub(crate) fn open(writer: &'w mut CodeWriter) -> Self {
        writer.auto_space(" ");
        writer.writeln("{");
        let outer_indent = writer.current_indent();
        let body_indent = outer_indent + writer.options().indent_size;
        writer.set_current_indent(body_indent);
        tracing::trace!(outer_indent, body_indent, "open block");
        BlockScope {
            writer,
            outer_indent,
            body_indent,
        }
    }
}

impl Drop for BlockScope<'_> {
    fn drop(&mut self) {
        let new_line = self.writer.options().new_line.as_str();
        self.writer.auto_space(new_line);
        let found = self.writer.current_indent();
        if found == self.body_indent {
            self.writer.set_current_indent(self.outer_indent);
        } else {
            // Someone inside the block changed the indent and kept it.
            tracing::debug!(
                expected = self.body_indent,
                found,
                "indent changed inside block; not restoring"
            );
        }
        self.writer.writeln("}");
        tracing::trace!(indent = self.writer.current_indent(), "close block");
    }
}

impl Deref for BlockScope<'_> {
    type Target = CodeWriter;

    fn deref(&self) -> &CodeWriter {
        self.writer
    }
}

impl DerefMut for BlockScope<'_> {
    fn deref_mut(&mut self) -> &mut CodeWriter {
        self.writer
    }
}

/// A region attributed to an original source location via `#line`.
///
/// Inactive (writes nothing at all) when the span has no file path.
#[must_use = "the region closes as soon as the guard is dropped"]
pub struct LinePragmaScope<'w> {
    writer: &'w mut CodeWriter,
    /// Indent to restore on close; `None` when inactive.
    start_indent: Option<usize>,
}

impl<'w> LinePragmaScope<'w> {
    pub(crate) fn open(writer: &'w mut CodeWriter, span: &SourceSpan) -> Self {
        let Some(file_path) = span.file_path() else {
            return LinePragmaScope {
                writer,
                start_indent: None,
            };
        };

        let start_indent = writer.current_indent();
        writer.set_current_indent(0);
        writer.ensure_line_start();
        write_line_directive(writer, span.line_number(), file_path);
        tracing::trace!(file_path, line = span.line_number(), "open line pragma");

        LinePragmaScope {
            writer,
            start_indent: Some(start_indent),
        }
    }

    /// Whether this region emits directives.
    pub fn is_active(&self) -> bool {
        self.start_indent.is_some()
    }
}

impl Drop for LinePragmaScope<'_> {
    fn drop(&mut self) {
        let Some(start_indent) = self.start_indent else {
            return;
        };

        let ended_with_new_line = self.writer.ends_with_new_line();
        // At least one blank line between generated code and the pragmas.
        self.writer.newline();
        if !ended_with_new_line {
            // The newline above only terminated the last code line.
            self.writer.newline();
        }
        self.writer
            .writeln(LINE_DEFAULT_DIRECTIVE)
            .writeln(LINE_HIDDEN_DIRECTIVE);
        self.writer.set_current_indent(start_indent);
        tracing::trace!(indent = start_indent, "close line pragma");
    }
}

impl Deref for LinePragmaScope<'_> {
    type Target = CodeWriter;

    fn deref(&self) -> &CodeWriter {
        self.writer
    }
}

impl DerefMut for LinePragmaScope<'_> {
    fn deref_mut(&mut self) -> &mut CodeWriter {
        self.writer
    }
}

/// Write `#line <line_number> "<file_path>"` and a newline.
pub(crate) fn write_line_directive(writer: &mut CodeWriter, line_number: usize, file_path: &str) {
    writer
        .write(LINE_DIRECTIVE)
        .write(" ")
        .write(&line_number.to_string())
        .write(" \"")
        .write(file_path)
        .writeln("\"");
}

impl CodeWriter {
    /// Open a `{ ... }` block.
    pub fn build_scope(&mut self) -> BlockScope<'_> {
        BlockScope::open(self)
    }

    /// Open a lambda: `[async ](a, b) => { ... }`.
    pub fn build_lambda(&mut self, is_async: bool, parameters: &[&str]) -> BlockScope<'_> {
        if is_async {
            self.write("async ");
        }
        self.write("(");
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(parameter);
        }
        self.write(") => ");
        BlockScope::open(self)
    }

    /// Open a region mapped to `span` with `#line` directives.
    ///
    /// A span without a file path yields an inactive guard.
    pub fn build_line_pragma(&mut self, span: &SourceSpan) -> LinePragmaScope<'_> {
        LinePragmaScope::open(self, span)
    }
}

#[cfg(test)]
mod tests;
