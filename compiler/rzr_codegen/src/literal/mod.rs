//! C# String Literals
//!
//! Encodes arbitrary text as a C# string literal in one of two forms:
//!
//! - **Verbatim** (`@"..."`): only `"` is escaped, by doubling. Used for
//!   mid-sized text, where keeping line breaks raw keeps the output readable.
//! - **Escaped** (`"..."`): control and quote characters use backslash
//!   escapes. Used for short text, very long text, and anything containing
//!   NUL (which a verbatim literal cannot carry through every toolchain).
//!
//! The length bounds are compatibility constants and must not drift. They
//! are measured in UTF-16 code units, the unit string lengths have on the
//! platform consuming the generated code, so a character outside the Basic
//! Multilingual Plane counts twice.

use memchr::memchr;

use crate::CodeWriter;

/// Shortest text (in UTF-16 code units) written as a verbatim literal.
pub const VERBATIM_MIN_LEN: usize = 256;

/// Longest text (in UTF-16 code units) written as a verbatim literal.
pub const VERBATIM_MAX_LEN: usize = 1500;

/// Encoding chosen for a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralForm {
    /// `@"..."` with doubled quotes.
    Verbatim,
    /// `"..."` with backslash escapes.
    Escaped,
}

impl LiteralForm {
    /// Pick the form for `text`.
    pub fn select(text: &str) -> LiteralForm {
        // Byte length bounds the UTF-16 length from above.
        if text.len() < VERBATIM_MIN_LEN {
            return LiteralForm::Escaped;
        }
        if (VERBATIM_MIN_LEN..=VERBATIM_MAX_LEN).contains(&utf16_len_capped(text))
            && memchr(0, text.as_bytes()).is_none()
        {
            LiteralForm::Verbatim
        } else {
            LiteralForm::Escaped
        }
    }
}

/// UTF-16 length of `text`, counting stops once it exceeds the upper bound.
fn utf16_len_capped(text: &str) -> usize {
    let mut units = 0;
    for c in text.chars() {
        units += c.len_utf16();
        if units > VERBATIM_MAX_LEN {
            break;
        }
    }
    units
}

/// Encode `text` as a C# string literal.
///
/// # Example
///
/// ```
/// use rzr_codegen::to_literal;
///
/// assert_eq!(to_literal("a\"b\n"), r#""a\"b\n""#);
/// assert_eq!(to_literal(""), r#""""#);
/// ```
pub fn to_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    match LiteralForm::select(text) {
        LiteralForm::Verbatim => write_verbatim(text, |piece| out.push_str(piece)),
        LiteralForm::Escaped => write_escaped(text, |piece| out.push_str(piece)),
    }
    out
}

/// Emit `text` as a verbatim literal, piece by piece.
pub fn write_verbatim(text: &str, mut emit: impl FnMut(&str)) {
    emit("@\"");
    write_verbatim_content(text, &mut emit);
    emit("\"");
}

/// Emit the body of a verbatim literal: `text` with every `"` doubled.
fn write_verbatim_content(text: &str, emit: &mut impl FnMut(&str)) {
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(found) = memchr(b'"', &bytes[start..]) {
        let end = start + found;
        emit(&text[start..end]);
        emit("\"\"");
        start = end + 1;
    }
    emit(&text[start..]);
}

/// Emit `text` as a backslash-escaped literal, piece by piece.
pub fn write_escaped(text: &str, mut emit: impl FnMut(&str)) {
    emit("\"");
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let (escape, width) = match bytes[i] {
            b'\r' => ("\\r", 1),
            b'\t' => ("\\t", 1),
            b'"' => ("\\\"", 1),
            b'\'' => ("\\'", 1),
            b'\\' => ("\\\\", 1),
            b'\0' => ("\\0", 1),
            b'\n' => ("\\n", 1),
            // U+2028 LINE SEPARATOR / U+2029 PARAGRAPH SEPARATOR, UTF-8 E2 80 A8/A9
            0xE2 if bytes.get(i + 1) == Some(&0x80) && bytes.get(i + 2) == Some(&0xA8) => {
                ("\\u2028", 3)
            }
            0xE2 if bytes.get(i + 1) == Some(&0x80) && bytes.get(i + 2) == Some(&0xA9) => {
                ("\\u2029", 3)
            }
            _ => {
                i += 1;
                continue;
            }
        };
        emit(&text[start..i]);
        emit(escape);
        i += width;
        start = i;
    }
    emit(&text[start..]);
    emit("\"");
}

impl CodeWriter {
    /// Write `text` as a C# string literal.
    ///
    /// Verbatim content is written with indentation suspended, so line
    /// breaks inside the literal never pick up leading whitespace.
    pub fn write_string_literal(&mut self, text: &str) -> &mut Self {
        let form = LiteralForm::select(text);
        tracing::trace!(len = text.len(), ?form, "string literal");
        match form {
            LiteralForm::Verbatim => {
                // The opening token lands at the current indent; the body
                // and closing quote must not be indented.
                self.write("@\"");
                let indent = self.current_indent();
                self.set_current_indent(0);
                write_verbatim_content(text, &mut |piece: &str| {
                    self.write(piece);
                });
                self.write("\"");
                self.set_current_indent(indent);
            }
            LiteralForm::Escaped => write_escaped(text, |piece| {
                self.write(piece);
            }),
        }
        self
    }
}
