//! Incremental cursor tracking.
//!
//! The writer never rescans its buffer. After each append it hands the
//! tracker the location before the append, the byte that preceded the
//! appended slice, and the slice itself; the tracker returns the location
//! after it. Cost is linear in the slice.
//!
//! # Line Breaks
//!
//! `\n`, `\r` and `\r\n` each count as one break. A `\r\n` pair split
//! across two appends (`\r` ending one, `\n` starting the next) is still
//! one break: the `\r` was already credited, so the leading `\n` is
//! skipped.

use memchr::memchr2;
use rzr_ir::SourceLocation;

/// Whether `byte` starts or ends a line break.
#[inline]
pub fn is_line_break(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Location after appending `text` at `location`.
///
/// `preceding` is the last byte already in the buffer before `text`
/// (`None` for an empty buffer).
pub fn advance(location: SourceLocation, preceding: Option<u8>, text: &str) -> SourceLocation {
    if text.is_empty() {
        return location;
    }

    let bytes = text.as_bytes();
    let mut line_index = location.line_index;
    let mut pos = 0;
    // Byte offset where the current (last) line of `text` begins, if a
    // break was consumed in this slice.
    let mut line_start = None;

    if preceding == Some(b'\r') && bytes[0] == b'\n' {
        pos = 1;
        line_start = Some(1);
    }

    while let Some(found) = memchr2(b'\r', b'\n', &bytes[pos..]) {
        let at = pos + found;
        line_index += 1;
        pos = at + 1;
        if bytes[at] == b'\r' && bytes.get(pos) == Some(&b'\n') {
            pos += 1;
        }
        line_start = Some(pos);
    }

    let written = char_count(text);
    let column_index = match line_start {
        // Break bytes are ASCII, so `start` is a char boundary.
        Some(start) => char_count(&text[start..]),
        None => location.column_index + written,
    };

    SourceLocation {
        absolute_offset: location.absolute_offset + written,
        line_index,
        column_index,
    }
}

/// Number of Unicode scalar values in `text`.
#[inline]
fn char_count(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}
