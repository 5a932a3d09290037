//! Errors raised by the code writer.

use thiserror::Error;

/// Errors returned by [`CodeWriter`](crate::CodeWriter) operations and
/// option parsing.
///
/// All of these are caller contract violations. They are reported before
/// the writer's buffer is touched, so a failed call leaves the output
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A required identifier or token was empty.
    #[error("argument `{argument}` must not be empty")]
    EmptyArgument {
        /// Name of the offending parameter.
        argument: &'static str,
    },

    /// A newline sequence other than `\n` or `\r\n` was requested.
    #[error("unsupported newline sequence {0:?} (expected \"\\n\" or \"\\r\\n\")")]
    InvalidNewLine(String),

    /// An indent step or tab size of zero.
    #[error("{field} must be greater than zero")]
    InvalidIndentSize {
        /// Name of the offending option.
        field: &'static str,
    },
}

/// Reject an empty required argument.
#[inline]
pub(crate) fn require(argument: &'static str, value: &str) -> Result<(), CodegenError> {
    if value.is_empty() {
        Err(CodegenError::EmptyArgument { argument })
    } else {
        Ok(())
    }
}
