//! rzr Code Generation
//!
//! Source-tracking code writer for generated C# output.
//!
//! # Architecture
//!
//! Every write flows through the same pipeline:
//!
//! 1. **Indentation**: if the cursor sits right after a line break, the
//!    current indent is materialized before the text
//! 2. **Buffer**: the text is appended to the owned output buffer
//! 3. **Tracking**: the cursor location advances by scanning only the
//!    appended slice
//!
//! Scoped builders (`{ ... }` blocks, lambdas, `#line` regions) are guards
//! that borrow the writer mutably; their closing text is written on drop,
//! so nesting is strictly LIFO by construction.
//!
//! # Modules
//!
//! - [`tracker`]: incremental line/column tracking over appended slices
//! - [`writer`]: the [`CodeWriter`] buffer with lazy indentation
//! - [`literal`]: C# string literal escaping
//! - [`scope`]: block and line-pragma guards
//! - [`emitters`]: declaration and statement helpers
//! - [`options`]: writer configuration

pub mod emitters;
pub mod error;
pub mod literal;
pub mod options;
pub mod scope;
pub mod tracker;
pub mod writer;

pub use error::CodegenError;
pub use literal::{to_literal, LiteralForm, VERBATIM_MAX_LEN, VERBATIM_MIN_LEN};
pub use options::{CodeWriterOptions, NewLine, DEFAULT_INDENT_SIZE, DEFAULT_TAB_SIZE};
pub use rzr_ir::{SourceLocation, SourceSpan};
pub use scope::{BlockScope, LinePragmaScope};
pub use writer::CodeWriter;
