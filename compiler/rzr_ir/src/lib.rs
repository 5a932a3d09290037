//! Shared value types for the rzr code generator.
//!
//! # Modules
//!
//! - [`location`]: write-cursor positions in generated output
//! - [`span`]: regions of the original (pre-generation) source

pub mod location;
pub mod span;

pub use location::SourceLocation;
pub use span::SourceSpan;
