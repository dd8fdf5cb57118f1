//! arxsm-util - Core utilities shared by the arxsm assembler phases
//!
//! This crate holds the pieces every phase needs but none owns:
//!
//! - [`span`] - source locations (line, column, byte range within the line)
//! - [`diagnostic`] - diagnostics, diagnostic codes and the collecting [`Handler`]
//! - [`error`] - error types for the utilities themselves

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;
