//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Every phase of the assembler reports malformed input to a [`Handler`]
//! instead of aborting. The handler only collects; deciding whether the
//! collected diagnostics are fatal, and how they are printed, is left to
//! the caller.
//!
//! # Examples
//!
//! ```
//! use arxsm_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use arxsm_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character `?`")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::point(1, 4))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::error::{DiagnosticError, DiagnosticResult};
use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Renders the diagnostic as
    ///
    /// ```text
    /// error[E1001]: unexpected character `?`
    ///  --> 3:12
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span != Span::DUMMY {
            write!(f, "\n --> {}", self.span)?;
        }
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for note in &self.notes {
            write!(f, "\n = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n = help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics behind a `RefCell`, so every phase can
/// report through a shared reference. It can be configured to panic on
/// errors for testing.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level.is_error() {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_warning())
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Returns `Err` if any error has been reported
    ///
    /// Phases call this at the point where continuing with erroneous input
    /// would only produce follow-on noise.
    pub fn abort_if_errors(&self) -> DiagnosticResult<()> {
        match self.error_count() {
            0 => Ok(()),
            count => Err(DiagnosticError::ErrorsReported { count }),
        }
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow().len())
            .field("panic_on_error", &self.panic_on_error)
            .finish()
    }
}
