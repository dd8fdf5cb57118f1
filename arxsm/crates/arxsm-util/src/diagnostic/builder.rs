//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with optional
/// highlighting of the specific column range.
///
/// # Examples
///
/// ```
/// use arxsm_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("add x1, x2, ?", 4, 13, 14, Some("unexpected character"));
/// assert!(snippet.format().contains('^'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line (`^`) under the
    /// highlighted range. Tabs in the source are mirrored in the caret line
    /// so the carets stay aligned.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line, width = width);
        result.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        for c in self.line.chars().take(underline_start) {
            result.push(if c == '\t' { '\t' } else { ' ' });
        }
        for _ in self.line.chars().count()..underline_start {
            result.push(' ');
        }
        result.push_str(&"^".repeat(underline_len));

        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use arxsm_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use arxsm_util::span::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character `?`")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::point(3, 12))
///     .help("remove the character")
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[must_use = "a diagnostic builder does nothing until `build` or `emit` is called"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Finish building and return the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
