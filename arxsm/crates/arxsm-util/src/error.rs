//! Core error types for arxsm-util crate

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// One or more errors were reported to the handler
    #[error("aborting due to {count} previous error(s)")]
    ErrorsReported {
        /// Number of error-level diagnostics collected
        count: usize,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
