//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use arxsm_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(format!("{}", Level::Warning), "warning");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// Each diagnostic has a severity level that determines whether the
/// assembler may go on to produce output and how the message is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that prevents assembly
    ///
    /// Lexical errors are always recovered locally, but they are still
    /// errors: the unit must not be assembled once one was reported.
    Error,
    /// A warning that doesn't prevent assembly
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
    /// An internal toolchain issue
    Bug,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error | Level::Bug)
    }

    /// Returns true if this level represents a warning
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Returns true if this level is informational (Note or Help)
    ///
    /// # Examples
    ///
    /// ```
    /// use arxsm_util::diagnostic::Level;
    ///
    /// assert!(Level::Note.is_info());
    /// assert!(Level::Help.is_info());
    /// assert!(!Level::Error.is_info());
    /// ```
    #[inline]
    pub const fn is_info(&self) -> bool {
        matches!(self, Level::Note | Level::Help)
    }

    /// Returns the canonical name for this level
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
            Level::Bug => "internal error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
