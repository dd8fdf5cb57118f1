//! Diagnostic codes for categorizing assembler errors and warnings.
//!
//! # Examples
//!
//! ```
//! use arxsm_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors or "W" for warnings and `number` is zero-padded to four
/// digits. Lexer codes occupy the 1xxx range.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1xxx)
    // =========================================================================

    /// E1001: Lexer - Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string or character literal
    pub const E_LEXER_UNTERMINATED_LITERAL: Self = Self::new("E", 1002);
    /// E1003: Lexer - Invalid numeric literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: Lexer - Token not available (unknown or feature disabled)
    pub const E_LEXER_UNKNOWN_TOKEN: Self = Self::new("E", 1004);
    /// E1005: Lexer - Malformed character literal
    pub const E_LEXER_INVALID_CHAR_LITERAL: Self = Self::new("E", 1005);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
