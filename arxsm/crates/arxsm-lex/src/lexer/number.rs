//! Number literal lexing.
//!
//! Lexemes are kept verbatim; the lexer only checks their shape.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `0`
//! - Hexadecimal: `0xFF`
//! - Binary: `0b1010`
//! - Float: `3.14`
//! - Immediate: `#` followed by any integer form, optionally negative:
//!   `#1`, `#-8`, `#0x10`

use arxsm_util::DiagnosticCode;

use super::core::Scanner;
use crate::token::TokenKind;

impl Scanner<'_, '_> {
    /// Lexes an integer or float literal.
    ///
    /// A second decimal point ends the literal with a diagnostic; scanning
    /// resumes at that `.`.
    pub(super) fn lex_number(&mut self) {
        if !self.eat_integer() {
            self.emit(TokenKind::Integer);
            return;
        }

        if !self.at_decimal_point() {
            self.emit(TokenKind::Integer);
            return;
        }

        self.cursor.advance();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        self.emit(TokenKind::Float);

        if self.at_decimal_point() {
            self.report_at(
                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                "invalid float literal: second decimal point".to_string(),
                self.cursor.position(),
                self.cursor.column(),
            );
        }
    }

    /// Lexes a `#` immediate.
    pub(super) fn lex_immediate(&mut self) {
        self.cursor.advance();

        if self.cursor.current_char() == '-' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
        }

        if !self.cursor.current_char().is_ascii_digit() {
            self.report(
                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                "expected digits after `#`".to_string(),
            );
            return;
        }

        self.eat_integer();
        self.emit(TokenKind::Immediate);
    }

    /// Consumes an integer starting at a digit. Returns true if it was a
    /// plain decimal integer that may continue as a float.
    ///
    /// When a `0x` or `0b` prefix has no digits after it, only the `0` is
    /// consumed and a diagnostic is reported.
    fn eat_integer(&mut self) -> bool {
        if self.cursor.current_char() == '0' {
            let prefix = self.cursor.peek_char(1);
            let radix = match prefix {
                'x' | 'X' => Some((16, "hexadecimal")),
                'b' | 'B' => Some((2, "binary")),
                _ => None,
            };

            if let Some((radix, name)) = radix {
                if self.cursor.peek_char(2).is_digit(radix) {
                    self.cursor.advance_n(2);
                    self.cursor.eat_while(|c| c.is_digit(radix));
                } else {
                    let start = self.cursor.position();
                    let column = self.cursor.column();
                    self.cursor.advance();
                    self.report_at(
                        DiagnosticCode::E_LEXER_INVALID_NUMBER,
                        format!("expected {} digits after `0{}`", name, prefix),
                        start,
                        column,
                    );
                }
                return false;
            }
        }

        self.cursor.eat_while(|c| c.is_ascii_digit());
        true
    }

    /// Whether the cursor sits on a `.` followed by a digit.
    fn at_decimal_point(&self) -> bool {
        self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit()
    }
}
