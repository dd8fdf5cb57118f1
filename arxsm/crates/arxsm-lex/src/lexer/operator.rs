//! Operator and punctuation lexing.
//!
//! This module also decides what a `.` means: a directive marker when it
//! starts a known directive word, otherwise a separator. A `.` between
//! digits never reaches this module; the number lexer consumes it as a
//! decimal point.

use arxsm_util::DiagnosticCode;

use super::core::{is_word_continue, Scanner};
use crate::token::TokenKind;

impl Scanner<'_, '_> {
    /// Lexes a single-character token.
    pub(super) fn single(&mut self, kind: TokenKind) {
        self.cursor.advance();
        self.emit(kind);
    }

    /// Lexes `:` or `::`.
    pub(super) fn lex_colon(&mut self) {
        self.cursor.advance();
        if self.cursor.match_char(':') {
            self.emit(TokenKind::ColonColon);
        } else {
            self.emit(TokenKind::Colon);
        }
    }

    /// Lexes `<<` or `>>`. A lone `<` or `>` is reported and skipped.
    pub(super) fn lex_shift(&mut self, c: char, kind: TokenKind) {
        self.cursor.advance();
        if self.cursor.match_char(c) {
            self.emit(kind);
        } else {
            self.report(
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                format!("unexpected character `{}`, expected `{}{}`", c, c, c),
            );
        }
    }

    /// Lexes a `.` as a directive or a separator.
    ///
    /// The dot starts a directive only when it does not follow an operand
    /// character and the word after it is a directive name ending at a
    /// boundary. So `.type` is a directive but `$obj.word`, `.foo` and
    /// `.def2` start with a separator dot.
    pub(super) fn lex_dot(&mut self) {
        let after_operand = self.cursor.prev_char().map_or(false, is_operand_char);

        if !after_operand {
            // '.' is one byte wide
            let rest = &self.cursor.remaining()[1..];
            let len = rest
                .find(|c: char| !is_word_continue(c))
                .unwrap_or(rest.len());
            let name = &rest[..len];

            if !name.is_empty()
                && is_directive_boundary(rest[len..].chars().next())
                && self.table.is_directive(name)
            {
                self.cursor.advance_n(len + 1);
                self.emit(TokenKind::Directive);
                return;
            }
        }

        self.cursor.advance();
        self.emit(TokenKind::Dot);
    }
}

/// Characters after which a `.` always separates path components.
fn is_operand_char(c: char) -> bool {
    is_word_continue(c) || matches!(c, '.' | ')' | ']')
}

/// What may follow a directive name.
fn is_directive_boundary(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_whitespace() || c == '{' || c == '%',
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};
    use arxsm_util::Handler;

    fn lex(line: &str) -> Vec<(TokenKind, String)> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&handler);
        lexer.lex_line(line);
        lexer
            .tokens()
            .iter()
            .map(|t| (t.kind(), t.lexeme().to_string()))
            .collect()
    }

    fn kinds(line: &str) -> Vec<TokenKind> {
        lex(line).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds(", ( ) [ ] { } + - * / = & | ^ ~"),
            vec![
                TokenKind::Comma,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Equals,
                TokenKind::Ampersand,
                TokenKind::Pipe,
                TokenKind::Caret,
                TokenKind::Tilde,
            ]
        );
    }

    #[test]
    fn test_colon_before_double_colon() {
        assert_eq!(
            kinds("a::q : c:::d"),
            vec![
                TokenKind::Identifier,
                TokenKind::ColonColon,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::ColonColon,
                TokenKind::Colon,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_shifts() {
        assert_eq!(
            lex("1<<4 >> 2"),
            vec![
                (TokenKind::Integer, "1".to_string()),
                (TokenKind::ShiftLeft, "<<".to_string()),
                (TokenKind::Integer, "4".to_string()),
                (TokenKind::ShiftRight, ">>".to_string()),
                (TokenKind::Integer, "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_lone_angle_bracket_reported() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&handler);
        lexer.lex_line("x1 < x2");
        assert_eq!(lexer.len(), 2);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_directive_keyword() {
        assert_eq!(lex(".text"), vec![(TokenKind::Directive, ".text".to_string())]);
        assert_eq!(
            lex(".def{"),
            vec![
                (TokenKind::Directive, ".def".to_string()),
                (TokenKind::LBrace, "{".to_string()),
            ]
        );
        assert_eq!(kinds(".end% done"), vec![TokenKind::Directive]);
    }

    #[test]
    fn test_unknown_directive_is_dot_identifier() {
        assert_eq!(
            lex(".foo"),
            vec![
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::Identifier, "foo".to_string()),
            ]
        );
    }

    #[test]
    fn test_directive_needs_boundary() {
        assert_eq!(kinds(".def2"), vec![TokenKind::Dot, TokenKind::Identifier]);
        assert_eq!(kinds(".word,"), vec![TokenKind::Dot, TokenKind::Identifier, TokenKind::Comma]);
        assert_eq!(kinds(".definitely"), vec![TokenKind::Dot, TokenKind::Identifier]);
    }

    #[test]
    fn test_dot_after_operand_is_separator() {
        assert_eq!(
            kinds("$obj.word"),
            vec![TokenKind::PrimaryType, TokenKind::Dot, TokenKind::Identifier]
        );
        assert_eq!(
            kinds("[sp].size"),
            vec![
                TokenKind::LBracket,
                TokenKind::Register,
                TokenKind::RBracket,
                TokenKind::Dot,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(
            kinds("a..type"),
            vec![TokenKind::Identifier, TokenKind::Dot, TokenKind::Dot, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_lone_dot() {
        assert_eq!(kinds("."), vec![TokenKind::Dot]);
        assert_eq!(kinds(". ."), vec![TokenKind::Dot, TokenKind::Dot]);
    }
}
