//! Shared helpers for the lexer integration tests.

#![allow(dead_code)]

use arxsm_lex::{Lexer, Token, TokenKind};
use arxsm_util::Handler;

/// Lexes `lines` with a fresh lexer and returns the tokens and the number
/// of errors reported.
pub fn lex_lines(lines: &[&str]) -> (Vec<Token>, usize) {
    let handler = Handler::new();
    let mut lexer = Lexer::new(&handler);
    for line in lines {
        lexer.lex_line(line);
    }
    (lexer.tokens().to_vec(), handler.error_count())
}

/// `(kind, lexeme)` pairs for `lines`.
pub fn pairs(lines: &[&str]) -> Vec<(TokenKind, String)> {
    lex_lines(lines)
        .0
        .into_iter()
        .map(|t| (t.kind(), t.lexeme().to_string()))
        .collect()
}

/// Shorthand for an expected `(kind, lexeme)` pair.
pub fn tok(kind: TokenKind, lexeme: &str) -> (TokenKind, String) {
    (kind, lexeme.to_string())
}
