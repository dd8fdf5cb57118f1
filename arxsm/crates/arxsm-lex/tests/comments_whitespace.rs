//! Comments and whitespace contribute no tokens.

mod common;

use arxsm_lex::{Lexer, TokenKind};
use arxsm_util::Handler;
use common::{lex_lines, pairs, tok};
use proptest::prelude::*;

#[test]
fn test_comment_only_line() {
    let (tokens, errors) = lex_lines(&["  % This is a comment"]);
    assert!(tokens.is_empty());
    assert_eq!(errors, 0);
}

#[test]
fn test_blank_lines_still_count() {
    let handler = Handler::new();
    let mut lexer = Lexer::new(&handler);
    lexer.lex_line("");
    lexer.lex_line("   ");
    lexer.lex_line("% note");
    lexer.lex_line("hlt");
    assert_eq!(lexer.len(), 1);
    assert_eq!(lexer.get_token(0).unwrap().line(), 4);
}

#[test]
fn test_inline_comment() {
    assert_eq!(
        pairs(&["add x1, x2, #1   % inline comment"]),
        vec![
            tok(TokenKind::Instruction, "add"),
            tok(TokenKind::Register, "x1"),
            tok(TokenKind::Comma, ","),
            tok(TokenKind::Register, "x2"),
            tok(TokenKind::Comma, ","),
            tok(TokenKind::Immediate, "#1"),
        ]
    );
}

#[test]
fn test_whitespace_does_not_change_tokens() {
    let tight = pairs(&["ld x1,[sp]"]);
    let loose = pairs(&[" \t ld \t x1 ,  [ sp ]\r"]);
    assert_eq!(tight, loose);
}

#[test]
fn test_property_whitespace_and_comment_lines_are_empty() {
    proptest!(|(space in "[ \t\r]{0,20}", comment in "(%[^\n]{0,40})?")| {
        let line = format!("{}{}", space, comment);
        let (tokens, errors) = lex_lines(&[&line]);
        prop_assert!(tokens.is_empty());
        prop_assert_eq!(errors, 0);
    });
}

#[test]
fn test_property_trailing_comment_is_ignored() {
    proptest!(|(comment in "[^\n]{0,40}")| {
        let plain = pairs(&["str x3, [sp]"]);
        let commented = pairs(&[&format!("str x3, [sp] %{}", comment)]);
        prop_assert_eq!(plain, commented);
    });
}
