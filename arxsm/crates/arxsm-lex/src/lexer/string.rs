//! String and character literal lexing.
//!
//! Lexemes keep their quotes and escape sequences exactly as written. A
//! backslash escapes the character after it, so `"a\"b"` is one literal.

use arxsm_util::DiagnosticCode;

use super::core::Scanner;
use crate::token::TokenKind;

impl Scanner<'_, '_> {
    /// Lexes a `"..."` string literal.
    pub(super) fn lex_string(&mut self) {
        if self.eat_quoted('"') {
            self.emit(TokenKind::String);
        }
    }

    /// Lexes a `'c'` character literal.
    ///
    /// The literal must hold exactly one character or one escape sequence.
    /// A malformed literal is still emitted after the diagnostic.
    pub(super) fn lex_char(&mut self) {
        if !self.eat_quoted('\'') {
            return;
        }

        let lexeme = self.cursor.slice_from(self.token_start);
        let body = &lexeme[1..lexeme.len() - 1];
        let mut chars = body.chars();
        let well_formed = match chars.next() {
            Some('\\') => chars.next().is_some() && chars.next().is_none(),
            Some(_) => chars.next().is_none(),
            None => false,
        };

        if !well_formed {
            self.report(
                DiagnosticCode::E_LEXER_INVALID_CHAR_LITERAL,
                format!("character literal {} must hold exactly one character", lexeme),
            );
        }
        self.emit(TokenKind::Char);
    }

    /// Consumes a literal delimited by `quote`. Returns false, after
    /// reporting, if the line ends before the closing quote; the cursor is
    /// then at the end of the line.
    fn eat_quoted(&mut self, quote: char) -> bool {
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                let what = if quote == '"' { "string" } else { "character" };
                self.report(
                    DiagnosticCode::E_LEXER_UNTERMINATED_LITERAL,
                    format!("unterminated {} literal", what),
                );
                return false;
            }

            match self.cursor.current_char() {
                '\\' => self.cursor.advance_n(2),
                c if c == quote => {
                    self.cursor.advance();
                    return true;
                },
                _ => self.cursor.advance(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};
    use arxsm_util::{DiagnosticCode, Handler};

    fn lex(line: &str) -> (Vec<(TokenKind, String)>, Handler) {
        let handler = Handler::new();
        let tokens = {
            let mut lexer = Lexer::new(&handler);
            lexer.lex_line(line);
            lexer
                .tokens()
                .iter()
                .map(|t| (t.kind(), t.lexeme().to_string()))
                .collect()
        };
        (tokens, handler)
    }

    #[test]
    fn test_string_literal_verbatim() {
        let (tokens, handler) = lex(r#".string "hi\n\"there\"" % note"#);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], (TokenKind::String, r#""hi\n\"there\"""#.to_string()));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_percent_inside_string_is_not_a_comment() {
        let (tokens, _) = lex(r#""100%" x1"#);
        assert_eq!(tokens[0], (TokenKind::String, r#""100%""#.to_string()));
        assert_eq!(tokens[1].0, TokenKind::Register);
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, handler) = lex(r#".string "abc"#);
        assert_eq!(tokens, vec![(TokenKind::Directive, ".string".to_string())]);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_LITERAL));
        assert_eq!(diags[0].span.column, 9);
    }

    #[test]
    fn test_trailing_backslash_is_unterminated() {
        let (tokens, handler) = lex(r#""abc\"#);
        assert!(tokens.is_empty());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_char_literals() {
        let (tokens, handler) = lex(r"'a' '\n' '\''");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Char, "'a'".to_string()),
                (TokenKind::Char, r"'\n'".to_string()),
                (TokenKind::Char, r"'\''".to_string()),
            ]
        );
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_malformed_char_literal_still_emitted() {
        let (tokens, handler) = lex("'ab' ''");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|(kind, _)| *kind == TokenKind::Char));
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_INVALID_CHAR_LITERAL));
    }

    #[test]
    fn test_unterminated_char() {
        let (tokens, handler) = lex("ldb x1, 'a");
        assert_eq!(tokens.len(), 3);
        assert_eq!(handler.error_count(), 1);
    }
}
