//! Word lexing.
//!
//! Handles instructions, registers, identifiers and labels, plus the
//! sigil-prefixed words: `$type`, `!keyword`, `!macro_name` and `@arg`.

use arxsm_util::DiagnosticCode;

use super::core::{is_word_continue, is_word_start, Scanner};
use crate::token::TokenKind;

impl Scanner<'_, '_> {
    /// Lexes a word and classifies it through the token table.
    ///
    /// A word that opens the line and is followed by a lone `:` at the end
    /// of the statement is a label. The label's lexeme is the name only.
    pub(super) fn lex_word(&mut self) {
        self.eat_word();

        if self.emitted == 0 && self.at_label_colon() {
            let name = self.cursor.slice_from(self.token_start);
            self.cursor.advance();
            self.push(TokenKind::Label, name);
            return;
        }

        let kind = self.table.classify_word(self.cursor.slice_from(self.token_start));
        self.emit(kind);
    }

    /// Lexes `$name`, the primary type of a type path.
    pub(super) fn lex_primary_type(&mut self) {
        self.cursor.advance();

        if !self.config.features.types {
            self.report_disabled('$', "type annotations");
            return;
        }

        if !is_word_start(self.cursor.current_char()) {
            self.report(
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                "unexpected character `$`, expected a type name".to_string(),
            );
            return;
        }

        self.eat_word();
        self.emit(TokenKind::PrimaryType);
    }

    /// Lexes `!macro`, `!out`, `!if` or a `!name` macro invocation.
    pub(super) fn lex_bang(&mut self) {
        self.cursor.advance();

        if !self.config.features.macros {
            self.report_disabled('!', "macros");
            return;
        }

        if !is_word_start(self.cursor.current_char()) {
            self.report_unexpected('!');
            return;
        }

        let name_start = self.cursor.position();
        self.eat_word();
        let kind = self
            .table
            .keyword(self.cursor.slice_from(name_start))
            .unwrap_or(TokenKind::MacroName);
        self.emit(kind);
    }

    /// Lexes `@name` as a macro argument, or a bare `@` as a location
    /// pointer.
    pub(super) fn lex_at(&mut self) {
        self.cursor.advance();

        if !is_word_start(self.cursor.current_char()) {
            self.emit(TokenKind::At);
            return;
        }

        if !self.config.features.macros {
            self.report_disabled('@', "macros");
            return;
        }

        self.eat_word();
        self.emit(TokenKind::MacroArg);
    }

    fn eat_word(&mut self) {
        self.cursor.eat_while(is_word_continue);
    }

    /// Whether the cursor sits on a `:` that ends a label: not part of `::`
    /// and followed by whitespace, a comment, a directive dot or the end of
    /// the line.
    fn at_label_colon(&self) -> bool {
        if self.cursor.current_char() != ':' {
            return false;
        }
        let rest = &self.cursor.remaining()[1..];
        match rest.chars().next() {
            None => true,
            Some(c) => c.is_whitespace() || c == '%' || c == '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexerConfig, TokenKind};
    use arxsm_util::{DiagnosticCode, Handler};

    fn lex_with(config: LexerConfig, line: &str) -> (Vec<(TokenKind, String)>, Handler) {
        let handler = Handler::new();
        let tokens = {
            let mut lexer = Lexer::with_config(config, &handler);
            lexer.lex_line(line);
            lexer
                .tokens()
                .iter()
                .map(|t| (t.kind(), t.lexeme().to_string()))
                .collect()
        };
        (tokens, handler)
    }

    fn lex(line: &str) -> Vec<(TokenKind, String)> {
        lex_with(LexerConfig::default(), line).0
    }

    fn tok(kind: TokenKind, lexeme: &str) -> (TokenKind, String) {
        (kind, lexeme.to_string())
    }

    #[test]
    fn test_word_classification() {
        assert_eq!(
            lex("LDB x31, Node_2"),
            vec![
                tok(TokenKind::Instruction, "LDB"),
                tok(TokenKind::Register, "x31"),
                tok(TokenKind::Comma, ","),
                tok(TokenKind::Identifier, "Node_2"),
            ]
        );
    }

    #[test]
    fn test_register_out_of_range_is_identifier() {
        assert_eq!(lex("x32"), vec![tok(TokenKind::Identifier, "x32")]);
    }

    #[test]
    fn test_label() {
        assert_eq!(
            lex("loop: b loop"),
            vec![
                tok(TokenKind::Label, "loop"),
                tok(TokenKind::Instruction, "b"),
                tok(TokenKind::Identifier, "loop"),
            ]
        );
        assert_eq!(lex("_start:"), vec![tok(TokenKind::Label, "_start")]);
        assert_eq!(lex("end:% done"), vec![tok(TokenKind::Label, "end")]);
    }

    #[test]
    fn test_label_followed_by_directive() {
        assert_eq!(
            lex("arr:.word 1"),
            vec![
                tok(TokenKind::Label, "arr"),
                tok(TokenKind::Directive, ".word"),
                tok(TokenKind::Integer, "1"),
            ]
        );
    }

    #[test]
    fn test_label_column_is_name_start() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&handler);
        lexer.lex_line("   main:");
        let label = lexer.get_token(0).unwrap();
        assert_eq!(label.kind(), TokenKind::Label);
        assert_eq!(label.column(), 4);
    }

    #[test]
    fn test_not_a_label() {
        assert_eq!(
            lex("value:8"),
            vec![
                tok(TokenKind::Identifier, "value"),
                tok(TokenKind::Colon, ":"),
                tok(TokenKind::Integer, "8"),
            ]
        );
        assert_eq!(
            lex("next::Node"),
            vec![
                tok(TokenKind::Identifier, "next"),
                tok(TokenKind::ColonColon, "::"),
                tok(TokenKind::Identifier, "Node"),
            ]
        );
        assert_eq!(
            lex("{ field: 8"),
            vec![
                tok(TokenKind::LBrace, "{"),
                tok(TokenKind::Identifier, "field"),
                tok(TokenKind::Colon, ":"),
                tok(TokenKind::Integer, "8"),
            ]
        );
    }

    #[test]
    fn test_primary_type_path() {
        assert_eq!(
            lex("$obj.array.word"),
            vec![
                tok(TokenKind::PrimaryType, "$obj"),
                tok(TokenKind::Dot, "."),
                tok(TokenKind::Identifier, "array"),
                tok(TokenKind::Dot, "."),
                tok(TokenKind::Identifier, "word"),
            ]
        );
    }

    #[test]
    fn test_dollar_without_name() {
        let (tokens, handler) = lex_with(LexerConfig::default(), "$ 4");
        assert_eq!(tokens, vec![tok(TokenKind::Integer, "4")]);
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
        );
    }

    #[test]
    fn test_macro_keywords() {
        assert_eq!(
            lex("!macro !out !IF !print"),
            vec![
                tok(TokenKind::Macro, "!macro"),
                tok(TokenKind::Out, "!out"),
                tok(TokenKind::If, "!IF"),
                tok(TokenKind::MacroName, "!print"),
            ]
        );
    }

    #[test]
    fn test_at_sigil() {
        assert_eq!(
            lex("@count @ x1"),
            vec![
                tok(TokenKind::MacroArg, "@count"),
                tok(TokenKind::At, "@"),
                tok(TokenKind::Register, "x1"),
            ]
        );
    }

    #[test]
    fn test_bare_bang_reported() {
        let (tokens, handler) = lex_with(LexerConfig::default(), "! x1");
        assert_eq!(tokens, vec![tok(TokenKind::Register, "x1")]);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_disabled_types() {
        let mut config = LexerConfig::default();
        config.features.types = false;
        let (tokens, handler) = lex_with(config, "$obj");
        assert_eq!(tokens, vec![tok(TokenKind::Identifier, "obj")]);
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN));
    }

    #[test]
    fn test_disabled_macros() {
        let mut config = LexerConfig::default();
        config.features.macros = false;
        let (tokens, handler) = lex_with(config, "!if @arg @");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "if"),
                tok(TokenKind::Identifier, "arg"),
                tok(TokenKind::At, "@"),
            ]
        );
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn test_extra_instruction_from_config() {
        let config = LexerConfig {
            extra_instructions: vec!["brk".to_string()],
            ..LexerConfig::default()
        };
        let (tokens, _) = lex_with(config, "brk");
        assert_eq!(tokens, vec![tok(TokenKind::Instruction, "brk")]);
    }

    #[test]
    fn test_case_sensitive_config() {
        let config = LexerConfig {
            case_sensitive: true,
            ..LexerConfig::default()
        };
        let (tokens, _) = lex_with(config, "ADD add");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "ADD"),
                tok(TokenKind::Instruction, "add"),
            ]
        );
    }
}
