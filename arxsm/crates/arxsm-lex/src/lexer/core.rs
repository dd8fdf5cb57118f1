//! Core lexer implementation.
//!
//! [`Lexer`] owns the token buffer and the line counter. Each call to
//! [`Lexer::lex_line`] runs a `Scanner` over that one line; the scanner
//! dispatches on the current character and appends tokens to the buffer.

use std::sync::Arc;

use arxsm_util::{DiagnosticCode, Handler, SourceSnippet, Span};
use tracing::{debug, trace, warn};

use crate::buffer::TokenBuffer;
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::table::TokenTable;
use crate::token::{Token, TokenKind};

/// Lexer for the Aru assembly language.
///
/// Source is fed one line at a time. Tokens accumulate in an internal
/// buffer that can be read by index or through a forward cursor. Malformed
/// input is reported to the [`Handler`] and skipped; lexing never fails.
///
/// # Examples
///
/// ```
/// use arxsm_lex::{Lexer, TokenKind};
/// use arxsm_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new(&handler);
/// lexer.lex_line("add x1, x2, #1   % increment");
///
/// let kinds: Vec<_> = lexer.tokens().iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Instruction,
///         TokenKind::Register,
///         TokenKind::Comma,
///         TokenKind::Register,
///         TokenKind::Comma,
///         TokenKind::Immediate,
///     ]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'h> {
    /// Keyword classification, shared between lexers.
    table: Arc<TokenTable>,

    /// Scanner options.
    config: LexerConfig,

    /// Receives diagnostics for malformed input.
    handler: &'h Handler,

    /// Every token produced since the last reset.
    buffer: TokenBuffer,

    /// Number of the last line lexed (0 before the first line).
    line: u32,
}

impl<'h> Lexer<'h> {
    /// Creates a lexer using the standard token table and default options.
    pub fn new(handler: &'h Handler) -> Self {
        Self::with_table(TokenTable::standard(), handler)
    }

    /// Creates a lexer using `table` and default options.
    pub fn with_table(table: Arc<TokenTable>, handler: &'h Handler) -> Self {
        Self::with_table_and_config(table, LexerConfig::default(), handler)
    }

    /// Creates a lexer whose table is built from `config`.
    pub fn with_config(config: LexerConfig, handler: &'h Handler) -> Self {
        let table = Arc::new(TokenTable::from_config(&config));
        Self::with_table_and_config(table, config, handler)
    }

    /// Creates a lexer from an existing table and options. Keyword settings
    /// in `config` are ignored; they only apply when a table is built.
    pub fn with_table_and_config(
        table: Arc<TokenTable>,
        config: LexerConfig,
        handler: &'h Handler,
    ) -> Self {
        Self {
            table,
            config,
            handler,
            buffer: TokenBuffer::new(),
            line: 0,
        }
    }

    /// Scans one line of source and appends its tokens to the buffer.
    ///
    /// A trailing line terminator is ignored. Returns the number of tokens
    /// appended.
    pub fn lex_line(&mut self, line: &str) -> usize {
        self.line += 1;
        let text = line.strip_suffix('\n').unwrap_or(line);
        let text = text.strip_suffix('\r').unwrap_or(text);

        let produced = Scanner {
            cursor: Cursor::new(text),
            table: &self.table,
            config: &self.config,
            handler: self.handler,
            buffer: &mut self.buffer,
            line: self.line,
            token_start: 0,
            token_start_column: 1,
            emitted: 0,
        }
        .scan_line();

        debug!(line = self.line, tokens = produced, "lexed line");
        produced
    }

    /// Scans every line of `source`. Returns the number of tokens appended.
    pub fn lex_source(&mut self, source: &str) -> usize {
        source.lines().map(|line| self.lex_line(line)).sum()
    }

    /// The token at `index`, counted from the first token since the last
    /// reset.
    pub fn get_token(&self, index: usize) -> LexResult<&Token> {
        self.buffer.get(index)
    }

    /// Returns the token under the read cursor and advances it. Past the
    /// last token this keeps returning an end-of-input token.
    pub fn next_token(&mut self) -> Token {
        self.buffer.next_token()
    }

    /// The token the next call to [`next_token`](Self::next_token) returns,
    /// or `None` when the cursor is past the last token.
    pub fn peek_token(&self) -> Option<&Token> {
        self.buffer.peek()
    }

    /// Discards every token and restarts line numbering. The token table
    /// and options are kept.
    pub fn reset(&mut self) {
        debug!(discarded = self.buffer.len(), "lexer reset");
        self.buffer.clear();
        self.line = 0;
    }

    /// Moves the read cursor back to the first token.
    pub fn rewind(&mut self) {
        self.buffer.rewind();
    }

    /// All tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        self.buffer.as_slice()
    }

    /// Number of tokens in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no tokens have been produced.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of the last line lexed, 0 before the first.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The token table in use.
    pub fn table(&self) -> &Arc<TokenTable> {
        &self.table
    }

    /// The scanner options in use.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("line", &self.line)
            .field("tokens", &self.buffer.len())
            .field("read", &self.buffer.read_position())
            .field("config", &self.config)
            .finish()
    }
}

/// Scans a single line into the token buffer.
pub(super) struct Scanner<'l, 's> {
    /// Character cursor over the line.
    pub(super) cursor: Cursor<'l>,

    pub(super) table: &'s TokenTable,
    pub(super) config: &'s LexerConfig,
    handler: &'s Handler,
    buffer: &'s mut TokenBuffer,

    /// Line number of the line being scanned (1-based).
    line: u32,

    /// Byte offset where the current token starts.
    pub(super) token_start: usize,

    /// Column where the current token starts (1-based).
    token_start_column: u32,

    /// Tokens emitted for this line so far.
    pub(super) emitted: usize,
}

impl Scanner<'_, '_> {
    /// Scans to the end of the line. Returns the number of tokens emitted.
    fn scan_line(mut self) -> usize {
        loop {
            self.skip_whitespace_and_comments();
            if self.cursor.is_at_end() {
                break;
            }

            self.token_start = self.cursor.position();
            self.token_start_column = self.cursor.column();
            self.scan_token();
        }

        if self.config.emit_newlines && self.emitted > 0 {
            self.token_start = self.cursor.position();
            self.token_start_column = self.cursor.column();
            self.push(TokenKind::Newline, "\n");
        }

        self.emitted
    }

    /// Dispatches on the first character of a token.
    fn scan_token(&mut self) {
        match self.cursor.current_char() {
            ',' => self.single(TokenKind::Comma),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '/' => self.single(TokenKind::Slash),
            '=' => self.single(TokenKind::Equals),
            '&' => self.single(TokenKind::Ampersand),
            '|' => self.single(TokenKind::Pipe),
            '^' => self.single(TokenKind::Caret),
            '~' => self.single(TokenKind::Tilde),
            ':' => self.lex_colon(),
            '.' => self.lex_dot(),
            '<' => self.lex_shift('<', TokenKind::ShiftLeft),
            '>' => self.lex_shift('>', TokenKind::ShiftRight),
            '#' => self.lex_immediate(),
            '$' => self.lex_primary_type(),
            '!' => self.lex_bang(),
            '@' => self.lex_at(),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_word_start(c) => self.lex_word(),
            c => {
                self.cursor.advance();
                self.report_unexpected(c);
            },
        }
    }

    /// Emits a token whose lexeme runs from the token start to the cursor.
    pub(super) fn emit(&mut self, kind: TokenKind) {
        let lexeme = self.cursor.slice_from(self.token_start);
        self.push(kind, lexeme);
    }

    /// Emits a token with an explicit lexeme at the token start position.
    pub(super) fn push(&mut self, kind: TokenKind, lexeme: &str) {
        trace!(line = self.line, column = self.token_start_column, ?kind, lexeme, "token");
        self.buffer
            .push(Token::new(kind, lexeme, self.line, self.token_start_column));
        self.emitted += 1;
    }

    /// Reports a problem with the current token.
    pub(super) fn report(&self, code: DiagnosticCode, message: String) {
        self.report_at(code, message, self.token_start, self.token_start_column);
    }

    /// Reports a problem starting at byte `start` and column `column`.
    pub(super) fn report_at(&self, code: DiagnosticCode, message: String, start: usize, column: u32) {
        warn!(line = self.line, column, %code, "{}", message);

        let end = self.cursor.position().max(start);
        let width = self.cursor.source()[start..end].chars().count() as u32;
        let snippet = SourceSnippet::new(
            self.cursor.source(),
            self.line as usize,
            column as usize,
            (column + width) as usize,
            None::<String>,
        );

        self.handler
            .build_error(Span::new(start, end, self.line, column), message)
            .code(code)
            .snippet(snippet)
            .emit(self.handler);
    }

    /// Reports a character that cannot start a token. The cursor must
    /// already be past it.
    pub(super) fn report_unexpected(&self, c: char) {
        self.report(
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            format!("unexpected character `{}`", c.escape_debug()),
        );
    }

    /// Reports a sigil whose feature is switched off. The cursor must
    /// already be past it.
    pub(super) fn report_disabled(&self, sigil: char, feature: &str) {
        self.report(
            DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
            format!("`{}` is not available: {} are disabled", sigil, feature),
        );
    }
}

/// Characters that can start a word.
#[inline]
pub(super) fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Characters that can continue a word.
#[inline]
pub(super) fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
