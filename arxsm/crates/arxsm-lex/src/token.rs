//! Token definitions for the Aru assembly lexer.

use crate::keywords::{Directive, Mnemonic, Register};
use smol_str::SmolStr;
use std::fmt;

/// Token kinds produced by the lexer.
///
/// The set is closed: every token carries exactly one of these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ==================== CONTROL ====================
    /// End of input, yielded by the read cursor past the last token
    Eof,
    /// End of a source line, only produced when enabled in the configuration
    Newline,

    // ==================== NAMES ====================
    /// `name:` at the start of a line (lexeme excludes the colon)
    Label,
    /// Any word that is not a keyword
    Identifier,
    /// `.def`, `.type`, ... (lexeme includes the dot)
    Directive,
    /// Instruction mnemonic
    Instruction,
    /// Register name
    Register,

    // ==================== LITERALS ====================
    /// `#` immediate (lexeme includes the `#`)
    Immediate,
    /// Integer literal: decimal, `0x` hex or `0b` binary
    Integer,
    /// Decimal floating-point literal
    Float,
    /// `'c'` character literal (lexeme includes the quotes)
    Char,
    /// `"..."` string literal (lexeme includes the quotes)
    String,

    // ==================== PUNCTUATION ====================
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `:`
    Colon,
    /// `::`
    ColonColon,
    /// `.` as a separator
    Dot,

    // ==================== OPERATORS ====================
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `=` load-immediate marker
    Equals,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `@` location pointer or logical predicate
    At,

    // ==================== MACROS ====================
    /// `!macro`
    Macro,
    /// `!out`
    Out,
    /// `!if`
    If,
    /// `!name` (lexeme includes the `!`)
    MacroName,
    /// `@name` (lexeme includes the `@`)
    MacroArg,

    // ==================== TYPES ====================
    /// `$name` (lexeme includes the `$`)
    PrimaryType,
    /// Sub-type path component. Paths are produced as `Dot` + `Identifier`
    /// pairs, so the lexer never emits this kind.
    SubType,

    // ==================== RESERVED ====================
    /// Comments never reach the token stream; kept for consumers that
    /// synthesize tokens.
    Comment,
    /// A token the lexer could not classify
    Unknown,
}

impl TokenKind {
    /// Returns true for the single-purpose punctuation kinds.
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::Colon
                | TokenKind::ColonColon
                | TokenKind::Dot
        )
    }

    /// Returns true for arithmetic and bitwise operators.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Equals
                | TokenKind::Ampersand
                | TokenKind::Pipe
                | TokenKind::Caret
                | TokenKind::Tilde
                | TokenKind::ShiftLeft
                | TokenKind::ShiftRight
                | TokenKind::At
        )
    }

    /// Returns true for literal kinds.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Immediate
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::Char
                | TokenKind::String
        )
    }

    /// Returns true for the `!` keywords.
    pub fn is_macro_keyword(&self) -> bool {
        matches!(self, TokenKind::Macro | TokenKind::Out | TokenKind::If)
    }

    /// A short human-readable description, used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Newline => "end of line",
            TokenKind::Label => "label",
            TokenKind::Identifier => "identifier",
            TokenKind::Directive => "directive",
            TokenKind::Instruction => "instruction",
            TokenKind::Register => "register",
            TokenKind::Immediate => "immediate",
            TokenKind::Integer => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::Char => "character literal",
            TokenKind::String => "string literal",
            TokenKind::Comma => "`,`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Colon => "`:`",
            TokenKind::ColonColon => "`::`",
            TokenKind::Dot => "`.`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Asterisk => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Equals => "`=`",
            TokenKind::Ampersand => "`&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Tilde => "`~`",
            TokenKind::ShiftLeft => "`<<`",
            TokenKind::ShiftRight => "`>>`",
            TokenKind::At => "`@`",
            TokenKind::Macro => "`!macro`",
            TokenKind::Out => "`!out`",
            TokenKind::If => "`!if`",
            TokenKind::MacroName => "macro name",
            TokenKind::MacroArg => "macro argument",
            TokenKind::PrimaryType => "primary type",
            TokenKind::SubType => "sub-type",
            TokenKind::Comment => "comment",
            TokenKind::Unknown => "unknown token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its kind, source text and 1-based position.
///
/// Tokens own their lexeme and are immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: SmolStr,
    line: u32,
    column: u32,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<SmolStr>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// The end-of-input token. It has no source position, so both line and
    /// column are 0.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "", 0, 0)
    }

    /// The token kind
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text this token was built from
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// 1-based line number
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the first character
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true if this token has kind `kind`
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns true for the end-of-input token
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The directive named by a [`TokenKind::Directive`] token.
    ///
    /// Directives added through configuration have no typed counterpart
    /// and return `None`.
    pub fn directive(&self) -> Option<Directive> {
        match self.kind {
            TokenKind::Directive => Directive::from_name(self.lexeme.trim_start_matches('.')),
            _ => None,
        }
    }

    /// The mnemonic named by a [`TokenKind::Instruction`] token.
    pub fn mnemonic(&self) -> Option<Mnemonic> {
        match self.kind {
            TokenKind::Instruction => Mnemonic::from_name(&self.lexeme),
            _ => None,
        }
    }

    /// The register named by a [`TokenKind::Register`] token.
    pub fn register(&self) -> Option<Register> {
        match self.kind {
            TokenKind::Register => Register::from_name(&self.lexeme),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{}", self.kind),
            _ => write!(
                f,
                "{:?}({:?}) at {}:{}",
                self.kind, self.lexeme, self.line, self.column
            ),
        }
    }
}
