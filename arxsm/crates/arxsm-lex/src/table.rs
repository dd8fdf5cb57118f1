//! The token table: classification of words as keywords.
//!
//! A table is built once, either from the standard keyword sets or from a
//! [`LexerConfig`], and shared read-only between lexers through an `Arc`.

use crate::config::LexerConfig;
use crate::keywords::{self, Directive, Mnemonic, Register};
use crate::token::TokenKind;
use lazy_static::lazy_static;
use rustc_hash::{FxHashMap, FxHashSet};
use std::borrow::Cow;
use std::sync::Arc;

lazy_static! {
    static ref STANDARD: Arc<TokenTable> = Arc::new(TokenTableBuilder::standard().build());
}

/// Classifies lexemes as directives, instructions, registers or `!` keywords.
///
/// Lookups are exact matches on the whole lexeme. Unless the table is case
/// sensitive, keys are stored and queried in ASCII lowercase.
///
/// # Examples
///
/// ```
/// use arxsm_lex::{TokenKind, TokenTable};
///
/// let table = TokenTable::standard();
/// assert!(table.is_directive("def"));
/// assert_eq!(table.classify_word("LD"), TokenKind::Instruction);
/// assert_eq!(table.classify_word("x31"), TokenKind::Register);
/// assert_eq!(table.classify_word("Node"), TokenKind::Identifier);
/// ```
#[derive(Clone, Debug)]
pub struct TokenTable {
    case_sensitive: bool,
    directives: FxHashSet<String>,
    words: FxHashMap<String, TokenKind>,
    keywords: FxHashMap<String, TokenKind>,
}

impl TokenTable {
    /// The process-wide table holding the standard keyword sets.
    pub fn standard() -> Arc<TokenTable> {
        Arc::clone(&STANDARD)
    }

    /// Start building a table with no entries.
    pub fn builder() -> TokenTableBuilder {
        TokenTableBuilder::new()
    }

    /// Build a table from the standard sets plus the additions in `config`.
    pub fn from_config(config: &LexerConfig) -> TokenTable {
        TokenTableBuilder::standard()
            .case_sensitive(config.case_sensitive)
            .directives(config.extra_directives.iter().map(String::as_str))
            .instructions(config.extra_instructions.iter().map(String::as_str))
            .build()
    }

    /// Whether keyword matching respects ASCII case.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns true if `name` (without the leading `.`) is a directive.
    pub fn is_directive(&self, name: &str) -> bool {
        self.directives.contains(&*self.key(name))
    }

    /// Classifies a word as an instruction, a register or an identifier.
    pub fn classify_word(&self, word: &str) -> TokenKind {
        self.words
            .get(&*self.key(word))
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    /// Looks up a reserved word written after `!`, without the sigil.
    pub fn keyword(&self, name: &str) -> Option<TokenKind> {
        self.keywords.get(&*self.key(name)).copied()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.directives.len() + self.words.len() + self.keywords.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        fold(self.case_sensitive, name)
    }
}

fn fold(case_sensitive: bool, name: &str) -> Cow<'_, str> {
    if case_sensitive || !name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(name.to_ascii_lowercase())
    }
}

/// Builder for [`TokenTable`].
///
/// Entries are case-folded when the table is built, so the order of
/// [`case_sensitive`](Self::case_sensitive) and the entry calls does not
/// matter. A word added both as an instruction and as a register keeps the
/// kind it was added with last.
#[derive(Clone, Debug, Default)]
pub struct TokenTableBuilder {
    case_sensitive: bool,
    directives: Vec<String>,
    words: Vec<(String, TokenKind)>,
    keywords: Vec<(String, TokenKind)>,
}

impl TokenTableBuilder {
    /// An empty, case-insensitive builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the standard directives, instructions,
    /// registers and `!` keywords.
    pub fn standard() -> Self {
        Self::new()
            .directives(Directive::ALL.iter().map(|d| d.name()))
            .instructions(Mnemonic::ALL.iter().map(|m| m.name()))
            .registers(Register::all().map(Register::name))
            .keyword(keywords::MACRO_KEYWORD, TokenKind::Macro)
            .keyword(keywords::OUT_KEYWORD, TokenKind::Out)
            .keyword(keywords::IF_KEYWORD, TokenKind::If)
    }

    /// Match keywords exactly instead of ignoring ASCII case.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add a directive name, without the leading `.`.
    pub fn directive(mut self, name: impl Into<String>) -> Self {
        self.directives.push(name.into());
        self
    }

    /// Add several directive names.
    pub fn directives<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |builder, name| builder.directive(name))
    }

    /// Add an instruction mnemonic.
    pub fn instruction(mut self, name: impl Into<String>) -> Self {
        self.words.push((name.into(), TokenKind::Instruction));
        self
    }

    /// Add several instruction mnemonics.
    pub fn instructions<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |builder, name| builder.instruction(name))
    }

    /// Add a register name.
    pub fn register(mut self, name: impl Into<String>) -> Self {
        self.words.push((name.into(), TokenKind::Register));
        self
    }

    /// Add several register names.
    pub fn registers<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |builder, name| builder.register(name))
    }

    /// Add a reserved word recognized after `!`.
    pub fn keyword(mut self, name: impl Into<String>, kind: TokenKind) -> Self {
        self.keywords.push((name.into(), kind));
        self
    }

    /// Finish the table.
    pub fn build(self) -> TokenTable {
        let case_sensitive = self.case_sensitive;
        let key = |name: String| {
            if case_sensitive {
                name
            } else {
                name.to_ascii_lowercase()
            }
        };

        TokenTable {
            case_sensitive,
            directives: self.directives.into_iter().map(key).collect(),
            words: self
                .words
                .into_iter()
                .map(|(name, kind)| (key(name), kind))
                .collect(),
            keywords: self
                .keywords
                .into_iter()
                .map(|(name, kind)| (key(name), kind))
                .collect(),
        }
    }
}
