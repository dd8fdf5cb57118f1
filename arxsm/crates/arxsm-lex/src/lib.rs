//! arxsm-lex - Lexical Analyzer for the Aru assembly language
//!
//! This crate turns assembly source, fed one line at a time, into a
//! growable, randomly indexable sequence of typed tokens.
//!
//! # Example Usage
//!
//! ```
//! use arxsm_lex::{Lexer, TokenKind};
//! use arxsm_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(&handler);
//!
//! lexer.lex_line(".def Node {   % a linked list node");
//! lexer.lex_line("    value :8 .next :: Node .");
//! lexer.lex_line("}");
//!
//! // Random access
//! assert_eq!(lexer.get_token(0).unwrap().lexeme(), ".def");
//! assert_eq!(lexer.len(), 12);
//!
//! // Or read them in order
//! assert_eq!(lexer.next_token().kind(), TokenKind::Directive);
//! assert_eq!(lexer.next_token().kind(), TokenKind::Identifier);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`keywords`] - The standard directive, mnemonic and register sets
//! - [`table`] - The token table classifying words as keywords
//! - [`lexer`] - The line scanner
//! - [`buffer`] - The token buffer and its read cursor
//! - [`cursor`] - Character cursor over a line
//! - [`config`] - Lexer options, loadable from TOML
//!
//! # Token Categories
//!
//! ## Names
//!
//! - **Directives**: `.def`, `.type`, `.text`, ... A `.` only starts a
//!   directive when it does not follow an operand and the word is a known
//!   directive; otherwise it is a separator dot.
//! - **Instructions** and **registers**: looked up in the token table,
//!   ignoring ASCII case by default.
//! - **Labels**: `name:` at the start of a line.
//! - **Identifiers**: every other word. Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0xFF`, `0b1010`
//! - **Float**: `3.14`
//! - **Immediate**: `#1`, `#-8`, `#0x10`
//! - **String** and **character**: `"text"`, `'c'`
//!
//! ## Types and macros
//!
//! - **Primary type**: `$obj`, refined by `.field` components
//! - **Macro keywords**: `!macro`, `!out`, `!if`
//! - **Macro names** and **arguments**: `!name`, `@name`
//!
//! ## Comments
//!
//! `%` to the end of the line. Comments produce no tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod config;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod table;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use buffer::TokenBuffer;
pub use config::{Features, LexerConfig};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use keywords::{Directive, InstrFormat, Mnemonic, Register};
pub use lexer::Lexer;
pub use table::{TokenTable, TokenTableBuilder};
pub use token::{Token, TokenKind};
