//! Lexer module.
//!
//! The lexer is split into focused components, each adding methods to the
//! line scanner:
//! - `core` - the `Lexer`, its token buffer, and the per-line dispatch
//! - `comment` - whitespace and `%` comments
//! - `identifier` - words, labels, `$` types and macro sigils
//! - `number` - integer, float and `#` immediate literals
//! - `string` - string and character literals
//! - `operator` - punctuation, operators and dot disambiguation

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
