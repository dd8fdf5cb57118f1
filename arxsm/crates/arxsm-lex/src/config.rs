//! Lexer configuration.
//!
//! A configuration is usually read from a TOML document:
//!
//! ```toml
//! case_sensitive = false
//! emit_newlines = true
//! extra_directives = ["section"]
//! extra_instructions = ["brk"]
//!
//! [features]
//! types = true
//! macros = false
//! ```

use crate::error::LexResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional language features that can be switched off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// `$type` primary types
    pub types: bool,
    /// `!macro`, `!out`, `!if`, `!name` and `@name`
    pub macros: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            types: true,
            macros: true,
        }
    }
}

/// Options controlling the token table and the scanner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Match keywords exactly instead of ignoring ASCII case
    pub case_sensitive: bool,
    /// Append a [`TokenKind::Newline`](crate::TokenKind::Newline) after
    /// every line that produced at least one token
    pub emit_newlines: bool,
    /// Optional language features
    pub features: Features,
    /// Directive names added to the standard set, without the leading `.`
    pub extra_directives: Vec<String>,
    /// Instruction mnemonics added to the standard set
    pub extra_instructions: Vec<String>,
}

impl LexerConfig {
    /// Parses a configuration from TOML text. Missing keys take their
    /// default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use arxsm_lex::LexerConfig;
    ///
    /// let config = LexerConfig::from_toml_str("emit_newlines = true").unwrap();
    /// assert!(config.emit_newlines);
    /// assert!(config.features.macros);
    /// ```
    pub fn from_toml_str(source: &str) -> LexResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> LexResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
