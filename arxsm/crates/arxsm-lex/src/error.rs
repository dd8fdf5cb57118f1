//! Error types for the lexer crate.
//!
//! Malformed source never produces a `LexError`: it is reported to the
//! diagnostic handler and scanning continues. These errors cover misuse of
//! the token buffer and configuration loading.

use thiserror::Error;

/// Errors returned by fallible lexer operations
#[derive(Debug, Error)]
pub enum LexError {
    /// A token index at or past the end of the buffer
    #[error("token index {index} out of bounds (buffer holds {len} tokens)")]
    TokenIndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Number of tokens in the buffer
        len: usize,
    },

    /// The configuration could not be parsed
    #[error("invalid lexer configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("failed to read lexer configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for lexer operations
pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = LexError::TokenIndexOutOfBounds { index: 12, len: 12 };
        assert_eq!(
            err.to_string(),
            "token index 12 out of bounds (buffer holds 12 tokens)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LexError = io.into();
        assert!(matches!(err, LexError::Io(_)));
    }
}
