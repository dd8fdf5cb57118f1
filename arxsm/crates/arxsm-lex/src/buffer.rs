//! The token buffer and its sequential read cursor.

use crate::error::{LexError, LexResult};
use crate::token::Token;

/// An append-only sequence of tokens with a forward read cursor.
///
/// Random access through [`get`](Self::get) and sequential access through
/// [`next_token`](Self::next_token) are independent: reading by index never
/// moves the cursor.
///
/// # Examples
///
/// ```
/// use arxsm_lex::{Token, TokenBuffer, TokenKind};
///
/// let mut buffer = TokenBuffer::new();
/// buffer.push(Token::new(TokenKind::Instruction, "nop", 1, 1));
///
/// assert_eq!(buffer.get(0).unwrap().lexeme(), "nop");
/// assert!(buffer.get(1).is_err());
/// assert_eq!(buffer.next_token().kind(), TokenKind::Instruction);
/// assert!(buffer.next_token().is_eof());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    read: usize,
}

impl TokenBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
            read: 0,
        }
    }

    /// Appends a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The token at `index`.
    pub fn get(&self, index: usize) -> LexResult<&Token> {
        self.tokens.get(index).ok_or(LexError::TokenIndexOutOfBounds {
            index,
            len: self.tokens.len(),
        })
    }

    /// Returns the token under the read cursor and advances it. Past the
    /// last token this keeps returning an end-of-input token.
    pub fn next_token(&mut self) -> Token {
        match self.tokens.get(self.read) {
            Some(token) => {
                self.read += 1;
                token.clone()
            },
            None => Token::eof(),
        }
    }

    /// The token under the read cursor, without advancing.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.read)
    }

    /// Index of the token the next call to `next_token` returns.
    pub fn read_position(&self) -> usize {
        self.read
    }

    /// Moves the read cursor back to the first token.
    pub fn rewind(&mut self) {
        self.read = 0;
    }

    /// Removes every token and rewinds the read cursor.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.read = 0;
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the buffer holds no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in source order.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates over all tokens without touching the read cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn buffer_of(lexemes: &[&str]) -> TokenBuffer {
        let mut buffer = TokenBuffer::new();
        for (i, lexeme) in lexemes.iter().enumerate() {
            buffer.push(Token::new(TokenKind::Identifier, *lexeme, 1, i as u32 + 1));
        }
        buffer
    }

    #[test]
    fn test_get_out_of_bounds() {
        let buffer = buffer_of(&["a", "b"]);
        match buffer.get(2) {
            Err(LexError::TokenIndexOutOfBounds { index, len }) => {
                assert_eq!((index, len), (2, 2));
            },
            other => panic!("expected out of bounds, got {:?}", other),
        }
    }

    #[test]
    fn test_get_does_not_move_cursor() {
        let mut buffer = buffer_of(&["a", "b"]);
        assert_eq!(buffer.get(1).unwrap().lexeme(), "b");
        assert_eq!(buffer.next_token().lexeme(), "a");
        assert_eq!(buffer.read_position(), 1);
    }

    #[test]
    fn test_next_token_past_end_repeats_eof() {
        let mut buffer = buffer_of(&["a"]);
        buffer.next_token();
        for _ in 0..3 {
            assert!(buffer.next_token().is_eof());
        }
        assert_eq!(buffer.read_position(), 1);
    }

    #[test]
    fn test_tokens_appended_after_eof_are_reachable() {
        let mut buffer = buffer_of(&["a"]);
        buffer.next_token();
        assert!(buffer.next_token().is_eof());
        buffer.push(Token::new(TokenKind::Comma, ",", 2, 1));
        assert_eq!(buffer.next_token().kind(), TokenKind::Comma);
    }

    #[test]
    fn test_peek_and_rewind() {
        let mut buffer = buffer_of(&["a", "b"]);
        assert_eq!(buffer.peek().map(Token::lexeme), Some("a"));
        buffer.next_token();
        buffer.next_token();
        assert!(buffer.peek().is_none());
        buffer.rewind();
        assert_eq!(buffer.next_token().lexeme(), "a");
    }

    #[test]
    fn test_clear() {
        let mut buffer = buffer_of(&["a", "b"]);
        buffer.next_token();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.read_position(), 0);
        assert!(buffer.next_token().is_eof());
    }
}
