//! Character cursor over a single source line.
//!
//! The lexer is fed one line at a time, so the cursor only tracks the
//! column. Positions are byte offsets into the line; columns are 1-based
//! character counts.

/// A cursor for traversing one line of source character by character.
///
/// # Example
///
/// ```
/// use arxsm_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ld x1, [sp]");
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'd');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The line being traversed.
    source: &'a str,

    /// Current byte position in the line.
    position: usize,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            column: 1,
        }
    }

    /// Returns the current character, or '\0' at the end of the line.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one
    /// (0 = current), or '\0' past the end of the line.
    ///
    /// ```
    /// use arxsm_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("é::");
    /// assert_eq!(cursor.peek_char(1), ':');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..offset].is_ascii() && b < 128 {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Returns the character immediately before the cursor, if any.
    pub fn prev_char(&self) -> Option<char> {
        self.source[..self.position].chars().next_back()
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advances by `count` characters, stopping at the end of the line.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Moves the cursor to the end of the line.
    pub fn skip_to_end(&mut self) {
        self.column += self.remaining().chars().count() as u32;
        self.position = self.source.len();
    }

    /// Matches and consumes `expected` if it is the current character.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true at the end of the line.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current column (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte position in the line.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The text between byte position `start` and the cursor.
    ///
    /// ```
    /// use arxsm_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("add x1");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "add");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The text from the cursor to the end of the line.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The whole line.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
