//! Whitespace and comment skipping.
//!
//! A `%` starts a comment that runs to the end of the line.

use super::core::Scanner;

impl Scanner<'_, '_> {
    /// Skips whitespace and a trailing comment.
    ///
    /// Called before each token. Leaves the cursor on the first character
    /// of the next token, or at the end of the line.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => self.cursor.advance(),
                '%' => self.cursor.skip_to_end(),
                _ => return,
            }
        }
    }
}
