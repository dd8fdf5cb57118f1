//! Span module - Source location tracking.
//!
//! Assembly source reaches the toolchain one line at a time, so a [`Span`]
//! records the 1-based line number and column together with the byte range
//! inside that line.
//!
//! # Examples
//!
//! ```
//! use arxsm_util::span::Span;
//!
//! let span = Span::new(4, 7, 2, 5);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.line, 2);
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in a single source line, identified by:
/// - Byte offsets within the line (start, end)
/// - Line and column numbers (for human-readable output)
///
/// # Examples
///
/// ```
/// use arxsm_util::span::Span;
///
/// let span = Span::new(0, 4, 1, 1);
/// let point = Span::point(3, 9);
/// assert!(point.is_empty());
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in the line
    pub start: usize,
    /// End byte offset in the line (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use arxsm_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.line, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if `other` lies entirely inside this span on the same line
    ///
    /// # Examples
    ///
    /// ```
    /// use arxsm_util::span::Span;
    ///
    /// let outer = Span::new(0, 10, 1, 1);
    /// let inner = Span::new(2, 4, 1, 3);
    /// assert!(outer.contains(inner));
    /// assert!(!inner.contains(outer));
    /// ```
    pub fn contains(&self, other: Span) -> bool {
        self.line == other.line && self.start <= other.start && other.end <= self.end
    }

    /// Returns true if the two spans share at least one byte on the same line
    pub fn overlaps(&self, other: Span) -> bool {
        self.line == other.line && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
