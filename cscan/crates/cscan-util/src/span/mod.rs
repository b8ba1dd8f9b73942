//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets for slicing and line/column information for people.
//!
//! # Examples
//!
//! ```
//! use cscan_util::span::Span;
//!
//! // `x` in "int x=10;"
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(&"int x=10;"[span.start..span.end], "x");
//! ```

mod source_file;

pub use source_file::SourceFile;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers (for human-readable output)
///
/// Columns are counted in characters, matching the scanner's cursor.
///
/// # Examples
///
/// ```
/// use cscan_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert!(span.has_location());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based, 0 when unknown)
    pub line: u32,
    /// Column number (1-based, 0 when unknown)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use cscan_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(!Span::DUMMY.has_location());
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
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if the span points at a real line and column.
    #[inline]
    pub fn has_location(&self) -> bool {
        self.line > 0 && self.column > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(4, 5, 1, 5);
        assert_eq!(span.start, 4);
        assert_eq!(span.end, 5);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
        assert!(span.has_location());
    }

    #[test]
    fn test_dummy_has_no_location() {
        assert!(!Span::DUMMY.has_location());
        assert!(!Span::default().has_location());
    }
}
